use std::io;
use std::time::Duration;

use anyhow::Context;
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::Instant;

use calview::{
    app::{AppState, Mode},
    calendar::Dataset,
    input::{command_mode::{self, CommandOutcome}, details_mode, insert_mode, normal_mode},
    storage::{config::Config, preferences::FileStore},
};

use crate::tui::presentation::ui;

/// Upper bound on how long the loop sleeps when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub async fn run_tui(config: Config) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let dataset = match &config.data.dataset {
        Some(path) => Dataset::load(path, today)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => Dataset::bundled(today).context("loading bundled dataset")?,
    };
    tracing::info!(
        "Loaded {} events, {} categories, {} priorities",
        dataset.events.len(),
        dataset.categories.items().len(),
        dataset.priorities.items().len()
    );

    let mut app = AppState::new(dataset, today)
        .with_ui_config(config.ui.clone())
        .with_preferences(Box::new(FileStore::new(FileStore::default_path())));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("TUI loop failed: {}", err);
    }
    res.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);

        if event::poll(timeout)?
            && let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && route_key(key.code, app) == CommandOutcome::Quit
        {
            tracing::info!("Quit requested");
            return Ok(());
        }

        app.tick();
    }
}

fn route_key(code: KeyCode, app: &mut AppState) -> CommandOutcome {
    if app.show_help {
        handle_help_keys(code, app);
        return CommandOutcome::Continue;
    }

    match app.mode {
        Mode::Command => return command_mode::handle_key(code, app),
        Mode::Insert => insert_mode::handle_key(code, app),
        Mode::Confirm => details_mode::handle_confirm_key(code, app),
        Mode::Normal => {
            if app.details_event_id.is_some() {
                details_mode::handle_details_key(code, app);
            } else if code == KeyCode::Char('q') {
                return CommandOutcome::Quit;
            } else {
                normal_mode::handle_key(code, app);
            }
        }
    }
    CommandOutcome::Continue
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}
