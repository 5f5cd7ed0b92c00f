use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use calview::{
    app::{AppState, Mode, Section},
    calendar::{ReferenceList, Selection},
    timers::MonthStep,
};
use crate::tui::{calendar_views, dialogs, sections};

pub fn ui(f: &mut Frame, app: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, main_chunks[0]);

    match app.section {
        Section::Calendar => render_calendar(f, app, main_chunks[1]),
        Section::About => sections::about::render(f, app, main_chunks[1]),
        Section::Contact => sections::contact::render(f, app, main_chunks[1]),
    }

    render_status(f, app, main_chunks[2]);

    if app.details_event_id.is_some() {
        dialogs::event_details::render(f, app);
    }

    if app.delete_confirmation_event_id.is_some() {
        dialogs::delete_confirmation::render(f, app);
    }

    if app.event_form.is_some() {
        dialogs::event_form::render(f, app);
    }

    if app.show_help {
        dialogs::help::render(f, app);
    }

    dialogs::toasts::render(f, app);
}

fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(area);

    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(idx, section)| Line::from(format!("{} {}", idx + 1, section.title())))
        .collect();
    let selected = Section::ALL.iter().position(|s| *s == app.section).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(app.theme.status_bar))
        .highlight_style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
        .block(Block::default().borders(Borders::ALL).title(" calview "));
    f.render_widget(tabs, chunks[0]);

    let theme = Paragraph::new(Line::from(vec![
        Span::raw("Theme: "),
        Span::styled(app.theme.name, Style::default().fg(app.theme.accent).add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(theme, chunks[1]);
}

fn render_calendar(f: &mut Frame, app: &AppState, area: Rect) {
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Percentage(35),
        ])
        .split(area);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(content_chunks[1]);

    calendar_views::month::render(f, app, content_chunks[0]);
    calendar_views::stats::render(f, app, side_chunks[0]);
    calendar_views::event_list::render(f, app, side_chunks[1]);
}

fn render_status(f: &mut Frame, app: &AppState, area: Rect) {
    let status_text = if matches!(app.mode, Mode::Command) {
        app.command_buffer.to_string()
    } else {
        let mut parts = vec![
            format!("{:?}", app.mode),
            format!("Category: {}", selection_label(&app.filter.category, &app.categories)),
            format!("Priority: {}", selection_label(&app.filter.priority, &app.priorities)),
        ];
        match app.month_transition {
            Some(MonthStep::Previous) => parts.push("◀ changing month".to_string()),
            Some(MonthStep::Next) => parts.push("changing month ▶".to_string()),
            None => {}
        }
        parts.push("Press 'q' to quit, '?' for help".to_string());
        parts.join(" | ")
    };

    let status_color = if matches!(app.mode, Mode::Command) {
        app.theme.command_mode
    } else {
        app.theme.status_bar
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(if matches!(app.mode, Mode::Command) { Alignment::Left } else { Alignment::Center })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

/// Display name of a filter choice.
pub fn selection_label(selection: &Selection, list: &ReferenceList) -> String {
    match selection {
        Selection::All => "All".to_string(),
        Selection::Only(id) => list.lookup(id).name,
    }
}

/// Centered rectangle clamped to the frame.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
