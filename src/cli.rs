use std::{
    env,
    io::Write,
    process::{Command, Stdio},
};

use anyhow::Context;
use chrono::{Local, NaiveDate};

use calview::{
    calendar::{Dataset, Event, ReferenceList},
    storage::config::Config,
    ui::details_view::{format_duration, format_long_date, format_time_12h},
};

pub const USAGE: &str = "Usage: calview [--agenda [YYYY-MM-DD]]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Default,
    Help,
    AgendaDate(NaiveDate),
}

pub fn parse_cli_mode<I>(args: I) -> Result<CliMode, String>
where
    I: IntoIterator<Item = String>,
{
    let mut agenda_date = None;
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--agenda" => {
                let target_date = match args.next_if(|next| !next.starts_with("--")) {
                    Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                        .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD.", date_str))?,
                    None => Local::now().date_naive(),
                };
                agenda_date = Some(target_date);
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(agenda_date.map_or(CliMode::Default, CliMode::AgendaDate))
}

pub fn run_agenda_mode(config: &Config, date: NaiveDate) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let dataset = match &config.data.dataset {
        Some(path) => Dataset::load(path, today)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => Dataset::bundled(today).context("loading bundled dataset")?,
    };

    let mut events: Vec<&Event> = dataset.events.iter().filter(|event| event.is_on(date)).collect();
    events.sort_by_key(|event| event.time);
    tracing::info!("Agenda for {}: {} events", date, events.len());

    let agenda = format_agenda_text(date, &events, &dataset.categories);
    display_with_pager(&agenda)?;
    Ok(())
}

fn format_agenda_text(date: NaiveDate, events: &[&Event], categories: &ReferenceList) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Agenda - {}", format_long_date(date)));
    lines.push(String::new());

    if events.is_empty() {
        lines.push("No events scheduled.".to_string());
    } else {
        for event in events {
            lines.push(format!("- {}", build_agenda_line(event, categories)));
        }
    }

    lines.join("\n")
}

fn build_agenda_line(event: &Event, categories: &ReferenceList) -> String {
    let time_label = format!("{} ({})", format_time_12h(event.time), format_duration(event.duration_minutes));
    let category = categories.lookup(&event.category);

    let mut line = format!("{:<22} {} [{}]", time_label, event.title, category.name);
    if !event.location.is_empty() {
        line.push_str(&format!(" @ {}", event.location));
    }
    line
}

fn display_with_pager(text: &str) -> std::io::Result<()> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let Some(cmd) = parts.next() else {
        println!("{text}");
        return Ok(());
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(e) => {
            tracing::debug!("Pager '{}' unavailable: {}", cmd, e);
            println!("{text}");
        }
    }

    Ok(())
}
