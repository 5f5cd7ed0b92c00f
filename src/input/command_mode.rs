use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode, Section};
use crate::calendar::Selection;
use crate::toast::ToastKind;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Goto(NaiveDate),
    NewEvent(Option<String>),
    Theme(String),
    Category(Selection),
    Priority(Selection),
    Help,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Quit,
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    if parts.is_empty() {
        return Command::Error("Empty command".to_string());
    }

    match parts[0] {
        "q" | "quit" => Command::Quit,
        "help" => Command::Help,
        "goto" => {
            if parts.len() < 2 {
                Command::Error("goto requires a date argument".to_string())
            } else if let Ok(date) = NaiveDate::parse_from_str(parts[1], "%Y-%m-%d") {
                Command::Goto(date)
            } else {
                Command::Error(format!("Invalid date format: {}", parts[1]))
            }
        }
        "new" => {
            if parts.len() < 2 {
                Command::NewEvent(None)
            } else {
                let title = parts[1..].join(" ");
                Command::NewEvent(Some(title))
            }
        }
        "theme" => {
            if parts.len() < 2 {
                Command::Error("theme requires a theme name".to_string())
            } else {
                Command::Theme(parts[1].to_string())
            }
        }
        "category" | "cat" => {
            if parts.len() < 2 {
                Command::Error("category requires an id or 'all'".to_string())
            } else {
                Command::Category(Selection::parse(parts[1]))
            }
        }
        "priority" | "pri" => {
            if parts.len() < 2 {
                Command::Error("priority requires an id or 'all'".to_string())
            } else {
                Command::Priority(Selection::parse(parts[1]))
            }
        }
        _ => Command::Error(format!("Unknown command: {}", parts[0])),
    }
}

pub fn apply_command(command: Command, state: &mut AppState) -> CommandOutcome {
    match command {
        Command::Quit => return CommandOutcome::Quit,
        Command::Help => {
            state.show_help = true;
            state.help_scroll = 0;
        }
        Command::Goto(date) => {
            state.section = Section::Calendar;
            state.select_date(date);
        }
        Command::NewEvent(title) => {
            state.section = Section::Calendar;
            state.open_event_form(title.unwrap_or_default());
        }
        Command::Theme(key) => {
            state.set_theme(&key);
        }
        Command::Category(selection) => {
            if let Selection::Only(id) = &selection
                && state.categories.get(id).is_none()
            {
                state.notify(ToastKind::Error, format!("Unknown category: {}", id), None);
            } else {
                state.set_category_filter(selection);
            }
        }
        Command::Priority(selection) => {
            if let Selection::Only(id) = &selection
                && state.priorities.get(id).is_none()
            {
                state.notify(ToastKind::Error, format!("Unknown priority: {}", id), None);
            } else {
                state.set_priority_filter(selection);
            }
        }
        Command::Error(message) => {
            tracing::debug!("Command error: {}", message);
            state.notify(ToastKind::Error, message, None);
        }
    }
    CommandOutcome::Continue
}

/// Edits the command line; Enter runs it.
pub fn handle_key(key: KeyCode, state: &mut AppState) -> CommandOutcome {
    match key {
        KeyCode::Esc => leave_command_mode(state),
        KeyCode::Backspace => {
            state.command_buffer.pop();
            if state.command_buffer.is_empty() {
                leave_command_mode(state);
            }
        }
        KeyCode::Char(c) => state.command_buffer.push(c),
        KeyCode::Enter => {
            let command = parse_command(&state.command_buffer);
            leave_command_mode(state);
            return apply_command(command, state);
        }
        _ => {}
    }
    CommandOutcome::Continue
}

fn leave_command_mode(state: &mut AppState) {
    state.command_buffer.clear();
    state.mode = Mode::Normal;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Dataset, EventColor, ReferenceItem, ReferenceList};

    fn state() -> AppState {
        let dataset = Dataset {
            events: vec![],
            categories: ReferenceList::new(vec![ReferenceItem {
                id: "work".into(),
                name: "Work".into(),
                color: EventColor::Blue,
            }]),
            priorities: ReferenceList::new(vec![ReferenceItem {
                id: "high".into(),
                name: "High".into(),
                color: EventColor::Red,
            }]),
        };
        AppState::new(dataset, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
    }

    #[test]
    fn parse_quit_command() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn parse_goto_command_with_date() {
        let cmd = parse_command(":goto 2025-01-15");
        let expected_date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(cmd, Command::Goto(expected_date));
    }

    #[test]
    fn parse_goto_command_with_invalid_date_returns_error() {
        assert!(matches!(parse_command(":goto invalid"), Command::Error(_)));
        assert!(matches!(parse_command(":goto"), Command::Error(_)));
    }

    #[test]
    fn parse_new_event_with_multiple_words() {
        let cmd = parse_command(":new Sprint planning session");
        assert_eq!(cmd, Command::NewEvent(Some("Sprint planning session".to_string())));
    }

    #[test]
    fn parse_new_without_title_returns_blank_title() {
        assert_eq!(parse_command(":new"), Command::NewEvent(None));
    }

    #[test]
    fn parse_filter_commands() {
        assert_eq!(parse_command(":category work"), Command::Category(Selection::Only("work".into())));
        assert_eq!(parse_command(":pri all"), Command::Priority(Selection::All));
        assert!(matches!(parse_command(":category"), Command::Error(_)));
    }

    #[test]
    fn parse_help_and_theme() {
        assert_eq!(parse_command(":help"), Command::Help);
        assert_eq!(parse_command(":theme dark"), Command::Theme("dark".to_string()));
    }

    #[test]
    fn parse_unknown_or_malformed_commands_return_error() {
        assert!(matches!(parse_command(":unknown"), Command::Error(_)));
        assert!(matches!(parse_command("quit"), Command::Error(_)));
        assert!(matches!(parse_command(":"), Command::Error(_)));
    }

    #[test]
    fn goto_selects_date() {
        let mut state = state();
        let target = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();

        let outcome = apply_command(Command::Goto(target), &mut state);

        assert_eq!(outcome, CommandOutcome::Continue);
        assert_eq!(state.selected_date, target);
    }

    #[test]
    fn quit_command_requests_exit() {
        let mut state = state();
        assert_eq!(apply_command(Command::Quit, &mut state), CommandOutcome::Quit);
    }

    #[test]
    fn unknown_category_shows_error_and_keeps_filter() {
        let mut state = state();

        apply_command(Command::Category(Selection::Only("travel".into())), &mut state);

        assert_eq!(state.filter.category, Selection::All);
        assert_eq!(state.toasts.iter().next().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn known_priority_sets_filter() {
        let mut state = state();

        apply_command(Command::Priority(Selection::Only("high".into())), &mut state);

        assert_eq!(state.filter.priority, Selection::Only("high".into()));
    }

    #[test]
    fn typed_command_runs_on_enter() {
        let mut state = state();
        state.mode = Mode::Command;
        state.command_buffer = ":".to_string();
        for c in "new Lunch".chars() {
            handle_key(KeyCode::Char(c), &mut state);
        }

        handle_key(KeyCode::Enter, &mut state);

        assert_eq!(state.mode, Mode::Insert);
        assert_eq!(state.event_form.as_ref().map(|f| f.title.as_str()), Some("Lunch"));
        assert!(state.command_buffer.is_empty());
    }

    #[test]
    fn backspace_past_colon_leaves_command_mode() {
        let mut state = state();
        state.mode = Mode::Command;
        state.command_buffer = ":".to_string();

        handle_key(KeyCode::Backspace, &mut state);

        assert_eq!(state.mode, Mode::Normal);
    }
}
