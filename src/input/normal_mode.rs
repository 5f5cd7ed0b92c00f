use chrono::{Datelike, Days, Months, NaiveDate};
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode, Section};
use crate::timers::MonthStep;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    if handle_global_key(key, state) {
        return;
    }

    match state.section {
        Section::Calendar => handle_calendar_key(key, state),
        Section::Contact => handle_contact_key(key, state),
        Section::About => {}
    }
}

/// Keys that work in every section.
fn handle_global_key(key: KeyCode, state: &mut AppState) -> bool {
    match key {
        KeyCode::Char('1') => state.section = Section::Calendar,
        KeyCode::Char('2') => state.section = Section::About,
        KeyCode::Char('3') => state.section = Section::Contact,
        KeyCode::Tab => state.section = state.section.next(),
        KeyCode::Char('T') => state.cycle_theme(),
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => show_help(state),
        _ => return false,
    }
    true
}

fn handle_calendar_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') | KeyCode::Left => move_previous_day(state),
        KeyCode::Char('l') | KeyCode::Right => move_next_day(state),
        KeyCode::Char('j') => {
            if has_events_on_selected_date(state) {
                state.move_event_selection_down();
            } else {
                move_down_week(state);
            }
        }
        KeyCode::Char('k') => {
            if has_events_on_selected_date(state) {
                state.move_event_selection_up();
            } else {
                move_up_week(state);
            }
        }
        KeyCode::Down => move_down_week(state),
        KeyCode::Up => move_up_week(state),
        KeyCode::Char('t') => jump_to_today(state),
        KeyCode::Char('a') => state.open_event_form(String::new()),
        KeyCode::Enter | KeyCode::Char('i') => state.open_details(),
        KeyCode::Char('c') => state.cycle_category_filter(),
        KeyCode::Char('p') => state.cycle_priority_filter(),
        KeyCode::Char('F') => state.clear_filters(),
        KeyCode::Char('g') => move_to_start_of_month(state),
        KeyCode::Char('G') => move_to_end_of_month(state),
        KeyCode::Char('{') | KeyCode::Char('H') => {
            state.request_month(MonthStep::Previous);
        }
        KeyCode::Char('}') | KeyCode::Char('L') => {
            state.request_month(MonthStep::Next);
        }
        _ => {}
    }
}

fn handle_contact_key(key: KeyCode, state: &mut AppState) {
    if matches!(key, KeyCode::Enter | KeyCode::Char('i')) && !state.contact_form.submitting {
        state.mode = Mode::Insert;
    }
}

fn has_events_on_selected_date(state: &AppState) -> bool {
    !state.get_events_for_date(state.selected_date).is_empty()
}

fn move_previous_day(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_sub_days(Days::new(1)) {
        state.select_date(new_date);
    }
}

fn move_next_day(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_add_days(Days::new(1)) {
        state.select_date(new_date);
    }
}

fn move_down_week(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_add_days(Days::new(7)) {
        state.select_date(new_date);
    }
}

fn move_up_week(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_sub_days(Days::new(7)) {
        state.select_date(new_date);
    }
}

fn jump_to_today(state: &mut AppState) {
    state.select_date(state.today);
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}

fn show_help(state: &mut AppState) {
    state.show_help = true;
    state.help_scroll = 0;
}

fn move_to_start_of_month(state: &mut AppState) {
    let year = state.selected_date.year();
    let month = state.selected_date.month();
    if let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) {
        state.select_date(first);
    }
}

fn move_to_end_of_month(state: &mut AppState) {
    let year = state.selected_date.year();
    let month = state.selected_date.month();

    if let Some(first) = NaiveDate::from_ymd_opt(year, month, 1)
        && let Some(next_first) = first.checked_add_months(Months::new(1))
        && let Some(last_day) = next_first.pred_opt()
    {
        state.select_date(last_day);
    }
}
