use crossterm::event::KeyCode;

use crate::app::AppState;

/// Keys while the read-only details dialog is open.
pub fn handle_details_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Esc | KeyCode::Char('q') => state.close_details(),
        KeyCode::Char('x') | KeyCode::Char('d') | KeyCode::Delete => state.request_delete(),
        _ => {}
    }
}

/// Keys while the delete confirmation is showing.
pub fn handle_confirm_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            state.confirm_delete();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => state.cancel_delete(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Mode;
    use crate::calendar::{Dataset, Event, EventColor};
    use chrono::{NaiveDate, NaiveTime};

    fn state_with_open_details() -> AppState {
        let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let dataset = Dataset {
            events: vec![Event {
                id: 1,
                title: "Dentist".to_string(),
                date: day,
                time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
                duration_minutes: 45,
                description: String::new(),
                color: EventColor::Teal,
                category: "health".to_string(),
                priority: "high".to_string(),
                location: String::new(),
                attendees: vec![],
            }],
            ..Dataset::default()
        };
        let mut state = AppState::new(dataset, day);
        state.open_details();
        state
    }

    #[test]
    fn escape_closes_details() {
        let mut state = state_with_open_details();

        handle_details_key(KeyCode::Esc, &mut state);

        assert!(state.details_event_id.is_none());
    }

    #[test]
    fn x_asks_for_confirmation_without_deleting() {
        let mut state = state_with_open_details();

        handle_details_key(KeyCode::Char('x'), &mut state);

        assert_eq!(state.mode, Mode::Confirm);
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn y_confirms_deletion() {
        let mut state = state_with_open_details();
        handle_details_key(KeyCode::Char('x'), &mut state);

        handle_confirm_key(KeyCode::Char('y'), &mut state);

        assert!(state.store.is_empty());
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.details_event_id.is_none());
    }

    #[test]
    fn n_cancels_and_keeps_details_open() {
        let mut state = state_with_open_details();
        handle_details_key(KeyCode::Char('x'), &mut state);

        handle_confirm_key(KeyCode::Char('n'), &mut state);

        assert_eq!(state.store.len(), 1);
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.details_event_id, Some(1));
    }
}
