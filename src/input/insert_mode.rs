use crossterm::event::KeyCode;

use crate::app::{AppState, Mode, Section};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    if state.event_form.is_some() {
        handle_event_form_key(key, state);
    } else if state.section == Section::Contact {
        handle_contact_key(key, state);
    } else {
        state.mode = Mode::Normal;
    }
}

fn handle_event_form_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Esc => {
            state.cancel_event_form();
            return;
        }
        KeyCode::Enter => {
            state.submit_event_form();
            return;
        }
        _ => {}
    }

    let Some(form) = state.event_form.as_mut() else {
        return;
    };

    match key {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Right if form.active_field.is_selector() => {
            form.select_next(&state.categories, &state.priorities);
        }
        KeyCode::Left if form.active_field.is_selector() => {
            form.select_prev(&state.categories, &state.priorities);
        }
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.input_char(c),
        _ => {}
    }
}

fn handle_contact_key(key: KeyCode, state: &mut AppState) {
    if state.contact_form.submitting {
        if key == KeyCode::Esc {
            state.mode = Mode::Normal;
        }
        return;
    }

    match key {
        KeyCode::Esc => {
            state.mode = Mode::Normal;
            return;
        }
        KeyCode::Enter => {
            if state.submit_contact_form() {
                state.mode = Mode::Normal;
            }
            return;
        }
        _ => {}
    }

    let form = &mut state.contact_form;
    match key {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.input_char(c),
        _ => {}
    }
}
