use crossterm::event::KeyCode;
use crate::app::{AppState, FormField};

/// Edits the open form. Enter and Esc are handled by the session, which owns
/// the prompt used for submission.
pub fn handle_key(key: KeyCode, state: &mut AppState) {
    let Some(form) = state.event_form.as_mut() else {
        return;
    };

    match key {
        KeyCode::Tab | KeyCode::BackTab => form.next_field(),
        KeyCode::Backspace => {
            form.active_buffer().pop();
        }
        KeyCode::Char(c) => match form.active_field {
            FormField::Date => {
                if (c.is_ascii_digit() || c == '/') && form.date.len() < 10 {
                    form.date.push(c);
                }
            }
            FormField::Text => form.text.push(c),
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::EventForm;
    use crate::storage::{EventStore, MemoryStore, DEFAULT_KEY};
    use chrono::NaiveDate;

    fn setup_state_with_form() -> AppState {
        let store = EventStore::load(Box::new(MemoryStore::new()), DEFAULT_KEY).unwrap();
        let mut state = AppState::new_at(store, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        state.event_form = Some(EventForm::new("15/01/2025".to_string()));
        state
    }

    #[test]
    fn form_starts_on_text_field() {
        let state = setup_state_with_form();
        assert_eq!(state.event_form.as_ref().unwrap().active_field, FormField::Text);
    }

    #[test]
    fn tab_switches_field() {
        let mut state = setup_state_with_form();

        handle_key(KeyCode::Tab, &mut state);

        assert_eq!(state.event_form.as_ref().unwrap().active_field, FormField::Date);
    }

    #[test]
    fn char_appends_to_text_field() {
        let mut state = setup_state_with_form();

        handle_key(KeyCode::Char('H'), &mut state);
        handle_key(KeyCode::Char('i'), &mut state);

        assert_eq!(state.event_form.as_ref().unwrap().text, "Hi");
    }

    #[test]
    fn backspace_edits_active_field() {
        let mut state = setup_state_with_form();
        state.event_form.as_mut().unwrap().active_field = FormField::Date;

        handle_key(KeyCode::Backspace, &mut state);

        assert_eq!(state.event_form.as_ref().unwrap().date, "15/01/202");
    }

    #[test]
    fn date_field_ignores_letters_and_overflow() {
        let mut state = setup_state_with_form();
        let form = state.event_form.as_mut().unwrap();
        form.active_field = FormField::Date;
        form.date = "01/02/202".to_string();

        handle_key(KeyCode::Char('x'), &mut state);
        handle_key(KeyCode::Char('4'), &mut state);
        handle_key(KeyCode::Char('5'), &mut state);

        assert_eq!(state.event_form.as_ref().unwrap().date, "01/02/2024");
    }
}
