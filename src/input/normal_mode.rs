use crossterm::event::KeyCode;

use crate::app::{AppState, Focus, Mode};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    if state.day_details.is_some() {
        state.day_details = None;
        return;
    }
    state.notice = None;

    match key {
        KeyCode::Char('h') | KeyCode::Left => move_left(state),
        KeyCode::Char('l') | KeyCode::Right => move_right(state),
        KeyCode::Char('j') | KeyCode::Down => move_down(state),
        KeyCode::Char('k') | KeyCode::Up => move_up(state),
        KeyCode::Char('{') | KeyCode::Char('p') => state.previous_month(),
        KeyCode::Char('}') | KeyCode::Char('n') => state.next_month(),
        KeyCode::Char('t') => state.jump_to_today(),
        KeyCode::Tab => state.toggle_focus(),
        KeyCode::Enter => state.open_day_details(),
        KeyCode::Char('a') => state.open_form(),
        KeyCode::Char('x') => state.request_remove_selected(),
        KeyCode::Char('C') => state.request_clear(),
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => state.show_help = true,
        _ => {}
    }
}

fn move_left(state: &mut AppState) {
    if state.focus == Focus::Calendar {
        state.move_selected_day(-1);
    }
}

fn move_right(state: &mut AppState) {
    if state.focus == Focus::Calendar {
        state.move_selected_day(1);
    }
}

fn move_down(state: &mut AppState) {
    match state.focus {
        Focus::Calendar => state.move_selected_day(7),
        Focus::List => state.move_row_down(),
    }
}

fn move_up(state: &mut AppState) {
    match state.focus {
        Focus::Calendar => state.move_selected_day(-7),
        Focus::List => state.move_row_up(),
    }
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}
