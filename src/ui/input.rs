use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::patterns::Mode;
use crate::presenter::{DECREMENT_LABEL, INCREMENT_LABEL};
use crate::ui::app::{App, PopupKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.show_popup() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.close_popup();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('?') => {
            app.toggle_popup(PopupKind::Help);
        }
        KeyCode::Tab | KeyCode::Right => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.press_focused();
        }
        KeyCode::Char('+') => {
            app.press_label(INCREMENT_LABEL);
        }
        KeyCode::Char('-') => {
            app.press_label(DECREMENT_LABEL);
        }
        KeyCode::Down | KeyCode::Char('m') => app.next_mode(),
        KeyCode::Up | KeyCode::Char('M') => app.prev_mode(),
        KeyCode::Char('r') => app.reload_config(),
        KeyCode::Char(ch) => {
            if let Some(mode) = mode_for_digit(ch) {
                app.select_mode(mode);
            }
        }
        _ => {}
    }
}

fn mode_for_digit(ch: char) -> Option<Mode> {
    let digit = ch.to_digit(10)? as usize;
    Mode::ALL.get(digit.checked_sub(1)?).copied()
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
