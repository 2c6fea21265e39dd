use crate::ui::app::{Focus, TodoView};
use crate::ui::text_field::TextFieldIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(view: &mut TodoView, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        view.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => view.toggle_focus(),
        KeyCode::Enter => view.submit(),
        _ => match view.focus() {
            Focus::Submit => {
                if key.code == KeyCode::Char(' ') {
                    view.submit();
                }
            }
            Focus::Input => {
                if let Some(intent) = key_to_intent(key) {
                    view.on_input(intent);
                }
            }
        },
    }
}

/// Bracketed paste goes to the text field only.
pub fn handle_paste(view: &mut TodoView, text: &str) {
    if view.focus() == Focus::Input {
        view.on_input(TextFieldIntent::Paste(text.to_string()));
    }
}

fn key_to_intent(key: KeyEvent) -> Option<TextFieldIntent> {
    if is_ctrl_char(key, 'u') {
        return Some(TextFieldIntent::Clear);
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(ch) => Some(TextFieldIntent::Insert(ch)),
        KeyCode::Backspace => Some(TextFieldIntent::Backspace),
        KeyCode::Delete => Some(TextFieldIntent::Delete),
        KeyCode::Left => Some(TextFieldIntent::MoveLeft),
        KeyCode::Right => Some(TextFieldIntent::MoveRight),
        KeyCode::Home => Some(TextFieldIntent::Home),
        KeyCode::End => Some(TextFieldIntent::End),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
