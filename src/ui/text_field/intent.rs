use crate::ui::mvi::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFieldIntent {
    Insert(char),
    /// Pasted text. Line breaks are dropped; the field is single-line.
    Paste(String),
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    Home,
    End,
    Clear,
}

impl Action for TextFieldIntent {
    fn kind(&self) -> &str {
        match self {
            TextFieldIntent::Insert(_) => "insert",
            TextFieldIntent::Paste(_) => "paste",
            TextFieldIntent::Backspace => "backspace",
            TextFieldIntent::Delete => "delete",
            TextFieldIntent::MoveLeft => "move_left",
            TextFieldIntent::MoveRight => "move_right",
            TextFieldIntent::Home => "home",
            TextFieldIntent::End => "end",
            TextFieldIntent::Clear => "clear",
        }
    }
}
