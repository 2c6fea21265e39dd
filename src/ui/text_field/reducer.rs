use crate::ui::mvi::Reducer;
use crate::ui::text_field::intent::TextFieldIntent;
use crate::ui::text_field::state::TextFieldState;

pub struct TextFieldReducer;

impl Reducer for TextFieldReducer {
    type State = TextFieldState;
    type Action = TextFieldIntent;

    fn reduce(state: Self::State, intent: Self::Action) -> Self::State {
        let len = state.char_len();
        let cursor = state.cursor.min(len);

        match intent {
            TextFieldIntent::Insert(ch) if !ch.is_control() => {
                let at = state.byte_offset(cursor);
                let mut value = state.value;
                value.insert(at, ch);
                TextFieldState {
                    value,
                    cursor: cursor + 1,
                }
            }
            TextFieldIntent::Insert(_) => TextFieldState { cursor, ..state },
            TextFieldIntent::Paste(text) => {
                let text: String = text.chars().filter(|ch| !ch.is_control()).collect();
                let at = state.byte_offset(cursor);
                let mut value = state.value;
                value.insert_str(at, &text);
                TextFieldState {
                    value,
                    cursor: cursor + text.chars().count(),
                }
            }
            TextFieldIntent::Backspace => {
                if cursor == 0 {
                    return TextFieldState { cursor, ..state };
                }
                let at = state.byte_offset(cursor - 1);
                let mut value = state.value;
                value.remove(at);
                TextFieldState {
                    value,
                    cursor: cursor - 1,
                }
            }
            TextFieldIntent::Delete => {
                if cursor >= len {
                    return TextFieldState { cursor, ..state };
                }
                let at = state.byte_offset(cursor);
                let mut value = state.value;
                value.remove(at);
                TextFieldState { value, cursor }
            }
            TextFieldIntent::MoveLeft => TextFieldState {
                cursor: cursor.saturating_sub(1),
                ..state
            },
            TextFieldIntent::MoveRight => TextFieldState {
                cursor: (cursor + 1).min(len),
                ..state
            },
            TextFieldIntent::Home => TextFieldState { cursor: 0, ..state },
            TextFieldIntent::End => TextFieldState { cursor: len, ..state },
            TextFieldIntent::Clear => TextFieldState::default(),
        }
    }
}
