use crate::ui::mvi::UiState;

/// Single-line text input. `cursor` counts chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFieldState {
    pub value: String,
    pub cursor: usize,
}

impl UiState for TextFieldState {}

impl TextFieldState {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the char at `index`, or the end of the value.
    pub(crate) fn byte_offset(&self, index: usize) -> usize {
        self.value
            .char_indices()
            .nth(index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.value.len())
    }
}
