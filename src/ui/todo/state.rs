use crate::ui::mvi::UiState;
use std::rc::Rc;

/// Items present when the application starts.
pub const SEED_ITEMS: [&str; 3] = ["wash car", "work out", "mow the lawn"];

/// The todo list. Items keep insertion order and may repeat.
///
/// Items live behind an `Rc` so snapshots handed to subscribers are cheap;
/// the reducer copies on write when a snapshot is still shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub items: Rc<Vec<String>>,
}

impl UiState for AppState {}

impl Default for AppState {
    fn default() -> Self {
        Self::from_items(SEED_ITEMS.iter().map(|item| item.to_string()).collect())
    }
}

impl AppState {
    pub fn from_items(items: Vec<String>) -> Self {
        Self {
            items: Rc::new(items),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when both states share the same item allocation.
    pub fn shares_items_with(&self, other: &AppState) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}
