mod action;
mod reducer;
mod state;

pub use action::{ActionDecodeError, TodoAction, ADD_ITEM};
pub use reducer::TodoReducer;
pub use state::{AppState, SEED_ITEMS};

/// Store specialized to the todo list.
pub type TodoStore = crate::ui::mvi::Store<TodoReducer>;
