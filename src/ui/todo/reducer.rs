use crate::ui::mvi::Reducer;
use crate::ui::todo::action::TodoAction;
use crate::ui::todo::state::AppState;
use std::rc::Rc;

pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = AppState;
    type Action = TodoAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            TodoAction::AddItem { payload } => {
                // Clones the items only if another snapshot still holds them.
                Rc::make_mut(&mut state.items).push(payload);
                state
            }
            TodoAction::Unrecognized { kind } => {
                tracing::debug!(%kind, "ignoring unrecognized action");
                state
            }
        }
    }
}
