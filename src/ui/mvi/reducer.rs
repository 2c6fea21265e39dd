//! Reducer trait for MVI architecture.

use super::action::Action;
use super::state::UiState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects. Actions the
    /// reducer does not recognize must return `state` unchanged.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
