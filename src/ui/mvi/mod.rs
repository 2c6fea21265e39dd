//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer, plus the [`Store`] that owns a single
//! authoritative state value and notifies subscribers after every dispatch.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Store::dispatch ──→ Reducer ──→ State ──→ subscribers ──→ View
//!    ↑                                                                 │
//!    └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of UI state
//! - **Action**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on actions
//! - **Store**: Holds the current state, runs the reducer, notifies listeners

mod action;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, Subscription};
