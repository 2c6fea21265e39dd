//! Terminal todo list driven by a single store.
//!
//! The list lives in a [`ui::todo::TodoStore`]; the [`ui::app::TodoView`]
//! subscribes to it, mirrors its state and dispatches actions on submit.

pub mod config;
pub mod headless;
pub mod logging;
pub mod ui;
