//! Non-interactive driver: replays scripted actions against a fresh store.

use crate::ui::todo::{ActionDecodeError, TodoAction, TodoStore};
use std::cell::Cell;
use std::io::{self, BufRead};
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("Failed to read actions: {0}")]
    Read(#[from] io::Error),

    #[error(transparent)]
    Decode(#[from] ActionDecodeError),

    #[error("Failed to encode items: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    /// Actions dispatched, recognized or not.
    pub dispatched: usize,
    /// Actions whose kind the reducer ignores.
    pub ignored: usize,
    /// Notifications received by the replay's own subscriber.
    pub notifications: usize,
    pub items: Vec<String>,
}

/// Dispatch every JSON action in `reader`, one per line, to a seeded store.
///
/// Blank lines are skipped. The first malformed line aborts the replay.
pub fn apply_actions<R: BufRead>(reader: R) -> Result<ApplyReport, HeadlessError> {
    apply_to(&Rc::new(TodoStore::default()), reader)
}

pub fn apply_to<R: BufRead>(store: &Rc<TodoStore>, reader: R) -> Result<ApplyReport, HeadlessError> {
    let notifications = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&notifications);
    let subscription = store.subscribe(move || counter.set(counter.get() + 1));

    let mut dispatched = 0;
    let mut ignored = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let action = TodoAction::from_json(idx + 1, &line)?;
        if let TodoAction::Unrecognized { kind } = &action {
            tracing::warn!(line = idx + 1, %kind, "action has no effect");
            ignored += 1;
        }
        store.dispatch(action);
        dispatched += 1;
    }
    subscription.unsubscribe();

    let items = store.get_state().items().to_vec();
    tracing::info!(dispatched, ignored, items = items.len(), "replay finished");
    Ok(ApplyReport {
        dispatched,
        ignored,
        notifications: notifications.get(),
        items,
    })
}

/// Items as printed by the CLI: one per line, or a JSON array.
///
/// In line mode `\`, `\n` and `\r` inside an item are escaped so every item
/// stays on exactly one line.
pub fn format_items(items: &[String], json: bool) -> Result<String, HeadlessError> {
    if json {
        return Ok(serde_json::to_string(items)?);
    }
    Ok(items
        .iter()
        .map(|item| escape_line(item))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn escape_line(item: &str) -> String {
    let mut escaped = String::with_capacity(item.len());
    for ch in item.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}
