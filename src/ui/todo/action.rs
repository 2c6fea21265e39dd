use crate::ui::mvi::Action;
use serde::Deserialize;
use thiserror::Error;

/// Tag of the only action the todo reducer acts on.
pub const ADD_ITEM: &str = "ADD_ITEM";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append `payload` to the list. No validation: empty text is kept.
    AddItem { payload: String },
    /// Any other tag. Reduces to a no-op.
    Unrecognized { kind: String },
}

impl Action for TodoAction {
    fn kind(&self) -> &str {
        match self {
            TodoAction::AddItem { .. } => ADD_ITEM,
            TodoAction::Unrecognized { kind } => kind,
        }
    }
}

/// Errors raised while decoding scripted actions.
#[derive(Debug, Error)]
pub enum ActionDecodeError {
    #[error("line {line}: invalid action: {source}")]
    InvalidJson {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: '{kind}' requires a string payload")]
    MissingPayload { line: usize, kind: String },
}

/// Wire shape: `{"type": "ADD_ITEM", "payload": "buy milk"}`.
#[derive(Debug, Deserialize)]
struct WireAction {
    #[serde(rename = "type")]
    kind: String,
    /// Any JSON; only `ADD_ITEM` needs a string.
    #[serde(default)]
    payload: Option<serde_json::Value>,
}

impl TodoAction {
    pub fn add_item(payload: impl Into<String>) -> Self {
        TodoAction::AddItem {
            payload: payload.into(),
        }
    }

    /// Decode one JSON action. `line` is only used for error reporting.
    pub fn from_json(line: usize, text: &str) -> Result<Self, ActionDecodeError> {
        let wire: WireAction = serde_json::from_str(text)
            .map_err(|source| ActionDecodeError::InvalidJson { line, source })?;

        if wire.kind != ADD_ITEM {
            return Ok(TodoAction::Unrecognized { kind: wire.kind });
        }

        match wire.payload {
            Some(serde_json::Value::String(payload)) => Ok(TodoAction::AddItem { payload }),
            _ => Err(ActionDecodeError::MissingPayload {
                line,
                kind: wire.kind,
            }),
        }
    }
}
