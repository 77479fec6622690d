//! Outcome of driving the dialog stack for one turn.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How the stack ended up after a dialog operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogTurnStatus {
    /// No dialog is running; the host decides whether to begin one.
    Empty,

    /// Output was sent and the active dialog waits for the next message.
    Waiting,

    /// The last frame completed and the stack is now empty.
    Complete,

    /// The stack was unwound by an explicit cancellation.
    Cancelled,
}

/// Status plus the value handed back by a completed dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogTurnResult {
    pub status: DialogTurnStatus,
    pub result: Option<Value>,
}

impl DialogTurnResult {
    /// End of turn: the active dialog waits for user input.
    pub fn waiting() -> Self {
        Self {
            status: DialogTurnStatus::Waiting,
            result: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            status: DialogTurnStatus::Empty,
            result: None,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            status: DialogTurnStatus::Cancelled,
            result: None,
        }
    }

    /// Only `DialogContext::end` produces completions, so a dialog can
    /// never report itself complete while its frame is still stacked.
    pub(crate) fn complete(result: Option<Value>) -> Self {
        Self {
            status: DialogTurnStatus::Complete,
            result,
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.status == DialogTurnStatus::Waiting
    }

    pub fn is_complete(&self) -> bool {
        self.status == DialogTurnStatus::Complete
    }
}
