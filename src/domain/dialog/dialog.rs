//! The lifecycle contract every conversational unit implements.

use async_trait::async_trait;
use serde_json::Value;

use super::context::DialogContext;
use super::errors::DialogError;
use super::turn_result::DialogTurnResult;

/// A unit of conversational behavior that lives on the dialog stack.
///
/// Hooks are always invoked while the dialog's own frame is the active
/// frame of `dc`, so `dc.state()` / `dc.state_mut()` address the
/// dialog's private state. A dialog finishes by calling `dc.end(result)`
/// and returning whatever that call returns; it pauses by returning
/// `DialogTurnResult::waiting()` after sending output.
#[async_trait]
pub trait Dialog: Send + Sync {
    /// The dialog became the active frame. Initialize state, then wait or end.
    async fn begin(
        &self,
        dc: &mut DialogContext,
        args: Option<Value>,
    ) -> Result<DialogTurnResult, DialogError>;

    /// A new message arrived while this dialog was active.
    ///
    /// The default ends the dialog immediately with no result. A dialog
    /// that waits for input without overriding this hook is therefore
    /// dropped on the user's next message.
    async fn continue_dialog(&self, dc: &mut DialogContext) -> Result<DialogTurnResult, DialogError> {
        dc.end(None).await
    }

    /// A child this dialog began has completed with `result`.
    ///
    /// The default passes the child's result straight through to this
    /// dialog's own caller.
    async fn resume(
        &self,
        dc: &mut DialogContext,
        result: Option<Value>,
    ) -> Result<DialogTurnResult, DialogError> {
        dc.end(result).await
    }

    /// Re-send the current prompt without advancing state.
    async fn reprompt(&self, _dc: &mut DialogContext) -> Result<DialogTurnResult, DialogError> {
        Ok(DialogTurnResult::waiting())
    }

    /// The frame is about to be discarded by a cancellation.
    ///
    /// Runs before the frame is popped; state is still readable.
    async fn cancel(&self, _dc: &mut DialogContext) -> Result<(), DialogError> {
        Ok(())
    }
}
