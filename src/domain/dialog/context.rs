//! DialogContext - Drives the dialog stack for one turn.
//!
//! A context is built at the start of a turn over the stack loaded from
//! storage, driven through exactly one entry point (`begin`,
//! `continue_dialog`, `cancel_all` or `reprompt`), then consumed with
//! `into_stack` so the host can persist the result. Nothing survives
//! in memory between turns.
//!
//! # Completion
//!
//! A dialog finishes by calling `end`, which pops its frame and hands the
//! result to the frame below through `Dialog::resume`. When that parent
//! also finishes synchronously the cascade continues downwards, one
//! frame per step, until some frame waits or the stack is empty.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use super::dialog::Dialog;
use super::errors::DialogError;
use super::instance::{DialogInstance, DialogStack, DialogState};
use super::prompt::PromptOptions;
use super::set::DialogSet;
use super::turn_result::DialogTurnResult;
use crate::domain::foundation::DialogId;
use crate::ports::TurnContext;

/// Stack walker bound to one turn and one dialog registry.
pub struct DialogContext {
    dialogs: Arc<DialogSet>,
    turn: Arc<dyn TurnContext>,
    stack: DialogStack,
}

impl DialogContext {
    /// Create a context over a loaded stack.
    pub fn new(dialogs: Arc<DialogSet>, turn: Arc<dyn TurnContext>, stack: DialogStack) -> Self {
        Self {
            dialogs,
            turn,
            stack,
        }
    }

    /// The turn being processed.
    pub fn turn(&self) -> &dyn TurnContext {
        self.turn.as_ref()
    }

    /// Shared handle to the turn, for building nested contexts.
    pub fn turn_handle(&self) -> Arc<dyn TurnContext> {
        Arc::clone(&self.turn)
    }

    pub fn dialogs(&self) -> &DialogSet {
        &self.dialogs
    }

    pub fn stack(&self) -> &DialogStack {
        &self.stack
    }

    /// Give the stack back for persistence.
    pub fn into_stack(self) -> DialogStack {
        self.stack
    }

    /// The frame that receives the next message.
    pub fn active_dialog(&self) -> Option<&DialogInstance> {
        self.stack.top()
    }

    /// Private state of the active frame.
    pub fn state(&self) -> Result<&DialogState, DialogError> {
        self.stack
            .top()
            .map(|frame| &frame.state)
            .ok_or_else(no_active_dialog)
    }

    /// Mutable private state of the active frame.
    pub fn state_mut(&mut self) -> Result<&mut DialogState, DialogError> {
        self.stack
            .top_mut()
            .map(|frame| &mut frame.state)
            .ok_or_else(no_active_dialog)
    }

    /// Push a new frame for `id` and run its `begin` hook.
    ///
    /// # Errors
    /// `DialogError::DialogNotFound` if `id` is not registered; the stack
    /// is left untouched in that case.
    pub async fn begin(
        &mut self,
        id: &str,
        args: Option<Value>,
    ) -> Result<DialogTurnResult, DialogError> {
        let dialog = self.find_dialog(id)?;
        self.stack.push(DialogInstance::new(DialogId::new(id)?));
        debug!(dialog_id = id, depth = self.stack.len(), "dialog begun");
        dialog.begin(self, args).await
    }

    /// Begin a prompt dialog with the given options as its args.
    pub async fn prompt(
        &mut self,
        id: &str,
        options: PromptOptions,
    ) -> Result<DialogTurnResult, DialogError> {
        let args = serde_json::to_value(options)
            .map_err(|e| DialogError::InvalidState(format!("prompt options: {}", e)))?;
        self.begin(id, Some(args)).await
    }

    /// Hand the current message to the active dialog.
    ///
    /// On an empty stack this reports `Empty` and changes nothing; starting
    /// a dialog is always the caller's explicit decision.
    pub async fn continue_dialog(&mut self) -> Result<DialogTurnResult, DialogError> {
        let dialog = match self.stack.top() {
            Some(frame) => self.find_dialog(frame.id.as_str())?,
            None => return Ok(DialogTurnResult::empty()),
        };
        dialog.continue_dialog(self).await
    }

    /// Pop the active frame and resume its caller with `result`.
    ///
    /// Reports `Complete` with `result` once the stack is empty.
    pub async fn end(&mut self, result: Option<Value>) -> Result<DialogTurnResult, DialogError> {
        if let Some(done) = self.stack.pop() {
            debug!(dialog_id = %done.id, depth = self.stack.len(), "dialog ended");
        }

        let parent = match self.stack.top() {
            Some(frame) => self.find_dialog(frame.id.as_str())?,
            None => return Ok(DialogTurnResult::complete(result)),
        };
        parent.resume(self, result).await
    }

    /// Swap the active frame for a new dialog without resuming the caller.
    pub async fn replace(
        &mut self,
        id: &str,
        args: Option<Value>,
    ) -> Result<DialogTurnResult, DialogError> {
        self.find_dialog(id)?;
        if let Some(replaced) = self.stack.pop() {
            debug!(dialog_id = %replaced.id, replacement = id, "dialog replaced");
        }
        self.begin(id, args).await
    }

    /// Unwind the whole stack, giving every frame its cancel hook.
    ///
    /// Frames are visited top to bottom; each hook runs while its frame is
    /// still active and the frame is popped right after.
    ///
    /// # Errors
    /// A failing hook (or an unregistered frame) does not stop the unwind.
    /// Every frame is still visited and popped, and the first error is
    /// returned once the stack is empty.
    pub async fn cancel_all(&mut self) -> Result<DialogTurnResult, DialogError> {
        if self.stack.is_empty() {
            return Ok(DialogTurnResult::empty());
        }

        let mut first_error: Option<DialogError> = None;
        while let Some(frame) = self.stack.top() {
            let depth = self.stack.len();
            let id = frame.id.clone();
            let outcome = match self.find_dialog(id.as_str()) {
                Ok(dialog) => dialog.cancel(self).await,
                Err(e) => Err(e),
            };
            self.stack.truncate(depth - 1);
            debug!(dialog_id = %id, depth = self.stack.len(), "dialog cancelled");

            if let Err(e) = outcome {
                warn!(dialog_id = %id, error = %e, "cancel hook failed");
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(DialogTurnResult::cancelled()),
        }
    }

    /// Ask the active dialog to re-send its prompt.
    pub async fn reprompt(&mut self) -> Result<DialogTurnResult, DialogError> {
        let dialog = match self.stack.top() {
            Some(frame) => self.find_dialog(frame.id.as_str())?,
            None => return Ok(DialogTurnResult::empty()),
        };
        dialog.reprompt(self).await
    }

    fn find_dialog(&self, id: &str) -> Result<Arc<dyn Dialog>, DialogError> {
        self.dialogs.find(id).ok_or_else(|| {
            warn!(dialog_id = id, "stack references an unregistered dialog");
            DialogError::DialogNotFound(id.to_string())
        })
    }
}

fn no_active_dialog() -> DialogError {
    DialogError::InvalidState("no active dialog".to_string())
}
