//! ProcessTurnHandler - Drive one inbound message through the dialog stack

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use super::load_stack_or_empty;
use crate::domain::dialog::{DialogContext, DialogError, DialogSet, DialogTurnResult, DialogTurnStatus};
use crate::domain::foundation::{ConversationId, DialogId, ErrorCode};
use crate::ports::{DialogStateStore, StateStoreError, TurnContext};

/// Command carrying one inbound message for a conversation.
#[derive(Clone)]
pub struct ProcessTurnCommand {
    pub conversation_id: ConversationId,
    pub turn: Arc<dyn TurnContext>,
    /// Args for the root dialog when the turn starts a new run.
    pub root_args: Option<Value>,
}

impl ProcessTurnCommand {
    pub fn new(conversation_id: ConversationId, turn: Arc<dyn TurnContext>) -> Self {
        Self {
            conversation_id,
            turn,
            root_args: None,
        }
    }

    pub fn with_root_args(mut self, args: Value) -> Self {
        self.root_args = Some(args);
        self
    }
}

/// Outcome of a processed turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessTurnResult {
    pub turn_result: DialogTurnResult,
    /// Frames left on the persisted stack.
    pub stack_depth: usize,
}

/// Errors that can occur while processing a turn.
///
/// Nothing is persisted when a turn fails; the conversation keeps the
/// stack it had before the message arrived.
#[derive(Debug, Error)]
pub enum ProcessTurnError {
    #[error("Dialog error: {0}")]
    Dialog(#[from] DialogError),

    #[error("State store error: {0}")]
    Storage(#[from] StateStoreError),
}

impl ProcessTurnError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ProcessTurnError::Dialog(e) => e.code(),
            ProcessTurnError::Storage(_) => ErrorCode::StorageFailed,
        }
    }
}

/// Handler for inbound messages.
///
/// Continues the active dialog; when no dialog is running, begins the
/// configured root dialog instead.
pub struct ProcessTurnHandler {
    dialogs: Arc<DialogSet>,
    store: Arc<dyn DialogStateStore>,
    root_dialog_id: DialogId,
}

impl ProcessTurnHandler {
    /// # Errors
    /// `DialogError::DialogNotFound` if `root_dialog_id` is not registered.
    pub fn new(
        dialogs: Arc<DialogSet>,
        store: Arc<dyn DialogStateStore>,
        root_dialog_id: &str,
    ) -> Result<Self, DialogError> {
        let root_dialog_id = DialogId::new(root_dialog_id)?;
        if !dialogs.contains(root_dialog_id.as_str()) {
            return Err(DialogError::DialogNotFound(root_dialog_id.to_string()));
        }
        Ok(Self {
            dialogs,
            store,
            root_dialog_id,
        })
    }

    pub async fn handle(&self, cmd: ProcessTurnCommand) -> Result<ProcessTurnResult, ProcessTurnError> {
        // 1. Load the stack left by the previous turn
        let stack = load_stack_or_empty(self.store.as_ref(), cmd.conversation_id).await?;
        info!(
            conversation_id = %cmd.conversation_id,
            depth = stack.len(),
            "processing turn"
        );

        // 2. Continue the active dialog, or start the root one
        let mut dc = DialogContext::new(self.dialogs.clone(), cmd.turn, stack);
        let turn_result = match self.run(&mut dc, cmd.root_args).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    conversation_id = %cmd.conversation_id,
                    code = %e.code(),
                    error = %e,
                    "turn failed, stack not saved"
                );
                return Err(e.into());
            }
        };

        // 3. Persist the settled stack
        let stack = dc.into_stack();
        self.store.save_stack(cmd.conversation_id, &stack).await?;

        info!(
            conversation_id = %cmd.conversation_id,
            status = ?turn_result.status,
            depth = stack.len(),
            "turn processed"
        );

        Ok(ProcessTurnResult {
            turn_result,
            stack_depth: stack.len(),
        })
    }

    async fn run(
        &self,
        dc: &mut DialogContext,
        root_args: Option<Value>,
    ) -> Result<DialogTurnResult, DialogError> {
        let result = dc.continue_dialog().await?;
        if result.status != DialogTurnStatus::Empty {
            return Ok(result);
        }
        dc.begin(self.root_dialog_id.as_str(), root_args).await
    }
}
