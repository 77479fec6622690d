//! CancelConversationHandler - Unwind every dialog of a conversation

use std::sync::Arc;

use tracing::{info, warn};

use super::{load_stack_or_empty, ProcessTurnError};
use crate::domain::dialog::{DialogContext, DialogSet, DialogTurnResult};
use crate::domain::foundation::ConversationId;
use crate::ports::{DialogStateStore, TurnContext};

/// Command to cancel whatever is running in a conversation.
#[derive(Clone)]
pub struct CancelConversationCommand {
    pub conversation_id: ConversationId,
    pub turn: Arc<dyn TurnContext>,
}

/// Handler for explicit cancellation (e.g. the user said "cancel").
///
/// Every frame gets its cancel hook, top to bottom, and the now empty
/// stack is persisted. A failing hook is reported after the save.
pub struct CancelConversationHandler {
    dialogs: Arc<DialogSet>,
    store: Arc<dyn DialogStateStore>,
}

impl CancelConversationHandler {
    pub fn new(dialogs: Arc<DialogSet>, store: Arc<dyn DialogStateStore>) -> Self {
        Self { dialogs, store }
    }

    pub async fn handle(
        &self,
        cmd: CancelConversationCommand,
    ) -> Result<DialogTurnResult, ProcessTurnError> {
        let stack = load_stack_or_empty(self.store.as_ref(), cmd.conversation_id).await?;
        let depth = stack.len();

        let mut dc = DialogContext::new(self.dialogs.clone(), cmd.turn, stack);
        let outcome = dc.cancel_all().await;

        // cancel_all always leaves the stack empty, so it is saved even
        // when a hook failed.
        self.store.save_stack(cmd.conversation_id, &dc.into_stack()).await?;

        if let Err(e) = &outcome {
            warn!(
                conversation_id = %cmd.conversation_id,
                error = %e,
                "conversation cancelled with failing hooks"
            );
        } else {
            info!(
                conversation_id = %cmd.conversation_id,
                cancelled_frames = depth,
                "conversation cancelled"
            );
        }
        Ok(outcome?)
    }
}
