//! RepromptConversationHandler - Nudge the user with the active prompt

use std::sync::Arc;

use tracing::info;

use super::{load_stack_or_empty, ProcessTurnError};
use crate::domain::dialog::{DialogContext, DialogSet, DialogTurnResult};
use crate::domain::foundation::ConversationId;
use crate::ports::{DialogStateStore, TurnContext};

/// Command to re-send the active prompt (e.g. after a timeout).
#[derive(Clone)]
pub struct RepromptConversationCommand {
    pub conversation_id: ConversationId,
    pub turn: Arc<dyn TurnContext>,
}

/// Handler that re-sends the active dialog's prompt without consuming input.
pub struct RepromptConversationHandler {
    dialogs: Arc<DialogSet>,
    store: Arc<dyn DialogStateStore>,
}

impl RepromptConversationHandler {
    pub fn new(dialogs: Arc<DialogSet>, store: Arc<dyn DialogStateStore>) -> Self {
        Self { dialogs, store }
    }

    pub async fn handle(
        &self,
        cmd: RepromptConversationCommand,
    ) -> Result<DialogTurnResult, ProcessTurnError> {
        let stack = load_stack_or_empty(self.store.as_ref(), cmd.conversation_id).await?;
        if stack.is_empty() {
            return Ok(DialogTurnResult::empty());
        }

        let mut dc = DialogContext::new(self.dialogs.clone(), cmd.turn, stack);
        let result = dc.reprompt().await?;
        self.store.save_stack(cmd.conversation_id, &dc.into_stack()).await?;

        info!(conversation_id = %cmd.conversation_id, "conversation reprompted");
        Ok(result)
    }
}
