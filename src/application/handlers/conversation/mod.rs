//! Conversation command handlers.
//!
//! Each handler runs one host request against a conversation's dialog
//! stack: load, drive the `DialogContext`, save only if the turn succeeded.

mod cancel_conversation;
mod process_turn;
mod reprompt_conversation;

pub use cancel_conversation::{CancelConversationCommand, CancelConversationHandler};
pub use process_turn::{
    ProcessTurnCommand, ProcessTurnError, ProcessTurnHandler, ProcessTurnResult,
};
pub use reprompt_conversation::{RepromptConversationCommand, RepromptConversationHandler};

use crate::domain::dialog::DialogStack;
use crate::domain::foundation::ConversationId;
use crate::ports::{DialogStateStore, StateStoreError};

/// Load a conversation's stack, treating a never-saved conversation as new.
async fn load_stack_or_empty(
    store: &dyn DialogStateStore,
    conversation_id: ConversationId,
) -> Result<DialogStack, StateStoreError> {
    match store.load_stack(conversation_id).await {
        Ok(stack) => Ok(stack),
        Err(StateStoreError::NotFound(_)) => Ok(DialogStack::new()),
        Err(e) => Err(e),
    }
}
