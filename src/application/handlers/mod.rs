//! Application handlers.
//!
//! Command handlers that drive dialog stacks on behalf of the host.

pub mod conversation;

pub use conversation::{
    CancelConversationCommand, CancelConversationHandler, ProcessTurnCommand, ProcessTurnError,
    ProcessTurnHandler, ProcessTurnResult, RepromptConversationCommand,
    RepromptConversationHandler,
};
