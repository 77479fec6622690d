//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates the dialog engine and coordinates between ports.
//! Hosts call these handlers once per inbound message or control request.

pub mod handlers;

pub use handlers::{
    CancelConversationCommand, CancelConversationHandler, ProcessTurnCommand, ProcessTurnError,
    ProcessTurnHandler, ProcessTurnResult, RepromptConversationCommand,
    RepromptConversationHandler,
};
