//! Dialog State Store Port - Interface for persisting dialog stacks.
//!
//! The engine never keeps a stack in memory across turns. Hosts load the
//! stack at the start of a turn and save it once the turn has settled.
//! Implementations must round-trip stacks with structural and value
//! equality.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::dialog::DialogStack;
use crate::domain::foundation::{ConversationId, Timestamp};

/// Errors that can occur during state store operations
#[derive(Debug, thiserror::Error)]
pub enum StateStoreError {
    #[error("Dialog stack not found for conversation: {0}")]
    NotFound(ConversationId),

    #[error("Failed to serialize dialog stack: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize dialog stack: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Persisted record of one conversation's stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogStackSnapshot {
    pub conversation_id: ConversationId,
    pub stack: DialogStack,
    pub updated_at: Timestamp,
}

impl DialogStackSnapshot {
    /// Capture a stack as of now.
    pub fn new(conversation_id: ConversationId, stack: DialogStack) -> Self {
        Self {
            conversation_id,
            stack,
            updated_at: Timestamp::now(),
        }
    }
}

/// Port for persisting and loading dialog stacks
#[async_trait]
pub trait DialogStateStore: Send + Sync {
    /// Save the dialog stack for a conversation
    ///
    /// # Errors
    /// Returns `StateStoreError` if save fails
    async fn save_stack(
        &self,
        conversation_id: ConversationId,
        stack: &DialogStack,
    ) -> Result<(), StateStoreError>;

    /// Load the dialog stack for a conversation
    ///
    /// # Errors
    /// Returns `StateStoreError::NotFound` if nothing was ever saved
    async fn load_stack(&self, conversation_id: ConversationId)
        -> Result<DialogStack, StateStoreError>;

    /// Check if a stack exists for a conversation
    async fn exists(&self, conversation_id: ConversationId) -> Result<bool, StateStoreError>;

    /// Delete the stored stack for a conversation
    async fn delete(&self, conversation_id: ConversationId) -> Result<(), StateStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_store_error_not_found() {
        let err = StateStoreError::NotFound(ConversationId::new());
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_state_store_error_serialization() {
        let err = StateStoreError::SerializationFailed("Invalid YAML".to_string());
        assert!(err.to_string().contains("serialize"));
    }

    #[test]
    fn test_snapshot_captures_stack() {
        let id = ConversationId::new();
        let snapshot = DialogStackSnapshot::new(id, DialogStack::new());
        assert_eq!(snapshot.conversation_id, id);
        assert!(snapshot.stack.is_empty());
    }
}
