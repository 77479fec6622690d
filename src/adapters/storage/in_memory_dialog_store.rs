//! In-Memory Dialog State Store Adapter
//!
//! Keeps one snapshot per conversation in a shared map.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dialog::DialogStack;
use crate::domain::foundation::ConversationId;
use crate::ports::{DialogStackSnapshot, DialogStateStore, StateStoreError};

/// In-memory storage for dialog stacks
#[derive(Debug, Clone)]
pub struct InMemoryDialogStateStore {
    snapshots: Arc<RwLock<HashMap<ConversationId, DialogStackSnapshot>>>,
}

impl InMemoryDialogStateStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            snapshots: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.snapshots.write().await.clear();
    }

    /// Get the number of stored conversations
    pub async fn conversation_count(&self) -> usize {
        self.snapshots.read().await.len()
    }

    /// Full snapshot for a conversation, including its save time
    pub async fn snapshot(&self, conversation_id: ConversationId) -> Option<DialogStackSnapshot> {
        self.snapshots.read().await.get(&conversation_id).cloned()
    }
}

impl Default for InMemoryDialogStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DialogStateStore for InMemoryDialogStateStore {
    async fn save_stack(
        &self,
        conversation_id: ConversationId,
        stack: &DialogStack,
    ) -> Result<(), StateStoreError> {
        let mut snapshots = self.snapshots.write().await;
        snapshots.insert(
            conversation_id,
            DialogStackSnapshot::new(conversation_id, stack.clone()),
        );
        Ok(())
    }

    async fn load_stack(
        &self,
        conversation_id: ConversationId,
    ) -> Result<DialogStack, StateStoreError> {
        let snapshots = self.snapshots.read().await;
        snapshots
            .get(&conversation_id)
            .map(|snapshot| snapshot.stack.clone())
            .ok_or(StateStoreError::NotFound(conversation_id))
    }

    async fn exists(&self, conversation_id: ConversationId) -> Result<bool, StateStoreError> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots.contains_key(&conversation_id))
    }

    async fn delete(&self, conversation_id: ConversationId) -> Result<(), StateStoreError> {
        self.snapshots.write().await.remove(&conversation_id);
        Ok(())
    }
}
