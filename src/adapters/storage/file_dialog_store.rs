//! File-based Dialog State Store Adapter
//!
//! Stores each conversation's dialog stack as a YAML snapshot on disk,
//! one directory per conversation for easy inspection.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::dialog::DialogStack;
use crate::domain::foundation::ConversationId;
use crate::ports::{DialogStackSnapshot, DialogStateStore, StateStoreError};

/// File-based storage for dialog stacks
#[derive(Debug, Clone)]
pub struct FileDialogStateStore {
    base_path: PathBuf,
}

impl FileDialogStateStore {
    /// Create a new file store with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileDialogStateStore::new("./data/dialogs");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn conversation_dir(&self, conversation_id: ConversationId) -> PathBuf {
        self.base_path.join(conversation_id.to_string())
    }

    fn stack_file_path(&self, conversation_id: ConversationId) -> PathBuf {
        self.conversation_dir(conversation_id).join("stack.yaml")
    }

    async fn ensure_dir(&self, path: &Path) -> Result<(), StateStoreError> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| StateStoreError::IoError(e.to_string()))
    }

    /// Read the full snapshot, including its save time
    pub async fn load_snapshot(
        &self,
        conversation_id: ConversationId,
    ) -> Result<DialogStackSnapshot, StateStoreError> {
        let file_path = self.stack_file_path(conversation_id);

        if !file_path.exists() {
            return Err(StateStoreError::NotFound(conversation_id));
        }

        let yaml = fs::read_to_string(&file_path)
            .await
            .map_err(|e| StateStoreError::IoError(e.to_string()))?;

        serde_yaml::from_str(&yaml).map_err(|e| StateStoreError::DeserializationFailed(e.to_string()))
    }
}

#[async_trait]
impl DialogStateStore for FileDialogStateStore {
    async fn save_stack(
        &self,
        conversation_id: ConversationId,
        stack: &DialogStack,
    ) -> Result<(), StateStoreError> {
        self.ensure_dir(&self.conversation_dir(conversation_id)).await?;

        let snapshot = DialogStackSnapshot::new(conversation_id, stack.clone());
        let yaml = serde_yaml::to_string(&snapshot)
            .map_err(|e| StateStoreError::SerializationFailed(e.to_string()))?;

        fs::write(self.stack_file_path(conversation_id), yaml)
            .await
            .map_err(|e| StateStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn load_stack(
        &self,
        conversation_id: ConversationId,
    ) -> Result<DialogStack, StateStoreError> {
        let snapshot = self.load_snapshot(conversation_id).await?;
        if snapshot.conversation_id != conversation_id {
            return Err(StateStoreError::DeserializationFailed(format!(
                "snapshot belongs to conversation {}",
                snapshot.conversation_id
            )));
        }
        Ok(snapshot.stack)
    }

    async fn exists(&self, conversation_id: ConversationId) -> Result<bool, StateStoreError> {
        Ok(self.stack_file_path(conversation_id).exists())
    }

    async fn delete(&self, conversation_id: ConversationId) -> Result<(), StateStoreError> {
        let dir = self.conversation_dir(conversation_id);

        if dir.exists() {
            fs::remove_dir_all(&dir)
                .await
                .map_err(|e| StateStoreError::IoError(e.to_string()))?;
        }

        Ok(())
    }
}
