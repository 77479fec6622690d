//! Dialog state storage configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::ValidationError;
use crate::adapters::{FileDialogStateStore, InMemoryDialogStateStore};
use crate::ports::DialogStateStore;

/// Where dialog stacks are persisted between turns
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory; stacks are lost on restart
    #[default]
    Memory,
    /// One YAML snapshot per conversation under `data_dir`
    File,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Root directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }

    /// Construct the configured store
    pub fn build_store(&self) -> Arc<dyn DialogStateStore> {
        match self.backend {
            StorageBackend::Memory => Arc::new(InMemoryDialogStateStore::new()),
            StorageBackend::File => Arc::new(FileDialogStateStore::new(&self.data_dir)),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data/dialogs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialog::DialogStack;
    use crate::domain::foundation::ConversationId;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.data_dir, PathBuf::from("./data/dialogs"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_backend_requires_data_dir() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: PathBuf::new(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.data_dir"))
        );
    }

    #[tokio::test]
    async fn test_file_backend_writes_under_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: temp_dir.path().to_path_buf(),
        };
        let store = config.build_store();
        let conversation_id = ConversationId::new();

        store.save_stack(conversation_id, &DialogStack::new()).await.unwrap();

        assert!(temp_dir.path().join(conversation_id.to_string()).exists());
    }
}
