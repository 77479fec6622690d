//! Runtime configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DIALOG_RUNTIME` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use dialog_runtime::config::{init_tracing, RuntimeConfig};
//!
//! let config = RuntimeConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Invalid log filter");
//!
//! let store = config.build_store();
//! ```

mod error;
mod logging;
mod prompts;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LoggingConfig};
pub use prompts::PromptsConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;
use std::sync::Arc;

use crate::ports::DialogStateStore;

/// Root runtime configuration
///
/// Every section has defaults, so an empty environment yields an
/// in-memory store, `en-us` prompts and `info` logging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    /// Dialog stack persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// Prompt defaults
    #[serde(default)]
    pub prompts: PromptsConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RuntimeConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DIALOG_RUNTIME` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `DIALOG_RUNTIME__STORAGE__BACKEND=file` -> `storage.backend = file`
    /// - `DIALOG_RUNTIME__PROMPTS__DEFAULT_LOCALE=de-de` -> `prompts.default_locale = de-de`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DIALOG_RUNTIME")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.prompts.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Construct the configured dialog state store
    pub fn build_store(&self) -> Arc<dyn DialogStateStore> {
        self.storage.build_store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::NumberRecognizer;
    use crate::adapters::RecordingTurnContext;
    use crate::domain::dialog::{DialogContext, DialogSet, DialogStack, PromptOptions};
    use serde_json::json;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("DIALOG_RUNTIME__STORAGE__BACKEND");
        env::remove_var("DIALOG_RUNTIME__STORAGE__DATA_DIR");
        env::remove_var("DIALOG_RUNTIME__PROMPTS__DEFAULT_LOCALE");
        env::remove_var("DIALOG_RUNTIME__LOGGING__FILTER");
        env::remove_var("DIALOG_RUNTIME__LOGGING__JSON");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = RuntimeConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.prompts.default_locale, "en-us");
        assert_eq!(config.logging.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DIALOG_RUNTIME__STORAGE__BACKEND", "file");
        env::set_var("DIALOG_RUNTIME__STORAGE__DATA_DIR", "/var/lib/dialogs");
        env::set_var("DIALOG_RUNTIME__PROMPTS__DEFAULT_LOCALE", "de-de");
        env::set_var("DIALOG_RUNTIME__LOGGING__FILTER", "dialog_runtime=debug");
        let result = RuntimeConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.data_dir, std::path::PathBuf::from("/var/lib/dialogs"));
        assert_eq!(config.prompts.default_locale, "de-de");
        assert_eq!(config.logging.filter, "dialog_runtime=debug");
    }

    #[test]
    fn test_unknown_backend_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DIALOG_RUNTIME__STORAGE__BACKEND", "postgres");
        let result = RuntimeConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_blank_locale() {
        let mut config = RuntimeConfig::default();
        config.prompts.default_locale = "  ".to_string();
        assert_eq!(config.validate(), Err(ValidationError::InvalidLocale));
    }

    #[tokio::test]
    async fn test_configured_locale_reaches_prompt() {
        let mut config = RuntimeConfig::default();
        config.prompts.default_locale = "de-de".to_string();

        let mut set = DialogSet::new();
        set.add("numberPrompt", config.prompts.prompt(NumberRecognizer)).unwrap();
        let set = Arc::new(set);

        let mut dc = DialogContext::new(
            set.clone(),
            Arc::new(RecordingTurnContext::new("")),
            DialogStack::new(),
        );
        dc.prompt("numberPrompt", PromptOptions::new("Wie viel?")).await.unwrap();

        let mut dc = DialogContext::new(set, Arc::new(RecordingTurnContext::new("2,5")), dc.into_stack());
        let result = dc.continue_dialog().await.unwrap();

        assert_eq!(result.result, Some(json!(2.5)));
    }

    #[tokio::test]
    async fn test_build_store_defaults_to_memory() {
        let store = RuntimeConfig::default().build_store();
        let id = crate::domain::foundation::ConversationId::new();

        store.save_stack(id, &DialogStack::new()).await.unwrap();

        assert!(store.exists(id).await.unwrap());
    }
}
