//! Prompt defaults

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::dialog::{Prompt, DEFAULT_LOCALE};
use crate::ports::Recognizer;

/// Prompt configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PromptsConfig {
    /// Locale handed to recognizers when a turn carries none
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl PromptsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_locale.trim().is_empty() {
            return Err(ValidationError::InvalidLocale);
        }
        Ok(())
    }

    /// Build a prompt that falls back to the configured locale
    pub fn prompt(&self, recognizer: impl Recognizer + 'static) -> Prompt {
        Prompt::new(recognizer).with_default_locale(self.default_locale.clone())
    }
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
        }
    }
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}
