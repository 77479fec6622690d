//! Prompt text configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::dialog::DialogError;
use crate::domain::foundation::{DialogId, ValidationError};

/// What a prompt says on its first attempt and on retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOptions {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speak: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_speak: Option<String>,
}

impl PromptOptions {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            retry_prompt: None,
            speak: None,
            retry_speak: None,
        }
    }

    pub fn with_retry_prompt(mut self, retry_prompt: impl Into<String>) -> Self {
        self.retry_prompt = Some(retry_prompt.into());
        self
    }

    pub fn with_speak(mut self, speak: impl Into<String>) -> Self {
        self.speak = Some(speak.into());
        self
    }

    pub fn with_retry_speak(mut self, retry_speak: impl Into<String>) -> Self {
        self.retry_speak = Some(retry_speak.into());
        self
    }

    /// Text and speech to send for an attempt.
    ///
    /// Retries use the retry variant when one is configured and fall back
    /// to the primary prompt otherwise.
    pub fn output_for(&self, is_retry: bool) -> (&str, Option<&str>) {
        match (&self.retry_prompt, is_retry) {
            (Some(retry), true) => (retry.as_str(), self.retry_speak.as_deref()),
            _ => (self.prompt.as_str(), self.speak.as_deref()),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        Ok(())
    }

    /// Decode begin args: either a bare string or a full options object.
    pub(crate) fn from_args(dialog_id: &DialogId, args: Option<Value>) -> Result<Self, DialogError> {
        let options = match args {
            None | Some(Value::Null) => {
                return Err(DialogError::MissingPromptOptions(dialog_id.clone()))
            }
            Some(Value::String(text)) => Self::new(text),
            Some(other) => serde_json::from_value(other)
                .map_err(|e| DialogError::InvalidState(format!("prompt options: {}", e)))?,
        };
        if let Err(e) = options.validate() {
            tracing::warn!(dialog_id = %dialog_id, error = %e, "prompt begun with blank text");
            return Err(DialogError::MissingPromptOptions(dialog_id.clone()));
        }
        Ok(options)
    }
}
