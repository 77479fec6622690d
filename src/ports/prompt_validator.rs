//! Prompt Validator Port - Business rules applied to recognized input.
//!
//! A validator receives whatever the recognizer produced (possibly nothing)
//! and returns the value the prompt should hand back to its caller, or
//! `None` to reject the reply. A validator may reply to the user itself;
//! when it does, the prompt suppresses its own retry text.

use async_trait::async_trait;
use serde_json::Value;

use super::TurnContext;
use crate::domain::dialog::DialogError;

/// Port for validating recognized prompt input
#[async_trait]
pub trait PromptValidator: Send + Sync {
    /// Validate a recognized value.
    ///
    /// # Returns
    /// `Some(value)` to accept, `None` to reject and re-prompt
    ///
    /// # Errors
    /// Returns `DialogError` if the validator itself failed (for example
    /// while sending a custom rejection message)
    async fn validate(
        &self,
        turn: &dyn TurnContext,
        recognized: Option<Value>,
    ) -> Result<Option<Value>, DialogError>;
}

/// Validator built from a plain closure that never sends output.
pub struct FnValidator<F> {
    check: F,
}

impl<F> FnValidator<F>
where
    F: Fn(Option<Value>) -> Option<Value> + Send + Sync,
{
    /// Wrap a filtering/mapping closure.
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

#[async_trait]
impl<F> PromptValidator for FnValidator<F>
where
    F: Fn(Option<Value>) -> Option<Value> + Send + Sync,
{
    async fn validate(
        &self,
        _turn: &dyn TurnContext,
        recognized: Option<Value>,
    ) -> Result<Option<Value>, DialogError> {
        Ok((self.check)(recognized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingTurnContext;
    use serde_json::json;

    fn whole_number_between_1_and_110(value: Option<Value>) -> Option<Value> {
        value
            .and_then(|v| v.as_f64())
            .filter(|n| (1.0..111.0).contains(n))
            .map(|n| json!(n.floor() as i64))
    }

    #[tokio::test]
    async fn test_fn_validator_accepts_and_maps() {
        let turn = RecordingTurnContext::new("35.7");
        let validator = FnValidator::new(whole_number_between_1_and_110);

        let out = validator.validate(&turn, Some(json!(35.7))).await.unwrap();

        assert_eq!(out, Some(json!(35)));
        assert_eq!(turn.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_fn_validator_rejects_missing_value() {
        let turn = RecordingTurnContext::new("abc");
        let validator = FnValidator::new(whole_number_between_1_and_110);

        let out = validator.validate(&turn, None).await.unwrap();

        assert_eq!(out, None);
    }
}
