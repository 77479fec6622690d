//! Prompt - Ask, wait one turn, validate, retry or return.
//!
//! A prompt sends its question on `begin` and waits. Each following
//! message is run through the injected `Recognizer` and, when present,
//! the `PromptValidator`. An accepted value ends the prompt and flows to
//! the caller's `resume`; a rejection re-sends the retry text (or the
//! primary text when no retry text is set) and keeps waiting. There is no
//! attempt limit here; hosts that want one wrap the prompt.
//!
//! When the validator already replied to the user during a rejection, the
//! prompt's own retry text is suppressed so the user sees one message.

mod options;

pub use options::PromptOptions;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::{Dialog, DialogContext, DialogError, DialogTurnResult};
use crate::ports::{PromptValidator, Recognizer};

const OPTIONS_KEY: &str = "options";
const ATTEMPTS_KEY: &str = "attempts";

/// Locale handed to recognizers when the turn does not carry one.
pub const DEFAULT_LOCALE: &str = "en-us";

/// Generic prompt over a recognizer and an optional validator.
pub struct Prompt {
    recognizer: Arc<dyn Recognizer>,
    validator: Option<Arc<dyn PromptValidator>>,
    default_locale: String,
}

impl Prompt {
    pub fn new(recognizer: impl Recognizer + 'static) -> Self {
        Self {
            recognizer: Arc::new(recognizer),
            validator: None,
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }

    pub fn with_validator(mut self, validator: impl PromptValidator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    async fn send_prompt(
        &self,
        dc: &DialogContext,
        options: &PromptOptions,
        is_retry: bool,
    ) -> Result<(), DialogError> {
        let (text, speak) = options.output_for(is_retry);
        dc.turn().send_output(text, speak).await?;
        Ok(())
    }

    fn stored_options(dc: &DialogContext) -> Result<PromptOptions, DialogError> {
        dc.state()?
            .get::<PromptOptions>(OPTIONS_KEY)?
            .ok_or_else(|| DialogError::InvalidState("prompt frame has no options".to_string()))
    }
}

#[async_trait]
impl Dialog for Prompt {
    async fn begin(
        &self,
        dc: &mut DialogContext,
        args: Option<Value>,
    ) -> Result<DialogTurnResult, DialogError> {
        let dialog_id = dc
            .active_dialog()
            .map(|frame| frame.id.clone())
            .ok_or_else(|| DialogError::InvalidState("no active dialog".to_string()))?;
        let options = PromptOptions::from_args(&dialog_id, args)?;

        let state = dc.state_mut()?;
        state.set(OPTIONS_KEY, &options)?;
        state.set(ATTEMPTS_KEY, 0_u32)?;

        self.send_prompt(dc, &options, false).await?;
        Ok(DialogTurnResult::waiting())
    }

    async fn continue_dialog(&self, dc: &mut DialogContext) -> Result<DialogTurnResult, DialogError> {
        let options = Self::stored_options(dc)?;
        let attempts = dc
            .state()?
            .get::<u32>(ATTEMPTS_KEY)?
            .unwrap_or(0)
            .saturating_add(1);
        dc.state_mut()?.set(ATTEMPTS_KEY, attempts)?;

        let locale = dc
            .turn()
            .locale()
            .unwrap_or(self.default_locale.as_str())
            .to_string();
        let recognized = self.recognizer.recognize(dc.turn(), &locale);

        let sent_before = dc.turn().sent_count();
        let value = match &self.validator {
            Some(validator) => validator.validate(dc.turn(), recognized).await?,
            None => recognized,
        };

        match value {
            Some(value) => {
                debug!(attempts, "prompt accepted input");
                dc.end(Some(value)).await
            }
            None => {
                warn!(attempts, "prompt rejected input");
                if dc.turn().sent_count() == sent_before {
                    self.send_prompt(dc, &options, true).await?;
                }
                Ok(DialogTurnResult::waiting())
            }
        }
    }

    async fn reprompt(&self, dc: &mut DialogContext) -> Result<DialogTurnResult, DialogError> {
        let options = Self::stored_options(dc)?;
        self.send_prompt(dc, &options, false).await?;
        Ok(DialogTurnResult::waiting())
    }
}
