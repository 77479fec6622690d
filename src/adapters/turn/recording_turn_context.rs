//! Recording Turn Context for in-process hosts and tests.
//!
//! Holds one inbound message and collects every reply sent during the
//! turn instead of delivering it to a channel.
//!
//! # Example
//!
//! ```ignore
//! let turn = Arc::new(RecordingTurnContext::new("35").with_locale("en-us"));
//! let mut dc = DialogContext::new(dialogs, turn.clone(), stack);
//! dc.continue_dialog().await?;
//! assert_eq!(turn.sent_texts(), vec!["age=35"]);
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{OutputError, TurnContext};

/// One reply captured by the recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentOutput {
    pub text: String,
    pub speak: Option<String>,
}

/// Turn context that records output in memory.
#[derive(Debug, Clone)]
pub struct RecordingTurnContext {
    text: String,
    locale: Option<String>,
    /// Error returned by every send when set.
    send_failure: Option<OutputError>,
    sent: Arc<Mutex<Vec<SentOutput>>>,
}

impl RecordingTurnContext {
    /// Creates a turn for an inbound message.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            locale: None,
            send_failure: None,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Makes every send fail as if the channel had dropped.
    pub fn failing_sends(self) -> Self {
        self.with_send_failure(OutputError::DeliveryFailed("recording turn rejects output".to_string()))
    }

    pub fn with_send_failure(mut self, error: OutputError) -> Self {
        self.send_failure = Some(error);
        self
    }

    /// All replies sent so far, in order.
    pub fn sent(&self) -> Vec<SentOutput> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    /// Display text of all replies sent so far.
    pub fn sent_texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|output| output.text).collect()
    }
}

#[async_trait]
impl TurnContext for RecordingTurnContext {
    fn text(&self) -> &str {
        &self.text
    }

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    async fn send_output(&self, text: &str, speak: Option<&str>) -> Result<(), OutputError> {
        if let Some(error) = &self.send_failure {
            tracing::warn!(error = %error, "dropping output");
            return Err(error.clone());
        }

        let mut sent = self.sent.lock().map_err(|_| OutputError::ChannelClosed)?;
        sent.push(SentOutput {
            text: text.to_string(),
            speak: speak.map(str::to_string),
        });
        Ok(())
    }

    fn sent_count(&self) -> usize {
        self.sent.lock().map(|sent| sent.len()).unwrap_or(0)
    }
}
