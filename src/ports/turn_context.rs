//! Turn Context Port - The engine's view of one inbound message.
//!
//! The dialog engine never talks to a channel directly. It reads the raw
//! text and locale of the current message and sends replies through this
//! port; everything transport-specific stays on the host side.

use async_trait::async_trait;

/// Errors raised by the transport when delivering output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutputError {
    #[error("Output delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Channel closed")]
    ChannelClosed,
}

/// Port for the current conversational turn
#[async_trait]
pub trait TurnContext: Send + Sync {
    /// Raw text of the inbound message.
    fn text(&self) -> &str;

    /// Locale reported by the channel for this message, if any.
    fn locale(&self) -> Option<&str>;

    /// Send a reply to the user.
    ///
    /// # Arguments
    /// * `text` - Display text
    /// * `speak` - Optional speech variant for voice channels
    ///
    /// # Errors
    /// Returns `OutputError` if the transport could not deliver the reply
    async fn send_output(&self, text: &str, speak: Option<&str>) -> Result<(), OutputError>;

    /// Number of replies successfully sent during this turn so far.
    fn sent_count(&self) -> usize;
}
