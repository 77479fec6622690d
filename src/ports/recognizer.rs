//! Recognizer Port - Turns raw input into typed candidate values.

use serde_json::Value;

use super::TurnContext;

/// Port for input recognition used by prompts
///
/// Recognition is a pure function of the current input: implementations
/// must not send output or keep per-turn state.
pub trait Recognizer: Send + Sync {
    /// Recognize a candidate value from the current message.
    ///
    /// # Arguments
    /// * `turn` - The current turn
    /// * `locale` - Effective locale (the turn's, else the configured default)
    ///
    /// # Returns
    /// The recognized value, or `None` when nothing usable was found
    fn recognize(&self, turn: &dyn TurnContext, locale: &str) -> Option<Value>;
}
