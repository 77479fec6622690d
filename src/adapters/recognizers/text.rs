use serde_json::Value;

use crate::ports::{Recognizer, TurnContext};

/// Accepts any non-blank reply as a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRecognizer;

impl Recognizer for TextRecognizer {
    fn recognize(&self, turn: &dyn TurnContext, _locale: &str) -> Option<Value> {
        let text = turn.text().trim();
        if text.is_empty() {
            None
        } else {
            Some(Value::String(text.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingTurnContext;
    use serde_json::json;

    #[test]
    fn test_trims_reply() {
        let turn = RecordingTurnContext::new("  Ada Lovelace ");
        assert_eq!(TextRecognizer.recognize(&turn, "en-us"), Some(json!("Ada Lovelace")));
    }

    #[test]
    fn test_blank_reply_is_not_recognized() {
        let turn = RecordingTurnContext::new(" \t ");
        assert_eq!(TextRecognizer.recognize(&turn, "en-us"), None);
    }
}
