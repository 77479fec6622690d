use serde_json::Value;

use crate::ports::{Recognizer, TurnContext};

const YES: &[&str] = &["yes", "y", "yeah", "yep", "sure", "ok", "okay", "ja", "oui", "si", "sí"];
const NO: &[&str] = &["no", "n", "nope", "nah", "nein", "non"];

/// Recognizes a yes/no answer as a JSON boolean.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfirmRecognizer;

impl Recognizer for ConfirmRecognizer {
    fn recognize(&self, turn: &dyn TurnContext, _locale: &str) -> Option<Value> {
        let answer = turn
            .text()
            .trim()
            .trim_end_matches(|c: char| c.is_ascii_punctuation())
            .to_lowercase();

        if YES.contains(&answer.as_str()) {
            Some(Value::Bool(true))
        } else if NO.contains(&answer.as_str()) {
            Some(Value::Bool(false))
        } else {
            None
        }
    }
}
