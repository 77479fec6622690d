//! Number recognition.
//!
//! Picks the first token of the reply that parses as a number. Locales
//! that write decimals with a comma (`de`, `fr`, `es`, ...) have `.` as the
//! grouping separator; everything else uses `,` for grouping.

use serde_json::{Number, Value};

use crate::ports::{Recognizer, TurnContext};

const COMMA_DECIMAL_LANGUAGES: &[&str] = &["de", "es", "fr", "it", "nl", "pl", "pt", "ru", "sv", "tr"];

/// Recognizes integers and decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberRecognizer;

impl NumberRecognizer {
    fn uses_decimal_comma(locale: &str) -> bool {
        let language = locale.split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
        COMMA_DECIMAL_LANGUAGES.contains(&language.as_str())
    }

    /// Rewrite a token into `str::parse` form.
    ///
    /// Grouping separators are only accepted between groups of exactly
    /// three digits, so `1,500` is 1500 while `1,2` is not a number.
    fn normalize(token: &str, decimal_comma: bool) -> Option<String> {
        let (group_sep, decimal_sep) = if decimal_comma { ('.', ',') } else { (',', '.') };
        let (integer, fraction) = match token.split_once(decimal_sep) {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (token, None),
        };
        if fraction.map_or(false, |f| f.contains([group_sep, decimal_sep])) {
            return None;
        }

        let (sign, digits) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer),
        };
        let mut groups = digits.split(group_sep);
        let lead = groups.next().unwrap_or_default();
        let tail: Vec<&str> = groups.collect();
        if !tail.is_empty() {
            let grouped = (1..=3).contains(&lead.len())
                && tail
                    .iter()
                    .all(|group| group.len() == 3 && group.chars().all(|c| c.is_ascii_digit()));
            if !grouped {
                return None;
            }
        }

        let mut normalized = format!("{}{}{}", sign, lead, tail.concat());
        if let Some(fraction) = fraction {
            normalized.push('.');
            normalized.push_str(fraction);
        }
        Some(normalized)
    }

    fn parse_token(token: &str, decimal_comma: bool) -> Option<Value> {
        let token = token.trim_end_matches(|c: char| matches!(c, '.' | ',' | '!' | '?' | ';' | ':'));
        if token.is_empty() || !token.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        let normalized = Self::normalize(token, decimal_comma)?;

        if let Ok(int) = normalized.parse::<i64>() {
            return Some(Value::Number(int.into()));
        }
        normalized
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
    }
}

impl Recognizer for NumberRecognizer {
    fn recognize(&self, turn: &dyn TurnContext, locale: &str) -> Option<Value> {
        let decimal_comma = Self::uses_decimal_comma(locale);
        turn.text()
            .split_whitespace()
            .find_map(|token| Self::parse_token(token, decimal_comma))
    }
}
