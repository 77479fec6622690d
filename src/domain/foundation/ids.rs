//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Identity of one conversation whose dialog stack is persisted between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(Uuid);

impl ConversationId {
    /// Creates a new random ConversationId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ConversationId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ConversationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Name under which a dialog is registered in a `DialogSet`.
///
/// Dialog ids are chosen by the developer at setup time and are persisted
/// inside every stack frame, so they must be non-empty and free of
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DialogId(String);

impl DialogId {
    /// Creates a validated dialog id.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("dialog_id"));
        }
        if id.trim() != id {
            return Err(ValidationError::invalid_format(
                "dialog_id",
                "must not have leading or trailing whitespace",
            ));
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DialogId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DialogId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DialogId> for String {
    fn from(id: DialogId) -> Self {
        id.0
    }
}

impl Borrow<str> for DialogId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DialogId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_id_generates_unique_values() {
        let id1 = ConversationId::new();
        let id2 = ConversationId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn conversation_id_parses_from_string() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ConversationId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn conversation_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<ConversationId>().is_err());
    }

    #[test]
    fn conversation_id_serializes_as_bare_uuid() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = ConversationId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
    }

    #[test]
    fn dialog_id_accepts_plain_names() {
        let id = DialogId::new("agePrompt").unwrap();
        assert_eq!(id.as_str(), "agePrompt");
        assert_eq!(id.to_string(), "agePrompt");
    }

    #[test]
    fn dialog_id_rejects_empty() {
        assert!(matches!(
            DialogId::new("   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn dialog_id_rejects_padded_names() {
        assert!(matches!(
            DialogId::new(" root"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn dialog_id_borrows_as_str_for_lookups() {
        let mut map = std::collections::HashMap::new();
        map.insert(DialogId::new("root").unwrap(), 1);
        assert_eq!(map.get("root"), Some(&1));
    }
}
