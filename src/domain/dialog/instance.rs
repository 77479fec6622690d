//! Dialog stack frames and their private state.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::DialogError;
use crate::domain::foundation::DialogId;

/// Private scratch storage owned by one dialog frame.
///
/// The map behind it is never handed out. Dialogs read and write typed
/// values by key, and only through the `DialogContext` of the turn that
/// owns the frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogState(Map<String, Value>);

impl DialogState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a typed value.
    ///
    /// Returns `Ok(None)` when the key is absent and an error when the
    /// stored value does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DialogError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| DialogError::InvalidState(format!("{}: {}", key, e))),
        }
    }

    /// Writes a typed value, replacing any previous one.
    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: T) -> Result<(), DialogError> {
        let key = key.into();
        let value = serde_json::to_value(value)
            .map_err(|e| DialogError::InvalidState(format!("{}: {}", key, e)))?;
        self.0.insert(key, value);
        Ok(())
    }

    /// Removes a key, returning the raw value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One activation of a registered dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogInstance {
    pub id: DialogId,
    /// Private to the dialog that owns the frame; hooks reach it through
    /// `DialogContext::state` while the frame is active.
    pub(crate) state: DialogState,
}

impl DialogInstance {
    /// Creates a fresh frame with empty state.
    pub fn new(id: DialogId) -> Self {
        Self {
            id,
            state: DialogState::new(),
        }
    }
}

/// Ordered frames of one conversation, active dialog last.
///
/// Serializes as a plain sequence of `{id, state}` records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogStack(Vec<DialogInstance>);

impl DialogStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The active frame, if any.
    pub fn top(&self) -> Option<&DialogInstance> {
        self.0.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DialogInstance> {
        self.0.iter()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut DialogInstance> {
        self.0.last_mut()
    }

    pub(crate) fn push(&mut self, instance: DialogInstance) {
        self.0.push(instance);
    }

    pub(crate) fn pop(&mut self) -> Option<DialogInstance> {
        self.0.pop()
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn frame(id: &str) -> DialogInstance {
        DialogInstance::new(DialogId::new(id).unwrap())
    }

    #[test]
    fn test_state_set_and_get_typed_value() {
        let mut state = DialogState::new();
        state.set("step", 2_usize).unwrap();

        assert_eq!(state.get::<usize>("step").unwrap(), Some(2));
        assert!(state.contains_key("step"));
    }

    #[test]
    fn test_state_get_missing_key_is_none() {
        let state = DialogState::new();
        assert_eq!(state.get::<String>("name").unwrap(), None);
    }

    #[test]
    fn test_state_get_wrong_type_is_invalid_state() {
        let mut state = DialogState::new();
        state.set("name", "Ada").unwrap();

        let result = state.get::<u32>("name");

        assert!(matches!(result, Err(DialogError::InvalidState(_))));
    }

    #[test]
    fn test_state_remove() {
        let mut state = DialogState::new();
        state.set("name", "Ada").unwrap();

        assert_eq!(state.remove("name"), Some(json!("Ada")));
        assert!(state.is_empty());
    }

    #[test]
    fn test_stack_top_is_last_pushed() {
        let mut stack = DialogStack::new();
        stack.push(frame("root"));
        stack.push(frame("agePrompt"));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top().map(|f| f.id.as_str()), Some("agePrompt"));

        stack.pop();
        assert_eq!(stack.top().map(|f| f.id.as_str()), Some("root"));
    }

    #[test]
    fn test_stack_serializes_as_sequence_of_frames() {
        let mut stack = DialogStack::new();
        let mut root = frame("root");
        root.state.set("stepIndex", 1).unwrap();
        stack.push(root);

        let json = serde_json::to_value(&stack).unwrap();

        assert_eq!(
            json,
            json!([{ "id": "root", "state": { "stepIndex": 1 } }])
        );
    }

    #[test]
    fn test_stack_roundtrip_preserves_equality() {
        let mut stack = DialogStack::new();
        let mut root = frame("root");
        root.state.set("profile", json!({"name": "Ada", "tags": [1, 2]})).unwrap();
        stack.push(root);
        stack.push(frame("namePrompt"));

        let yaml = serde_yaml::to_string(&stack).unwrap();
        let back: DialogStack = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(back, stack);
    }

    #[test]
    fn test_stack_rejects_empty_dialog_id_on_load() {
        let result: Result<DialogStack, _> =
            serde_json::from_value(json!([{ "id": "", "state": {} }]));
        assert!(result.is_err());
    }
}
