//! Registry of dialogs by id.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::dialog::Dialog;
use super::errors::DialogError;
use crate::domain::foundation::DialogId;

/// Maps dialog ids to dialog implementations.
///
/// Built once at setup time and shared read-only by every turn.
#[derive(Default, Clone)]
pub struct DialogSet {
    dialogs: HashMap<DialogId, Arc<dyn Dialog>>,
}

impl DialogSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dialog under a unique id.
    ///
    /// # Errors
    /// `DialogError::InvalidDialogId` for a malformed id and
    /// `DialogError::DuplicateDialog` if the id is taken.
    pub fn add(&mut self, id: &str, dialog: impl Dialog + 'static) -> Result<(), DialogError> {
        self.add_shared(id, Arc::new(dialog))
    }

    /// Register an already shared dialog, e.g. one prompt under two ids.
    pub fn add_shared(&mut self, id: &str, dialog: Arc<dyn Dialog>) -> Result<(), DialogError> {
        let id = DialogId::new(id)?;
        if self.dialogs.contains_key(&id) {
            tracing::warn!(dialog_id = %id, "duplicate dialog registration");
            return Err(DialogError::DuplicateDialog(id));
        }
        self.dialogs.insert(id, dialog);
        Ok(())
    }

    /// Look up a dialog by id.
    pub fn find(&self, id: &str) -> Option<Arc<dyn Dialog>> {
        self.dialogs.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.dialogs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }
}

impl fmt::Debug for DialogSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.dialogs.keys().map(DialogId::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("DialogSet").field("dialogs", &ids).finish()
    }
}
