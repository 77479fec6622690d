//! Storage Adapters
//!
//! Implementations of the DialogStateStore port for persisting dialog stacks.
//!
//! ## Available Adapters
//!
//! - **FileDialogStateStore** - Stores one YAML snapshot per conversation on disk
//! - **InMemoryDialogStateStore** - Stores snapshots in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileDialogStateStore, InMemoryDialogStateStore};
//!
//! // Production: file-based storage
//! let store = FileDialogStateStore::new("./data/dialogs");
//!
//! // Testing: in-memory storage
//! let store = InMemoryDialogStateStore::new();
//! ```

mod file_dialog_store;
mod in_memory_dialog_store;

pub use file_dialog_store::FileDialogStateStore;
pub use in_memory_dialog_store::InMemoryDialogStateStore;
