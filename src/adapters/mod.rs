//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the dialog engine to external systems:
//! - `storage` - Dialog stack persistence (in-memory, YAML files)
//! - `turn` - Turn contexts (in-process recorder)
//! - `recognizers` - Reference input recognizers for prompts

pub mod recognizers;
pub mod storage;
pub mod turn;

pub use recognizers::{ConfirmRecognizer, NumberRecognizer, TextRecognizer};
pub use storage::{FileDialogStateStore, InMemoryDialogStateStore};
pub use turn::{RecordingTurnContext, SentOutput};
