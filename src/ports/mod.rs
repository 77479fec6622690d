//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the dialog engine and the outside world. Adapters implement these ports.
//!
//! - `TurnContext` - The current inbound message and the output channel
//! - `Recognizer` - Turns raw text into candidate values for prompts
//! - `PromptValidator` - Business rules applied to recognized values
//! - `DialogStateStore` - Load/save of a conversation's dialog stack

mod dialog_state_store;
mod prompt_validator;
mod recognizer;
mod turn_context;

pub use dialog_state_store::{DialogStackSnapshot, DialogStateStore, StateStoreError};
pub use prompt_validator::{FnValidator, PromptValidator};
pub use recognizer::Recognizer;
pub use turn_context::{OutputError, TurnContext};
