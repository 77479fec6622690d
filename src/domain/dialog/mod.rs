//! Dialog engine - Turn-based dialog stack runtime.
//!
//! # Module Organization
//!
//! - `dialog` - The `Dialog` lifecycle trait
//! - `instance` - Stack frames and per-frame private state
//! - `turn_result` - Outcome reported after each stack operation
//! - `set` - Registry of dialogs by id
//! - `context` - Per-turn stack walker with cascading completion
//! - `prompt` - Ask/validate/retry dialog and its options
//! - `waterfall` - Dialog built from ordered steps
//! - `container` - A nested stack presented as one dialog

mod container;
mod context;
mod dialog;
mod errors;
mod instance;
mod prompt;
mod set;
mod turn_result;
mod waterfall;

pub use container::DialogContainer;
pub use context::DialogContext;
pub use dialog::Dialog;
pub use errors::DialogError;
pub use instance::{DialogInstance, DialogStack, DialogState};
pub use prompt::{Prompt, PromptOptions, DEFAULT_LOCALE};
pub use set::DialogSet;
pub use turn_result::{DialogTurnResult, DialogTurnStatus};
pub use waterfall::{StepFuture, Waterfall, WaterfallStep};
