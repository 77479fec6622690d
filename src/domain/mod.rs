//! Domain layer containing the dialog engine and its primitives.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `dialog` - Dialog stack, dialogs, prompts and containers

pub mod dialog;
pub mod foundation;
