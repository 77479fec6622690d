//! Dialog Runtime - Turn-based conversational dialog stack
//!
//! This crate drives multi-turn conversations as a stack of dialogs that
//! is persisted between messages, with prompts that validate and retry
//! and containers that nest whole sub-stacks.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
