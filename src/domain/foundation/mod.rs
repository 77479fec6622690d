//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error vocabulary used by the
//! dialog engine and its adapters.

mod errors;
mod ids;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ConversationId, DialogId};
pub use timestamp::Timestamp;
