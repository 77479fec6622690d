//! Turn Context Adapters
//!
//! - **RecordingTurnContext** - In-process turn that records every reply

mod recording_turn_context;

pub use recording_turn_context::{RecordingTurnContext, SentOutput};
