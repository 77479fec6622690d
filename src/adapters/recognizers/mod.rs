//! Recognizer Adapters
//!
//! Small reference recognizers for prompts. Real language understanding
//! is expected to live behind the same `Recognizer` port elsewhere.
//!
//! - **TextRecognizer** - Any non-blank reply, trimmed
//! - **NumberRecognizer** - First number in the reply, locale-aware decimals
//! - **ConfirmRecognizer** - Yes/no answers in a few languages

mod confirm;
mod number;
mod text;

pub use confirm::ConfirmRecognizer;
pub use number::NumberRecognizer;
pub use text::TextRecognizer;
