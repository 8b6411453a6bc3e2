//! Core domain types
//!
//! The fundamental value types of the engine: validated words and feedback
//! patterns. Everything here is pure and has no dependency on word lists,
//! scoring, or I/O.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern};
pub use word::{WORD_LEN, Word, WordError};
