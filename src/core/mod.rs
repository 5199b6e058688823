//! Core domain types for Wordle
//!
//! Words and feedback scoring. Everything here is pure: no I/O, no
//! randomness, no logging.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;
