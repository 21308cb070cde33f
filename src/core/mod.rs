//! Core domain types for Diffle
//!
//! Words, the rules that describe them, and the feedback annotations the game
//! reports. Everything here is pure data with no I/O.

mod feedback;
mod rule;
mod word;

pub use feedback::{Feedback, LetterFeedback, Tag, TagSet};
pub use rule::{Rule, SequencePattern};
pub use word::{MAX_WORD_LEN, Word, WordError};
