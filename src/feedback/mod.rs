//! Feedback handling
//!
//! Translating annotations into rules, generating annotations for self-play,
//! and reading them from text.

pub mod notation;
pub mod oracle;
mod translator;

pub use notation::{NotationError, format_feedback, parse_feedback, parse_for_guess};
pub use oracle::{feedback_for, is_win};
pub use translator::translate;
