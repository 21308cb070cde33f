//! Minimax guess selection
//!
//! Partition simulation for a single guess, and worst-case-minimizing
//! selection over a pool of guesses.

mod calculator;
mod selector;

pub use calculator::{partition, split_by_rule, worst_case_remaining};
pub use selector::{Selection, select_guess};
