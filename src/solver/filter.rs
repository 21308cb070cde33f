//! Candidate filtering
//!
//! Keeps the candidates that satisfy every rule learned from feedback.

use crate::core::{Rule, Word};

/// Result of filtering a pool, with sizes for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    pub pool: Vec<&'a Word>,
    pub before: usize,
    pub after: usize,
}

/// Keep the members of `pool` that satisfy all of `rules`
///
/// Relative order is preserved. An empty rule set keeps everything.
#[must_use]
pub fn filter_candidates<'a>(pool: &[&'a Word], rules: &[Rule]) -> FilterOutcome<'a> {
    let kept: Vec<&Word> = pool
        .iter()
        .copied()
        .filter(|word| rules.iter().all(|rule| rule.matches(word)))
        .collect();

    FilterOutcome {
        before: pool.len(),
        after: kept.len(),
        pool: kept,
    }
}
