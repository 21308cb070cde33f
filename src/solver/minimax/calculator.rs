//! Partition simulation for a guess
//!
//! Each rule a guess describes about itself is one piece of information the
//! game could reveal. Splitting the candidates by every rule in turn yields
//! the groups that feedback cannot tell apart; the largest group is the worst
//! case for that guess.

use crate::core::{Rule, Word};

/// Split every bucket into the members matching `rule` and the rest
///
/// Empty halves are dropped, so no bucket in the result is empty.
#[must_use]
pub fn split_by_rule<'a>(buckets: Vec<Vec<&'a Word>>, rule: &Rule) -> Vec<Vec<&'a Word>> {
    let mut result = Vec::with_capacity(buckets.len() * 2);
    for bucket in buckets {
        let (matching, rest): (Vec<&Word>, Vec<&Word>) =
            bucket.into_iter().partition(|word| rule.matches(word));
        if !rest.is_empty() {
            result.push(rest);
        }
        if !matching.is_empty() {
            result.push(matching);
        }
    }
    result
}

/// Partition `candidates` by each rule of `rules` in order
#[must_use]
pub fn partition<'a>(rules: &[Rule], candidates: &[&'a Word]) -> Vec<Vec<&'a Word>> {
    if candidates.is_empty() {
        return Vec::new();
    }

    rules
        .iter()
        .fold(vec![candidates.to_vec()], |buckets, rule| {
            split_by_rule(buckets, rule)
        })
}

/// Calculate the worst-case number of candidates left after a guess
///
/// Returns the size of the largest bucket once `rules` have all been applied.
/// An empty candidate list yields 0; the selector never asks for that.
///
/// # Examples
/// ```
/// use diffle_solver::core::Word;
/// use diffle_solver::solver::minimax::worst_case_remaining;
///
/// let guess = Word::new("abac").unwrap();
/// let candidates = [Word::new("abac").unwrap(), Word::new("bcab").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// assert_eq!(worst_case_remaining(guess.rules(), &candidate_refs), 1);
/// ```
#[must_use]
pub fn worst_case_remaining(rules: &[Rule], candidates: &[&Word]) -> usize {
    partition(rules, candidates)
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
}
