//! Word analysis command
//!
//! Shows how one guess would split the answer pool.

use crate::core::Word;
use crate::solver::minimax::partition;
use crate::solver::{Score, Solver};
use anyhow::{Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub score: Score,
    pub total_candidates: usize,
    /// Bucket sizes, largest first
    pub buckets: Vec<usize>,
    /// The word's rules in display form
    pub rules: Vec<String>,
}

/// Analyze how `word` partitions the answer list
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid
/// - The word is not in the vocabulary
pub fn analyze_word(solver: &Solver<'_>, word: &str) -> Result<AnalysisResult> {
    let word_obj = Word::new(word)?;
    let Some(&guess) = solver
        .vocabulary()
        .iter()
        .find(|w| w.text() == word_obj.text())
    else {
        bail!("word '{word}' not in word list");
    };

    let candidates: Vec<&Word> = solver.answers().iter().collect();
    let mut buckets: Vec<usize> = partition(guess.rules(), &candidates)
        .iter()
        .map(Vec::len)
        .collect();
    buckets.sort_unstable_by(|a, b| b.cmp(a));

    let worst_case = buckets.first().copied().unwrap_or(0);
    Ok(AnalysisResult {
        word: guess.text().to_string(),
        score: Score::new(worst_case, guess.len()),
        total_candidates: candidates.len(),
        buckets,
        rules: guess.rules().iter().map(ToString::to_string).collect(),
    })
}
