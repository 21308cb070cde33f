//! Minimax guess selection
//!
//! Picks the guess that minimizes the worst-case remaining candidates, with
//! shorter guesses winning ties.

use crate::core::Word;
use crate::solver::SolverError;
use crate::solver::scorer::{ParallelScorer, Score};

/// A chosen guess and its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub word: &'a Word,
    pub score: Score,
}

/// Select the best guess from `allowed` for the given candidates
///
/// Base cases are answered without scoring:
/// - one candidate: guess it, score `(0, len)`
/// - two candidates: guess the shorter (first on ties), score `(1, len)`
///
/// Otherwise every allowed guess is scored and the minimum wins, earliest in
/// `allowed` on ties.
///
/// # Errors
/// - `SolverError::EmptyCandidateSet` when `candidates` is empty
/// - `SolverError::EmptyGuessPool` when scoring is needed but `allowed` is empty
///
/// # Examples
/// ```
/// use diffle_solver::core::Word;
/// use diffle_solver::solver::ParallelScorer;
/// use diffle_solver::solver::minimax::select_guess;
///
/// let words = [Word::new("abac").unwrap(), Word::new("bcab").unwrap()];
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let selection = select_guess(&ParallelScorer::default(), &refs, &refs).unwrap();
/// assert_eq!(selection.word.text(), "abac");
/// assert_eq!(selection.score.worst_case, 1);
/// ```
pub fn select_guess<'a>(
    scorer: &ParallelScorer,
    allowed: &[&'a Word],
    candidates: &[&'a Word],
) -> Result<Selection<'a>, SolverError> {
    match *candidates {
        [] => Err(SolverError::EmptyCandidateSet),
        [only] => Ok(Selection {
            word: only,
            score: Score::new(0, only.len()),
        }),
        [first, second] => {
            let word = if second.len() < first.len() {
                second
            } else {
                first
            };
            Ok(Selection {
                word,
                score: Score::new(1, word.len()),
            })
        }
        _ => scorer
            .best(allowed, candidates)
            .map(|best| Selection {
                word: best.word,
                score: best.score,
            })
            .ok_or(SolverError::EmptyGuessPool),
    }
}
