//! Parallel guess scoring
//!
//! Scores every allowed guess against the candidate pool. The guesses are cut
//! into contiguous batches and each batch runs as one rayon task, so dispatch
//! overhead is paid per batch rather than per word.

use super::SolverError;
use super::minimax::worst_case_remaining;
use crate::core::Word;
use rayon::ThreadPool;
use rayon::prelude::*;

/// Guesses scored per task
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Quality of a guess, smaller is better
///
/// Ordered by worst-case remaining candidates first, guess length second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    pub worst_case: usize,
    pub length: usize,
}

impl Score {
    #[must_use]
    pub const fn new(worst_case: usize, length: usize) -> Self {
        Self { worst_case, length }
    }

    /// Score `guess` against `candidates` with the partition simulator
    #[must_use]
    pub fn of(guess: &Word, candidates: &[&Word]) -> Self {
        Self::new(worst_case_remaining(guess.rules(), candidates), guess.len())
    }
}

/// A guess tagged with its position in the allowed list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredGuess<'a> {
    pub index: usize,
    pub word: &'a Word,
    pub score: Score,
}

/// Batched scorer backed by rayon
///
/// Uses the global rayon pool (one worker per hardware thread) unless built
/// with an explicit thread count.
pub struct ParallelScorer {
    batch_size: usize,
    pool: Option<ThreadPool>,
}

impl ParallelScorer {
    /// Create a scorer on the global rayon pool
    ///
    /// A batch size of zero is treated as one.
    #[must_use]
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            pool: None,
        }
    }

    /// Create a scorer with a dedicated pool of `threads` workers
    ///
    /// # Errors
    /// Returns `SolverError::ThreadPool` if rayon cannot start the workers.
    pub fn with_threads(batch_size: usize, threads: usize) -> Result<Self, SolverError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("scorer-{i}"))
            .build()?;

        Ok(Self {
            batch_size: batch_size.max(1),
            pool: Some(pool),
        })
    }

    #[must_use]
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Score every guess in `allowed` against `candidates`
    ///
    /// Blocks until every batch is done. Each result keeps the index of its
    /// guess in `allowed`.
    #[must_use]
    pub fn score_all<'a>(
        &self,
        allowed: &[&'a Word],
        candidates: &[&Word],
    ) -> Vec<ScoredGuess<'a>> {
        let batch_size = self.batch_size;
        let run = || {
            let batches: Vec<Vec<ScoredGuess<'a>>> = allowed
                .par_chunks(batch_size)
                .enumerate()
                .map(|(batch, chunk)| {
                    let offset = batch * batch_size;
                    chunk
                        .iter()
                        .enumerate()
                        .map(|(i, &word)| ScoredGuess {
                            index: offset + i,
                            word,
                            score: Score::of(word, candidates),
                        })
                        .collect()
                })
                .collect();
            batches.concat()
        };

        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    /// Lowest-scoring guess, earliest index on ties
    ///
    /// Returns `None` if `allowed` is empty.
    #[must_use]
    pub fn best<'a>(
        &self,
        allowed: &[&'a Word],
        candidates: &[&Word],
    ) -> Option<ScoredGuess<'a>> {
        self.score_all(allowed, candidates)
            .into_iter()
            .min_by_key(|scored| (scored.score, scored.index))
    }
}

impl Default for ParallelScorer {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}
