//! Errors raised while selecting guesses

use thiserror::Error;

/// Failure modes of the solver
#[derive(Debug, Error)]
pub enum SolverError {
    /// No candidate answer is consistent with the feedback so far
    #[error("no candidates remain; the feedback is inconsistent with every answer")]
    EmptyCandidateSet,

    /// Three or more candidates but nothing to guess from
    #[error("the guess pool is empty")]
    EmptyGuessPool,

    #[error("failed to build scoring thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
