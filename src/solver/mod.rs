//! Diffle solving algorithms
//!
//! Candidate filtering, minimax guess scoring, and the game session that ties
//! them together.

mod engine;
mod error;
pub mod filter;
pub mod minimax;
pub mod policy;
pub mod scorer;

pub use engine::{Round, Session, Solver, SolverConfig};
pub use error::SolverError;
pub use filter::{FilterOutcome, filter_candidates};
pub use policy::SelectionPolicy;
pub use scorer::{DEFAULT_BATCH_SIZE, ParallelScorer, Score, ScoredGuess};
