//! Which guess pools a selection draws from
//!
//! Guessing a candidate can end the game at once, guessing from the whole
//! vocabulary can split the pool harder. The dual policy runs both.

use super::SolverError;
use super::minimax::{Selection, select_guess};
use super::scorer::ParallelScorer;
use crate::core::Word;
use std::fmt;
use std::str::FromStr;

/// Guess pool policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Only guess remaining candidates
    Exploit,
    /// Guess anything in the vocabulary
    Explore,
    /// Prefer the best candidate unless a vocabulary word scores strictly better
    #[default]
    Dual,
}

impl SelectionPolicy {
    /// Select the next guess under this policy
    ///
    /// # Errors
    /// Propagates `SolverError` from [`select_guess`].
    pub fn select<'a>(
        self,
        scorer: &ParallelScorer,
        vocabulary: &[&'a Word],
        candidates: &[&'a Word],
    ) -> Result<Selection<'a>, SolverError> {
        match self {
            Self::Exploit => select_guess(scorer, candidates, candidates),
            Self::Explore => select_guess(scorer, vocabulary, candidates),
            Self::Dual => {
                let exploit = select_guess(scorer, candidates, candidates)?;
                match select_guess(scorer, vocabulary, candidates) {
                    Ok(explore) if explore.score < exploit.score => Ok(explore),
                    Ok(_) | Err(SolverError::EmptyGuessPool) => Ok(exploit),
                    Err(error) => Err(error),
                }
            }
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exploit => "exploit",
            Self::Explore => "explore",
            Self::Dual => "dual",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exploit" => Ok(Self::Exploit),
            "explore" => Ok(Self::Explore),
            "dual" => Ok(Self::Dual),
            other => Err(format!(
                "unknown policy '{other}' (expected exploit, explore or dual)"
            )),
        }
    }
}
