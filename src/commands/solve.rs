//! Word solving command
//!
//! Plays a game against a known hidden word and records every round.

use crate::core::{Feedback, Word};
use crate::feedback::{feedback_for, is_win};
use crate::solver::{Score, Solver};
use anyhow::{Result, bail};
use std::time::{Duration, Instant};

/// Round limit for self-play
pub const MAX_ROUNDS: usize = 20;

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub success: bool,
    pub steps: Vec<SolveStep>,
}

impl SolveResult {
    /// Letters spent on every guess, the winning one included
    #[must_use]
    pub fn letters_used(&self) -> usize {
        self.steps.iter().map(|step| step.guess.len()).sum()
    }
}

/// A single guess in the solution
pub struct SolveStep {
    pub guess: String,
    pub score: Score,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub elapsed: Duration,
}

/// Solve `target` by self-play
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word or not in the answer list
/// - The solver runs out of candidates or guesses
pub fn solve_word(solver: &Solver<'_>, target: &str) -> Result<SolveResult> {
    let word = Word::new(target)?;
    let Some(hidden) = solver.find_answer(word.text()) else {
        bail!("'{target}' is not in the answer list");
    };

    let steps = play_out(solver, hidden, MAX_ROUNDS)?;
    let success = steps
        .last()
        .is_some_and(|step| step.guess == hidden.text());

    Ok(SolveResult {
        target: hidden.text().to_string(),
        success,
        steps,
    })
}

/// Play one game against `hidden`, stopping on a win or after `max_rounds`
///
/// # Errors
///
/// Propagates solver errors.
pub fn play_out(solver: &Solver<'_>, hidden: &Word, max_rounds: usize) -> Result<Vec<SolveStep>> {
    let mut session = solver.new_game();
    let mut steps = Vec::new();

    while steps.len() < max_rounds {
        let started = Instant::now();
        let selection = session.suggest()?;
        let elapsed = started.elapsed();

        let guess = selection.word;
        let feedback = feedback_for(guess, hidden);
        let candidates_before = session.candidates().len();

        if is_win(guess, hidden) {
            steps.push(SolveStep {
                guess: guess.text().to_string(),
                score: selection.score,
                feedback,
                candidates_before,
                candidates_after: 1,
                elapsed,
            });
            break;
        }

        let round = session.apply(guess, feedback.clone());
        steps.push(SolveStep {
            guess: guess.text().to_string(),
            score: selection.score,
            feedback,
            candidates_before: round.before,
            candidates_after: round.after,
            elapsed,
        });
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{SAMPLE_ALLOWED, SAMPLE_ANSWERS};

    #[test]
    fn solve_word_succeeds() {
        let all_words = words_from_slice(SAMPLE_ALLOWED);
        let answer_words = words_from_slice(SAMPLE_ANSWERS);
        let solver = Solver::new(SolverConfig::default(), &all_words, &answer_words).unwrap();

        let result = solve_word(&solver, "crate").unwrap();

        assert!(result.success);
        assert_eq!(result.steps.last().unwrap().guess, "crate");
        assert_eq!(
            result.letters_used(),
            result.steps.iter().map(|s| s.guess.len()).sum::<usize>()
        );
    }

    #[test]
    fn solve_records_shrinking_pool() {
        let all_words = words_from_slice(SAMPLE_ALLOWED);
        let answer_words = words_from_slice(SAMPLE_ANSWERS);
        let solver = Solver::new(SolverConfig::default(), &all_words, &answer_words).unwrap();

        let result = solve_word(&solver, "scatter").unwrap();

        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        assert_eq!(result.steps[0].candidates_before, answer_words.len());
    }

    #[test]
    fn every_answer_is_solved() {
        let all_words = words_from_slice(SAMPLE_ALLOWED);
        let answer_words = words_from_slice(SAMPLE_ANSWERS);
        let solver = Solver::new(SolverConfig::default(), &all_words, &answer_words).unwrap();

        for answer in SAMPLE_ANSWERS {
            let result = solve_word(&solver, answer).unwrap();
            assert!(result.success, "failed to solve {answer}");
        }
    }

    #[test]
    fn solve_unknown_target_returns_error() {
        let all_words = words_from_slice(SAMPLE_ALLOWED);
        let answer_words = words_from_slice(SAMPLE_ANSWERS);
        let solver = Solver::new(SolverConfig::default(), &all_words, &answer_words).unwrap();

        assert!(solve_word(&solver, "zebra").is_err());
        assert!(solve_word(&solver, "not a word").is_err());
    }

    #[test]
    fn play_out_respects_round_limit() {
        let all_words = words_from_slice(SAMPLE_ALLOWED);
        let answer_words = words_from_slice(SAMPLE_ANSWERS);
        let solver = Solver::new(SolverConfig::default(), &all_words, &answer_words).unwrap();
        let hidden = solver.find_answer("abstract").unwrap();

        let steps = play_out(&solver, hidden, 1).unwrap();
        assert_eq!(steps.len(), 1);
    }
}
