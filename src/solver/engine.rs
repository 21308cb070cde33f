//! Main Diffle solver interface

use super::filter::filter_candidates;
use super::minimax::Selection;
use super::policy::SelectionPolicy;
use super::scorer::{DEFAULT_BATCH_SIZE, ParallelScorer};
use super::SolverError;
use crate::core::{Feedback, Rule, Word};
use crate::feedback::translate;
use rustc_hash::FxHashSet;

/// Solver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub policy: SelectionPolicy,
    /// Guesses scored per parallel task
    pub batch_size: usize,
    /// Scoring threads, `None` for one per hardware thread
    pub threads: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            threads: None,
        }
    }
}

/// Main Diffle solver
///
/// Holds the vocabulary, the answer list, and the scorer. Games are played
/// through [`Session`]s.
pub struct Solver<'a> {
    policy: SelectionPolicy,
    scorer: ParallelScorer,
    vocabulary: Vec<&'a Word>,
    answers: &'a [Word],
}

impl<'a> Solver<'a> {
    /// Create a solver over the given word lists
    ///
    /// # Parameters
    /// - `all_words`: every guess the game accepts
    /// - `answer_words`: the words that can be hidden
    ///
    /// # Errors
    /// Returns `SolverError::ThreadPool` if a dedicated scoring pool was
    /// requested and could not be built.
    pub fn new(
        config: SolverConfig,
        all_words: &'a [Word],
        answer_words: &'a [Word],
    ) -> Result<Self, SolverError> {
        let scorer = match config.threads {
            Some(threads) => ParallelScorer::with_threads(config.batch_size, threads)?,
            None => ParallelScorer::new(config.batch_size),
        };

        Ok(Self {
            policy: config.policy,
            scorer,
            vocabulary: all_words.iter().collect(),
            answers: answer_words,
        })
    }

    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    #[must_use]
    pub const fn scorer(&self) -> &ParallelScorer {
        &self.scorer
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[&'a Word] {
        &self.vocabulary
    }

    #[must_use]
    pub const fn answers(&self) -> &'a [Word] {
        self.answers
    }

    /// Look up an answer by text
    #[must_use]
    pub fn find_answer(&self, text: &str) -> Option<&'a Word> {
        self.answers.iter().find(|w| w.text() == text)
    }

    /// Select a guess from `allowed` under the configured policy
    ///
    /// # Errors
    /// Propagates `SolverError` from the selector.
    pub fn select(
        &self,
        allowed: &[&'a Word],
        candidates: &[&'a Word],
    ) -> Result<Selection<'a>, SolverError> {
        self.policy.select(&self.scorer, allowed, candidates)
    }

    /// Start a game with every answer as a candidate
    #[must_use]
    pub fn new_game(&self) -> Session<'_, 'a> {
        Session {
            solver: self,
            candidates: self.answers.iter().collect(),
            played: FxHashSet::default(),
            rounds: Vec::new(),
        }
    }
}

/// One completed round of a game
#[derive(Debug, Clone)]
pub struct Round<'a> {
    pub guess: &'a Word,
    pub feedback: Feedback,
    pub rules: Vec<Rule>,
    pub before: usize,
    pub after: usize,
    previous: Vec<&'a Word>,
}

/// State of one game in progress
///
/// The session owns the candidate pool between rounds. Guesses already played
/// are excluded from later suggestions by text.
pub struct Session<'s, 'a> {
    solver: &'s Solver<'a>,
    candidates: Vec<&'a Word>,
    played: FxHashSet<&'a str>,
    rounds: Vec<Round<'a>>,
}

impl<'a> Session<'_, 'a> {
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round<'a>] {
        &self.rounds
    }

    /// Number of the round about to be played, starting at 1
    #[must_use]
    pub fn round_number(&self) -> usize {
        self.rounds.len() + 1
    }

    /// Letters spent on completed rounds
    #[must_use]
    pub fn letters_used(&self) -> usize {
        self.rounds.iter().map(|round| round.guess.len()).sum()
    }

    #[must_use]
    pub fn has_played(&self, word: &Word) -> bool {
        self.played.contains(word.text())
    }

    /// Suggest the next guess
    ///
    /// # Errors
    /// `SolverError::EmptyCandidateSet` once the feedback has ruled out every
    /// answer.
    pub fn suggest(&self) -> Result<Selection<'a>, SolverError> {
        let allowed: Vec<&'a Word> = self
            .solver
            .vocabulary()
            .iter()
            .copied()
            .filter(|word| !self.played.contains(word.text()))
            .collect();

        self.solver.select(&allowed, &self.candidates)
    }

    /// Record that `guess` was played and did not win
    ///
    /// Translates `feedback`, filters the pool with the resulting rules, and
    /// drops the guess itself from the pool.
    pub fn apply(&mut self, guess: &'a Word, feedback: Feedback) -> &Round<'a> {
        let rules = translate(&feedback);
        let outcome = filter_candidates(&self.candidates, &rules);

        self.played.insert(guess.text());
        let pool: Vec<&'a Word> = outcome
            .pool
            .into_iter()
            .filter(|word| word.text() != guess.text())
            .collect();

        let after = pool.len();
        let previous = std::mem::replace(&mut self.candidates, pool);
        self.rounds.push(Round {
            guess,
            feedback,
            rules,
            before: outcome.before,
            after,
            previous,
        });
        &self.rounds[self.rounds.len() - 1]
    }

    /// Take back the last round, restoring its candidate pool
    pub fn undo(&mut self) -> Option<Round<'a>> {
        let round = self.rounds.pop()?;
        self.played.remove(round.guess.text());
        self.candidates.clone_from(&round.previous);
        Some(round)
    }

    /// Start over with every answer as a candidate
    pub fn reset(&mut self) {
        *self = self.solver.new_game();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::feedback_for;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn setup() -> (Vec<Word>, Vec<Word>) {
        let all_words = words(&["cat", "cart", "act", "tac", "cast", "tack", "scat", "at"]);
        let answer_words = words(&["cat", "cart", "act", "tac", "cast"]);
        (all_words, answer_words)
    }

    #[test]
    fn new_game_starts_with_every_answer() {
        let (all_words, answer_words) = setup();
        let solver = Solver::new(SolverConfig::default(), &all_words, &answer_words).unwrap();
        let session = solver.new_game();

        assert_eq!(session.candidates().len(), answer_words.len());
        assert_eq!(session.round_number(), 1);
        assert_eq!(session.letters_used(), 0);
    }

    #[test]
    fn apply_shrinks_pool_and_keeps_hidden() {
        let (all_words, answer_words) = setup();
        let solver = Solver::new(SolverConfig::default(), &all_words, &answer_words).unwrap();
        let mut session = solver.new_game();
        let hidden = solver.find_answer("cast").unwrap();

        let guess = session.suggest().unwrap().word;
        let round = session.apply(guess, feedback_for(guess, hidden));

        assert!(round.after <= round.before);
        assert_eq!(round.before, answer_words.len());
        assert!(session.candidates().contains(&hidden) || guess == hidden);
        assert!(session.has_played(guess));
        assert!(!session.candidates().contains(&guess));
    }

    #[test]
    fn suggestions_skip_played_words() {
        let (all_words, answer_words) = setup();
        let solver = Solver::new(SolverConfig::default(), &all_words, &answer_words).unwrap();
        let mut session = solver.new_game();
        let hidden = solver.find_answer("tac").unwrap();

        let mut guesses = Vec::new();
        while let Ok(selection) = session.suggest() {
            if selection.word == hidden {
                break;
            }
            assert!(!guesses.contains(&selection.word.text()));
            guesses.push(selection.word.text());
            session.apply(selection.word, feedback_for(selection.word, hidden));
            assert!(session.rounds().len() < 10);
        }
        assert!(session.candidates().contains(&hidden));
    }

    #[test]
    fn undo_restores_previous_pool() {
        let (all_words, answer_words) = setup();
        let solver = Solver::new(SolverConfig::default(), &all_words, &answer_words).unwrap();
        let mut session = solver.new_game();
        let hidden = solver.find_answer("act").unwrap();

        let before: Vec<&Word> = session.candidates().to_vec();
        let guess = session.suggest().unwrap().word;
        session.apply(guess, feedback_for(guess, hidden));

        let undone = session.undo().unwrap();
        assert_eq!(undone.guess, guess);
        assert_eq!(session.candidates(), before.as_slice());
        assert!(!session.has_played(guess));
        assert!(session.undo().is_none());
    }

    #[test]
    fn impossible_feedback_empties_pool() {
        let (all_words, answer_words) = setup();
        let solver = Solver::new(SolverConfig::default(), &all_words, &answer_words).unwrap();
        let mut session = solver.new_game();
        let stranger = Word::new("zzz").unwrap();

        let guess = solver.vocabulary()[0];
        session.apply(guess, feedback_for(guess, &stranger));

        assert!(session.candidates().is_empty());
        assert!(matches!(
            session.suggest(),
            Err(SolverError::EmptyCandidateSet)
        ));
    }

    #[test]
    fn empty_vocabulary_still_suggests_candidates() {
        let (_, answer_words) = setup();
        let solver = Solver::new(SolverConfig::default(), &[], &answer_words).unwrap();
        let selection = solver.new_game().suggest().unwrap();

        assert_eq!(solver.policy(), SelectionPolicy::Dual);
        assert!(answer_words.contains(selection.word));
    }

    #[test]
    fn reset_clears_history() {
        let (all_words, answer_words) = setup();
        let solver = Solver::new(SolverConfig::default(), &all_words, &answer_words).unwrap();
        let mut session = solver.new_game();
        let hidden = solver.find_answer("cart").unwrap();

        let guess = session.suggest().unwrap().word;
        session.apply(guess, feedback_for(guess, hidden));
        session.reset();

        assert!(session.rounds().is_empty());
        assert_eq!(session.candidates().len(), answer_words.len());
    }

    #[test]
    fn dedicated_thread_pool_config() {
        let (all_words, answer_words) = setup();
        let config = SolverConfig {
            threads: Some(2),
            batch_size: 2,
            ..SolverConfig::default()
        };
        let solver = Solver::new(config, &all_words, &answer_words).unwrap();
        assert_eq!(solver.scorer().batch_size(), 2);
        assert!(solver.new_game().suggest().is_ok());
    }
}
