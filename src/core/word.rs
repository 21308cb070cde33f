//! Vocabulary word representation
//!
//! A Word stores its text, a per-letter count table, and the rule list that
//! describes the word to the partition simulator.

use super::Rule;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Longest word accepted into the vocabulary
pub const MAX_WORD_LEN: usize = 10;

/// A lowercase vocabulary word with its self-describing rules
///
/// The rule list holds one progressively stricter non-exact occurrence rule
/// per letter position, then a start rule and an end rule. Splitting a pool
/// by these rules in order leaves the word in a bucket shared only with words
/// that hold at least its letters and the same first and last letter.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letter_counts: [u8; 26],
    rules: Vec<Rule>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must be at most {MAX_WORD_LEN} letters, got {0}")]
    TooLong(usize),
    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, longer than
    /// [`MAX_WORD_LEN`], or contains anything but ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use diffle_solver::core::Word;
    ///
    /// let word = Word::new("Fable").unwrap();
    /// assert_eq!(word.text(), "fable");
    /// assert_eq!(word.rules().len(), 7);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("overlengthy").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        if text.len() > MAX_WORD_LEN {
            return Err(WordError::TooLong(text.len()));
        }

        let mut letter_counts = [0u8; 26];
        let mut rules = Vec::with_capacity(text.len() + 2);
        for letter in text.bytes() {
            let slot = &mut letter_counts[usize::from(letter - b'a')];
            *slot += 1;
            rules.push(Rule::Occurrence {
                letter,
                count: *slot,
                exact: false,
            });
        }

        let bytes = text.as_bytes();
        rules.push(Rule::Start(bytes[0]));
        rules.push(Rule::End(bytes[bytes.len() - 1]));

        Ok(Self {
            text,
            letter_counts,
            rules,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false, construction rejects empty text
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// How many times `letter` occurs in the word
    ///
    /// Returns 0 for anything outside `a..=z`.
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.letter_counts[usize::from(letter - b'a')]
        } else {
            0
        }
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> u8 {
        self.bytes()[0]
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> u8 {
        self.bytes()[self.len() - 1]
    }

    /// The rules this word reveals about itself, in split order
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
