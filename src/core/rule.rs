//! Constraint rules over vocabulary words
//!
//! A rule is one piece of information the game can reveal about the hidden
//! word. The same representation is used by the partition simulator (rules a
//! guess describes about itself) and by the candidate filter (rules learned
//! from feedback).

use super::Word;
use std::fmt;

/// A single constraint a word either satisfies or not
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The word holds `count` copies of `letter` (exactly, or at least)
    Occurrence { letter: u8, count: u8, exact: bool },
    /// The word begins with the letter
    Start(u8),
    /// The word ends with the letter
    End(u8),
    /// The word contains the fragments in order
    Sequence(SequencePattern),
}

impl Rule {
    /// Check whether `word` satisfies this rule
    ///
    /// # Examples
    /// ```
    /// use diffle_solver::core::{Rule, Word};
    ///
    /// let word = Word::new("llama").unwrap();
    /// assert!(Rule::Occurrence { letter: b'l', count: 2, exact: true }.matches(&word));
    /// assert!(Rule::Occurrence { letter: b'a', count: 1, exact: false }.matches(&word));
    /// assert!(!Rule::Start(b'a').matches(&word));
    /// assert!(Rule::End(b'a').matches(&word));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        match self {
            Self::Occurrence {
                letter,
                count,
                exact,
            } => {
                let actual = word.count_of(*letter);
                if *exact {
                    actual == *count
                } else {
                    actual >= *count
                }
            }
            Self::Start(letter) => word.first() == *letter,
            Self::End(letter) => word.last() == *letter,
            Self::Sequence(pattern) => pattern.matches(word.bytes()),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occurrence {
                letter,
                count,
                exact,
            } => {
                let op = if *exact { "=" } else { ">=" };
                write!(f, "{}{op}{count}", char::from(*letter))
            }
            Self::Start(letter) => write!(f, "^{}", char::from(*letter)),
            Self::End(letter) => write!(f, "{}$", char::from(*letter)),
            Self::Sequence(pattern) => write!(f, "{pattern}"),
        }
    }
}

/// Ordered fragments that must appear in a word
///
/// Each fragment is a run of directly adjacent letters. Consecutive fragments
/// are separated by zero or more letters. With `anchored_start` the first
/// fragment must open the word, with `anchored_end` the last fragment must
/// close it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequencePattern {
    fragments: Vec<String>,
    anchored_start: bool,
    anchored_end: bool,
}

impl SequencePattern {
    #[must_use]
    pub fn new(fragments: Vec<String>, anchored_start: bool, anchored_end: bool) -> Self {
        Self {
            fragments,
            anchored_start,
            anchored_end,
        }
    }

    /// Match against raw word bytes without backtracking
    ///
    /// Anchored fragments are pinned first, then the remaining fragments are
    /// placed at their leftmost position in order. Leftmost placement leaves
    /// the most room for later fragments, so a failed scan means no placement
    /// exists.
    ///
    /// # Examples
    /// ```
    /// use diffle_solver::core::SequencePattern;
    ///
    /// let pattern = SequencePattern::new(vec!["ca".into(), "t".into()], false, true);
    /// assert!(pattern.matches(b"cat"));
    /// assert!(pattern.matches(b"scarlet"));
    /// assert!(!pattern.matches(b"cats"));
    /// assert!(!pattern.matches(b"tac"));
    /// ```
    #[must_use]
    pub fn matches(&self, text: &[u8]) -> bool {
        let mut middle: &[String] = &self.fragments;
        let mut lo = 0;
        let mut hi = text.len();

        if self.anchored_start {
            let Some((first, rest)) = middle.split_first() else {
                return true;
            };
            if !text.starts_with(first.as_bytes()) {
                return false;
            }
            lo = first.len();
            middle = rest;
        }

        if self.anchored_end {
            match middle.split_last() {
                Some((last, rest)) => {
                    if !text[lo..].ends_with(last.as_bytes()) {
                        return false;
                    }
                    hi = text.len() - last.len();
                    middle = rest;
                }
                // The start fragment was also the last one
                None if self.anchored_start => return lo == text.len(),
                None => return true,
            }
        }

        let mut cursor = lo;
        for fragment in middle {
            match find(&text[cursor..hi], fragment.as_bytes()) {
                Some(offset) => cursor += offset + fragment.len(),
                None => return false,
            }
        }
        true
    }
}

impl fmt::Display for SequencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.anchored_start {
            write!(f, "^")?;
        }
        write!(f, "{}", self.fragments.join("…"))?;
        if self.anchored_end {
            write!(f, "$")?;
        }
        Ok(())
    }
}

/// Leftmost position of `needle` inside `haystack`
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
