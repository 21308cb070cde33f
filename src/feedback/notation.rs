//! Text notation for feedback typed at the terminal
//!
//! One whitespace-separated token per guessed letter, `letter[:tag[+tag...]]`:
//!
//! ```text
//! c:start a:tail x t:end
//! ```
//!
//! A bare letter is shorthand for `absent`.

use crate::core::{Feedback, LetterFeedback, Tag, TagSet, Word};
use thiserror::Error;

/// Errors from parsing feedback notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("no feedback given")]
    Empty,
    #[error("expected a single letter, got '{0}'")]
    InvalidLetter(String),
    #[error("unknown tag '{0}' (expected absent, start, end, head, tail or present)")]
    UnknownTag(String),
    #[error("feedback has {got} letters but the guess has {expected}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("letter {position} is '{found}' but the guess has '{expected}'")]
    LetterMismatch {
        position: usize,
        expected: char,
        found: char,
    },
}

/// Parse feedback notation
///
/// # Errors
/// Returns `NotationError` for an empty input, a token that does not start
/// with a single letter, or an unknown tag.
///
/// # Examples
/// ```
/// use diffle_solver::core::Tag;
/// use diffle_solver::feedback::parse_feedback;
///
/// let feedback = parse_feedback("c:start+head a:tail x t:end").unwrap();
/// assert_eq!(feedback.len(), 4);
/// assert!(feedback[0].tags.contains(Tag::Head));
/// assert!(feedback[2].tags.contains(Tag::Absent));
/// ```
pub fn parse_feedback(input: &str) -> Result<Feedback, NotationError> {
    let feedback = input
        .split_whitespace()
        .map(parse_token)
        .collect::<Result<Feedback, _>>()?;

    if feedback.is_empty() {
        return Err(NotationError::Empty);
    }
    Ok(feedback)
}

/// Parse feedback and check that it lines up with `guess`
///
/// # Errors
/// Everything [`parse_feedback`] rejects, plus a length or letter mismatch
/// against the guess.
pub fn parse_for_guess(input: &str, guess: &Word) -> Result<Feedback, NotationError> {
    let feedback = parse_feedback(input)?;

    if feedback.len() != guess.len() {
        return Err(NotationError::LengthMismatch {
            expected: guess.len(),
            got: feedback.len(),
        });
    }

    for (position, (entry, &expected)) in feedback.iter().zip(guess.bytes()).enumerate() {
        if entry.letter != expected {
            return Err(NotationError::LetterMismatch {
                position: position + 1,
                expected: char::from(expected),
                found: char::from(entry.letter),
            });
        }
    }
    Ok(feedback)
}

/// Render feedback back into notation
#[must_use]
pub fn format_feedback(feedback: &[LetterFeedback]) -> String {
    feedback
        .iter()
        .map(|entry| {
            let letter = char::from(entry.letter);
            if entry.tags == TagSet::from([Tag::Absent]) {
                letter.to_string()
            } else {
                format!("{letter}:{}", entry.tags)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_token(token: &str) -> Result<LetterFeedback, NotationError> {
    let (letter_part, tag_part) = match token.split_once(':') {
        Some((letter, tags)) => (letter, Some(tags)),
        None => (token, None),
    };

    let letter = match letter_part.as_bytes() {
        [letter] if letter.is_ascii_alphabetic() => letter.to_ascii_lowercase(),
        _ => return Err(NotationError::InvalidLetter(letter_part.to_string())),
    };

    let tags = match tag_part {
        None => TagSet::from([Tag::Absent]),
        Some(tags) => tags
            .split('+')
            .map(|name| {
                name.parse::<Tag>()
                    .map_err(NotationError::UnknownTag)
            })
            .collect::<Result<TagSet, _>>()?,
    };

    Ok(LetterFeedback { letter, tags })
}
