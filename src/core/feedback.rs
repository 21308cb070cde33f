//! Per-letter feedback annotations
//!
//! After each guess the game annotates every letter of the guess with a set
//! of tags. The annotations arrive left to right, aligned with the guess.

use std::fmt;
use std::str::FromStr;

/// A single annotation the game can attach to a guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// This occurrence is not in the hidden word
    Absent,
    /// Matched to the first letter of the hidden word
    Start,
    /// Matched to the last letter of the hidden word
    End,
    /// Opens a run of matched letters
    Head,
    /// Continues the run opened by the previous letter
    Tail,
    /// In the hidden word but outside the matched ordering
    Present,
}

impl Tag {
    pub const ALL: [Self; 6] = [
        Self::Absent,
        Self::Start,
        Self::End,
        Self::Head,
        Self::Tail,
        Self::Present,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Start => "start",
            Self::End => "end",
            Self::Head => "head",
            Self::Tail => "tail",
            Self::Present => "present",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| s.to_string())
    }
}

/// A set of tags, stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagSet(u8);

impl TagSet {
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub const fn contains(self, tag: Tag) -> bool {
        self.0 & tag.bit() != 0
    }

    #[must_use]
    pub const fn with(self, tag: Tag) -> Self {
        Self(self.0 | tag.bit())
    }

    pub fn insert(&mut self, tag: Tag) {
        self.0 |= tag.bit();
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Tags in declaration order
    pub fn iter(self) -> impl Iterator<Item = Tag> {
        Tag::ALL.into_iter().filter(move |tag| self.contains(*tag))
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl<const N: usize> From<[Tag; N]> for TagSet {
    fn from(tags: [Tag; N]) -> Self {
        tags.into_iter().collect()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Tag::name).collect();
        f.write_str(&names.join("+"))
    }
}

/// Annotation for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    pub letter: u8,
    pub tags: TagSet,
}

impl LetterFeedback {
    #[must_use]
    pub fn new(letter: u8, tags: impl Into<TagSet>) -> Self {
        Self {
            letter,
            tags: tags.into(),
        }
    }
}

/// Feedback for a whole guess, aligned with its letters
pub type Feedback = Vec<LetterFeedback>;
