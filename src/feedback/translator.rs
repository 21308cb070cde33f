//! Feedback to rule translation
//!
//! Turns one round of per-letter annotations into the rules the candidate
//! filter applies. Tag sets are trusted: a letter that is both `absent` and
//! positively tagged gives unspecified rules.

use crate::core::{LetterFeedback, Rule, SequencePattern, Tag};
use rustc_hash::FxHashMap;

/// Running occurrence count for one letter
#[derive(Debug, Default, Clone, Copy)]
struct LetterTally {
    count: u8,
    finalized: bool,
}

/// Collects matched runs into a sequence pattern
#[derive(Debug, Default)]
struct SequenceBuilder {
    fragments: Vec<String>,
    open: Option<String>,
    anchored_start: bool,
    anchored_end: bool,
}

impl SequenceBuilder {
    /// Close the open run and start a new one with `letter`
    fn open(&mut self, letter: u8, starts_word: bool) {
        self.close();
        if starts_word && self.fragments.is_empty() {
            self.anchored_start = true;
        }
        self.open = Some(char::from(letter).to_string());
    }

    fn extend(&mut self, letter: u8) {
        self.open
            .get_or_insert_with(String::new)
            .push(char::from(letter));
    }

    fn close(&mut self) {
        if let Some(fragment) = self.open.take() {
            self.fragments.push(fragment);
        }
    }

    fn finish(mut self) -> Option<SequencePattern> {
        self.close();
        if self.fragments.is_empty() {
            None
        } else {
            Some(SequencePattern::new(
                self.fragments,
                self.anchored_start,
                self.anchored_end,
            ))
        }
    }
}

/// Translate one guess's feedback into rules
///
/// Rules come out as start/end anchors in feedback order, then one occurrence
/// rule per distinct letter in first-seen order, then at most one sequence
/// rule.
///
/// - `absent` fixes the letter's count at what has been seen so far
/// - `head` opens a new run; `start` or `end` without `tail` does the same
/// - `tail` extends the open run
/// - `present` adds nothing beyond the occurrence count
///
/// Without an `end` tag the sequence may be followed by further letters.
/// Occurrence counts saturate at `u8::MAX`.
///
/// # Examples
/// ```
/// use diffle_solver::core::{LetterFeedback, Rule, Tag, Word};
/// use diffle_solver::feedback::translate;
///
/// let feedback = [
///     LetterFeedback::new(b'c', [Tag::Start]),
///     LetterFeedback::new(b'a', [Tag::Tail]),
///     LetterFeedback::new(b't', [Tag::End]),
/// ];
/// let rules = translate(&feedback);
///
/// assert_eq!(rules[0], Rule::Start(b'c'));
/// assert_eq!(rules[1], Rule::End(b't'));
/// assert!(rules.iter().all(|r| r.matches(&Word::new("cart").unwrap())));
/// assert!(!rules.iter().all(|r| r.matches(&Word::new("cats").unwrap())));
/// ```
#[must_use]
pub fn translate(feedback: &[LetterFeedback]) -> Vec<Rule> {
    let mut anchors = Vec::new();
    let mut tallies: FxHashMap<u8, LetterTally> = FxHashMap::default();
    let mut seen_order: Vec<u8> = Vec::new();
    let mut sequence = SequenceBuilder::default();

    for &LetterFeedback { letter, tags } in feedback {
        let tally = tallies.entry(letter).or_insert_with(|| {
            seen_order.push(letter);
            LetterTally::default()
        });

        if tags.contains(Tag::Absent) {
            tally.finalized = true;
            sequence.close();
            continue;
        }
        tally.count = tally.count.saturating_add(1);

        let starts_word = tags.contains(Tag::Start);
        if starts_word {
            anchors.push(Rule::Start(letter));
        }
        if tags.contains(Tag::End) {
            anchors.push(Rule::End(letter));
            sequence.anchored_end = true;
        }

        if tags.contains(Tag::Tail) {
            sequence.extend(letter);
        } else if tags.contains(Tag::Head) || starts_word || tags.contains(Tag::End) {
            sequence.open(letter, starts_word);
        } else {
            // Present, or untagged: not part of any run
            sequence.close();
        }
    }

    let mut rules = anchors;
    rules.extend(seen_order.iter().map(|letter| {
        let tally = tallies[letter];
        Rule::Occurrence {
            letter: *letter,
            count: tally.count,
            exact: tally.finalized,
        }
    }));
    if let Some(pattern) = sequence.finish() {
        rules.push(Rule::Sequence(pattern));
    }
    rules
}
