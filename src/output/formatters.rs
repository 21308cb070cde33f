//! Formatting utilities for terminal output

use crate::core::{LetterFeedback, Tag, TagSet};
use crate::solver::Score;
use colored::{ColoredString, Colorize};

/// Compact marker for a tag set, one symbol per tag
///
/// `^` start, `$` end, `[` head, `-` tail, `?` present, `x` absent.
#[must_use]
pub fn tag_symbols(tags: TagSet) -> String {
    tags.iter()
        .map(|tag| match tag {
            Tag::Absent => 'x',
            Tag::Start => '^',
            Tag::End => '$',
            Tag::Head => '[',
            Tag::Tail => '-',
            Tag::Present => '?',
        })
        .collect()
}

/// Color one guessed letter by its tags
#[must_use]
pub fn styled_letter(entry: &LetterFeedback) -> ColoredString {
    let letter = char::from(entry.letter).to_ascii_uppercase().to_string();
    let tags = entry.tags;

    if tags.contains(Tag::Absent) {
        letter.bright_black()
    } else if tags.contains(Tag::Start) || tags.contains(Tag::End) {
        letter.bright_green().bold().underline()
    } else if tags.contains(Tag::Head) || tags.contains(Tag::Tail) {
        letter.green().bold()
    } else {
        letter.yellow()
    }
}

/// Colored rendering of a whole guess
#[must_use]
pub fn render_feedback(feedback: &[LetterFeedback]) -> String {
    feedback
        .iter()
        .map(|entry| styled_letter(entry).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable score
#[must_use]
pub fn format_score(score: Score) -> String {
    let letters = if score.length == 1 { "letter" } else { "letters" };
    format!(
        "worst case {} remaining, {} {letters}",
        score.worst_case, score.length
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_symbols_follow_tag_order() {
        assert_eq!(tag_symbols(TagSet::from([Tag::Tail, Tag::Start])), "^-");
        assert_eq!(tag_symbols(TagSet::from([Tag::Absent])), "x");
        assert_eq!(tag_symbols(TagSet::EMPTY), "");
    }

    #[test]
    fn score_wording() {
        assert_eq!(
            format_score(Score::new(3, 5)),
            "worst case 3 remaining, 5 letters"
        );
        assert_eq!(
            format_score(Score::new(0, 1)),
            "worst case 0 remaining, 1 letter"
        );
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5, 0, 4), "░░░░");
    }
}
