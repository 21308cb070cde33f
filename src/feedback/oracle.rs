//! Game-side feedback for self-play
//!
//! Produces the annotations the game would show for a guess when the hidden
//! word is known. The guess is aligned to the hidden word along a longest
//! common subsequence; matched letters form the runs, the rest are `present`
//! while unmatched copies remain in the hidden word and `absent` after that.

use crate::core::{Feedback, LetterFeedback, MAX_WORD_LEN, Tag, TagSet, Word};

/// Annotate `guess` as if `hidden` were the answer
///
/// # Examples
/// ```
/// use diffle_solver::core::{Tag, Word};
/// use diffle_solver::feedback::feedback_for;
///
/// let guess = Word::new("cot").unwrap();
/// let hidden = Word::new("cat").unwrap();
/// let feedback = feedback_for(&guess, &hidden);
///
/// assert!(feedback[0].tags.contains(Tag::Start));
/// assert!(feedback[1].tags.contains(Tag::Absent));
/// assert!(feedback[2].tags.contains(Tag::End));
/// ```
#[must_use]
pub fn feedback_for(guess: &Word, hidden: &Word) -> Feedback {
    let g = guess.bytes();
    let h = hidden.bytes();
    let matched = align(g, h);

    let mut spare = [0u8; 26];
    for letter in b'a'..=b'z' {
        let used = g
            .iter()
            .zip(&matched)
            .filter(|&(&l, m)| l == letter && m.is_some())
            .count() as u8;
        spare[usize::from(letter - b'a')] = hidden.count_of(letter) - used;
    }

    let last = h.len() - 1;
    g.iter()
        .enumerate()
        .map(|(i, &letter)| {
            let mut tags = TagSet::EMPTY;
            match matched[i] {
                Some(j) => {
                    let continues = i > 0 && j > 0 && matched[i - 1] == Some(j - 1);
                    tags.insert(if continues { Tag::Tail } else { Tag::Head });
                    if j == 0 {
                        tags.insert(Tag::Start);
                    }
                    if j == last {
                        tags.insert(Tag::End);
                    }
                }
                None => {
                    let slot = &mut spare[usize::from(letter - b'a')];
                    if *slot > 0 {
                        *slot -= 1;
                        tags.insert(Tag::Present);
                    } else {
                        tags.insert(Tag::Absent);
                    }
                }
            }
            LetterFeedback { letter, tags }
        })
        .collect()
}

/// Hidden-word position matched to each guess letter
///
/// Walks the LCS table from the front, taking a match whenever it stays on a
/// longest alignment.
fn align(g: &[u8], h: &[u8]) -> Vec<Option<usize>> {
    const N: usize = MAX_WORD_LEN + 1;
    let mut lcs = [[0u8; N]; N];
    for i in (0..g.len()).rev() {
        for j in (0..h.len()).rev() {
            lcs[i][j] = if g[i] == h[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut matched = vec![None; g.len()];
    let (mut i, mut j) = (0, 0);
    while i < g.len() && j < h.len() {
        if g[i] == h[j] && lcs[i][j] == lcs[i + 1][j + 1] + 1 {
            matched[i] = Some(j);
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    matched
}

/// The guess is the hidden word
#[must_use]
pub fn is_win(guess: &Word, hidden: &Word) -> bool {
    guess == hidden
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::translate;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn tags_of(guess: &str, hidden: &str) -> Vec<TagSet> {
        feedback_for(&w(guess), &w(hidden))
            .into_iter()
            .map(|f| f.tags)
            .collect()
    }

    #[test]
    fn exact_guess_is_one_anchored_run() {
        assert_eq!(
            tags_of("cat", "cat"),
            vec![
                TagSet::from([Tag::Head, Tag::Start]),
                TagSet::from([Tag::Tail]),
                TagSet::from([Tag::Tail, Tag::End]),
            ]
        );
    }

    #[test]
    fn single_letter_word() {
        assert_eq!(
            tags_of("a", "a"),
            vec![TagSet::from([Tag::Head, Tag::Start, Tag::End])]
        );
    }

    #[test]
    fn unrelated_guess_is_all_absent() {
        assert!(
            tags_of("dog", "cat")
                .iter()
                .all(|tags| *tags == TagSet::from([Tag::Absent]))
        );
    }

    #[test]
    fn gaps_open_new_runs() {
        // "cut" against "cart": c and t match with a gap between
        assert_eq!(
            tags_of("cut", "cart"),
            vec![
                TagSet::from([Tag::Head, Tag::Start]),
                TagSet::from([Tag::Absent]),
                TagSet::from([Tag::Head, Tag::End]),
            ]
        );
    }

    #[test]
    fn out_of_order_letters_are_present() {
        // Only one of "t", "a" can be aligned with "at" read backwards
        let tags = tags_of("ta", "at");
        assert_eq!(tags.iter().filter(|t| t.contains(Tag::Present)).count(), 1);
        assert!(tags.iter().all(|t| !t.contains(Tag::Absent)));
    }

    #[test]
    fn extra_copies_are_absent() {
        let tags = tags_of("eee", "pea");
        let absent = tags.iter().filter(|t| t.contains(Tag::Absent)).count();
        assert_eq!(absent, 2);
    }

    #[test]
    fn feedback_never_rejects_the_hidden_word() {
        let pool = ["cat", "cart", "act", "tac", "attic", "tact", "scatter", "a"];
        for guess in pool {
            for hidden in pool {
                let rules = translate(&feedback_for(&w(guess), &w(hidden)));
                let hidden_word = w(hidden);
                assert!(
                    rules.iter().all(|rule| rule.matches(&hidden_word)),
                    "guess {guess} rejected hidden {hidden}"
                );
            }
        }
    }

    #[test]
    fn win_detection() {
        assert!(is_win(&w("cat"), &w("cat")));
        assert!(!is_win(&w("cat"), &w("cart")));
    }
}
