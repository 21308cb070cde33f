//! Word list loading utilities
//!
//! List files hold words separated by commas, newlines, or both.

use crate::core::{MAX_WORD_LEN, Word};
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load the guess vocabulary from a file
///
/// Entries longer than the game allows, or with non-letter characters, are
/// skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use diffle_solver::wordlists::loader::load_allowed;
///
/// let words = load_allowed("data/allowed.csv").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_allowed<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    Ok(entries(&content)
        .filter(|entry| entry.len() <= MAX_WORD_LEN)
        .filter_map(|entry| Word::new(entry).ok())
        .collect())
}

/// Load the answer list from a file
///
/// Unlike [`load_allowed`], every entry must be a valid word.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds an invalid entry.
pub fn load_answers<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read answer list {}", path.display()))?;

    entries(&content)
        .map(|entry| {
            Word::new(entry).with_context(|| {
                format!("invalid answer '{entry}' in {}", path.display())
            })
        })
        .collect()
}

/// Convert an in-memory list to words, skipping invalid entries
///
/// # Examples
/// ```
/// use diffle_solver::wordlists::loader::words_from_slice;
/// use diffle_solver::wordlists::SAMPLE_ANSWERS;
///
/// let words = words_from_slice(SAMPLE_ANSWERS);
/// assert_eq!(words.len(), SAMPLE_ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Append the answers missing from `allowed`, keeping list order
pub fn include_answers(allowed: &mut Vec<Word>, answers: &[Word]) {
    let mut known: FxHashSet<String> = allowed.iter().map(|w| w.text().to_string()).collect();
    for answer in answers {
        if known.insert(answer.text().to_string()) {
            allowed.push(answer.clone());
        }
    }
}

fn entries(content: &str) -> impl Iterator<Item = &str> {
    content
        .split([',', '\n', '\r'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_list(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "diffle_solver_{}_{name}",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["cat", "toolongword", "c4t", "", "Dog"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "dog"]);
    }

    #[test]
    fn include_answers_appends_only_missing() {
        let mut allowed = words_from_slice(&["cat", "act"]);
        let answers = words_from_slice(&["act", "tac", "cart", "tac"]);

        include_answers(&mut allowed, &answers);

        let texts: Vec<&str> = allowed.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "act", "tac", "cart"]);
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[]).is_empty());
    }

    #[test]
    fn allowed_reads_csv_row_and_lines() {
        let path = temp_list("allowed.csv", "cat,cart, act\nstrawberries\nx-ray,\n\ntac\r\n");
        let words = load_allowed(&path).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "cart", "act", "tac"]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn answers_reject_invalid_entry() {
        let path = temp_list("answers_bad.csv", "cat,x-ray");
        let error = load_answers(&path).unwrap_err();
        assert!(format!("{error:#}").contains("x-ray"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn answers_load_valid_file() {
        let path = temp_list("answers.csv", "cat\ncart\n");
        assert_eq!(load_answers(&path).unwrap().len(), 2);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_names_path() {
        let error = load_allowed("/nonexistent/diffle/list.csv").unwrap_err();
        assert!(error.to_string().contains("/nonexistent/diffle/list.csv"));
    }
}
