//! Benchmark command
//!
//! Self-plays a sample of answers and reports guesses and letters used.

use super::solve::{MAX_ROUNDS, play_out};
use crate::core::Word;
use crate::solver::Solver;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub total_letters: usize,
    pub average_guesses: f64,
    pub average_letters: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Games per guess count
    pub distribution: BTreeMap<usize, usize>,
    /// Hardest words with their guess counts, worst first
    pub worst_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` answers to benchmark
///
/// With a seed the answers are shuffled reproducibly first, otherwise the
/// list order is kept.
#[must_use]
pub fn select_targets(answers: &[Word], count: usize, seed: Option<u64>) -> Vec<&Word> {
    let mut targets: Vec<&Word> = answers.iter().collect();
    if let Some(seed) = seed {
        targets.shuffle(&mut StdRng::seed_from_u64(seed));
    }
    targets.truncate(count);
    targets
}

/// Run the solver against every target word
///
/// # Errors
///
/// Returns an error if a game fails with a solver error or the progress bar
/// template is rejected.
pub fn run_benchmark(
    solver: &Solver<'_>,
    targets: &[&Word],
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut total_letters = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution = BTreeMap::new();
    let mut per_word = Vec::with_capacity(targets.len());

    for &hidden in targets {
        let steps = play_out(solver, hidden, MAX_ROUNDS)?;
        let guesses = steps.len();
        if steps.last().is_some_and(|step| step.guess == hidden.text()) {
            solved += 1;
        }

        total_guesses += guesses;
        total_letters += steps.iter().map(|step| step.guess.len()).sum::<usize>();
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
        per_word.push((hidden.text().to_string(), guesses));

        pb.set_message(format!("{} in {guesses}", hidden.text()));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();
    per_word.sort_by(|a, b| b.1.cmp(&a.1));
    per_word.truncate(5);

    let per_game = |total: usize| {
        if total_words == 0 {
            0.0
        } else {
            total as f64 / total_words as f64
        }
    };

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        total_letters,
        average_guesses: per_game(total_guesses),
        average_letters: per_game(total_letters),
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        worst_words: per_word,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
