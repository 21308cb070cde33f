//! Display functions for command results

use super::formatters::{create_progress_bar, format_score, render_feedback, tag_symbols};
use crate::feedback::format_feedback;
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Word;
use crate::solver::minimax::Selection;
use crate::solver::{Round, Session};
use colored::Colorize;
use std::time::Duration;

/// Print a suggested guess, with scoring time when given
pub fn print_suggestion(selection: &Selection<'_>, elapsed: Option<Duration>) {
    println!(
        "\n📊 Suggested guess: {}",
        selection.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("   Score:            {}", format_score(selection.score));
    if let Some(elapsed) = elapsed {
        println!("   Scored in:        {:.1} ms", elapsed.as_secs_f64() * 1000.0);
    }
    println!();
}

/// List the candidates when there are at most `limit` of them
pub fn print_candidates(candidates: &[&Word], limit: usize) {
    if candidates.len() > limit {
        return;
    }
    println!("Remaining candidates:");
    for candidate in candidates {
        println!("  • {}", candidate.text().to_uppercase());
    }
    println!();
}

/// Print the effect of one applied round
pub fn print_round_summary(round: &Round<'_>, verbose: bool) {
    println!(
        "\n{} {}  {} → {}",
        "Applied:".bright_cyan(),
        render_feedback(&round.feedback),
        round.before,
        round.after.to_string().bright_yellow()
    );

    if verbose {
        let rules: Vec<String> = round.rules.iter().map(ToString::to_string).collect();
        println!("  Feedback: {}", format_feedback(&round.feedback).bright_black());
        println!("  Rules:    {}", rules.join(" ").bright_black());
    }
    println!();
}

/// Celebration banner for an interactive win
pub fn print_victory(session: &Session<'_, '_>, winner: &Word) {
    let guesses = session.rounds().len() + 1;
    let letters = session.letters_used() + winner.len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  D I F F L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solved {} in {} {} using {} letters",
        winner.text().to_uppercase().bright_white().bold(),
        guesses.to_string().bright_cyan().bold(),
        if guesses == 1 { "guess" } else { "guesses" },
        letters.to_string().bright_cyan().bold()
    );

    println!("\n  Guess history:");
    for (i, round) in session.rounds().iter().enumerate() {
        println!(
            "    {}. {}  {}",
            (i + 1).to_string().bright_black(),
            render_feedback(&round.feedback),
            format_feedback(&round.feedback).bright_black()
        );
    }
    println!(
        "    {}. {}",
        guesses.to_string().bright_black(),
        winner.text().to_uppercase().bright_green().bold()
    );

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nRound {}: {}  {}",
            i + 1,
            render_feedback(&step.feedback),
            step.feedback
                .iter()
                .map(|entry| tag_symbols(entry.tags))
                .collect::<Vec<_>>()
                .join(" ")
                .bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {}", format_score(step.score));
            println!(
                "  Scored in:  {:.1} ms",
                step.elapsed.as_secs_f64() * 1000.0
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses using {} letters!",
                result.steps.len(),
                result.letters_used()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!("   Score:       {}", format_score(result.score));
    println!("   Buckets:     {}", result.buckets.len());
    println!("   Rules:       {}", result.rules.join(" ").bright_black());

    println!("\n📈 {}", "Bucket sizes:".bright_cyan().bold());
    let largest = result.buckets.first().copied().unwrap_or(0);
    for &size in result.buckets.iter().take(10) {
        println!(
            "   {} {size:4}",
            create_progress_bar(size, largest, 40).green()
        );
    }
    if result.buckets.len() > 10 {
        println!("   … {} more", result.buckets.len() - 10);
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Words tested:     {} ({} solved)",
        result.total_words, result.solved
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average letters:  {}",
        format!("{:.2}", result.average_letters)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(count, result.total_words, 40);
        println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.worst_words.is_empty() {
        println!("\n🐢 {}", "Hardest words:".bright_cyan().bold());
        for (word, guesses) in &result.worst_words {
            println!("   {} in {guesses}", word.to_uppercase());
        }
    }
}
