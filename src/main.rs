//! Diffle Solver - CLI
//!
//! Worst-case minimax solver for Diffle with interactive, self-play and
//! benchmark modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use diffle_solver::{
    commands::{analyze_word, run_benchmark, run_play, select_targets, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{DEFAULT_BATCH_SIZE, SelectionPolicy, Solver, SolverConfig},
    wordlists::{
        SAMPLE_ALLOWED, SAMPLE_ANSWERS,
        loader::{include_answers, load_allowed, load_answers, words_from_slice},
    },
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "diffle_solver",
    about = "Diffle solver that minimizes the worst-case number of remaining answers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File of allowed guesses (comma or newline separated)
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// File of possible answers (comma or newline separated)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Guess pool: exploit, explore, or dual (default)
    #[arg(short, long, global = true, default_value = "dual")]
    policy: SelectionPolicy,

    /// Guesses scored per parallel task
    #[arg(long, global = true, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Scoring threads (default: one per hardware thread)
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Show candidate counts, rules and scoring time
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Solve a specific hidden word by self-play
    Solve {
        /// The hidden word
        word: String,
    },

    /// Show how a guess splits the answer list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of answers to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Shuffle the answers with this seed first
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load word lists from the given files, falling back to the built-in sample
///
/// Returns (`allowed`, `answers`). Answers are added to the allowed list when
/// missing so every answer can be guessed.
fn load_wordlists(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let answers = match &cli.answers {
        Some(path) => load_answers(path)?,
        None => words_from_slice(SAMPLE_ANSWERS),
    };
    let mut allowed = match &cli.allowed {
        Some(path) => load_allowed(path)?,
        None => words_from_slice(SAMPLE_ALLOWED),
    };

    include_answers(&mut allowed, &answers);

    if cli.verbose {
        println!(
            "{}",
            format!(
                "Loaded {} allowed words and {} answers",
                allowed.len(),
                answers.len()
            )
            .bright_black()
        );
    }
    Ok((allowed, answers))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (all_words, answer_words) = load_wordlists(&cli)?;
    let config = SolverConfig {
        policy: cli.policy,
        batch_size: cli.batch_size,
        threads: cli.threads,
    };
    let solver = Solver::new(config, &all_words, &answer_words)
        .context("failed to set up the solver")?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&solver, cli.verbose),
        Commands::Solve { word } => {
            let result = solve_word(&solver, &word)?;
            print_solve_result(&result, cli.verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&solver, &word)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            let targets = select_targets(&answer_words, count, seed);
            match seed {
                Some(seed) => println!(
                    "Running benchmark on {} words (seed {seed}, policy {})...",
                    targets.len(),
                    solver.policy()
                ),
                None => println!(
                    "Running benchmark on {} words (policy {})...",
                    targets.len(),
                    solver.policy()
                ),
            }

            let result = run_benchmark(&solver, &targets, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
