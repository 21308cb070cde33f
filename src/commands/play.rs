//! Interactive play mode
//!
//! Suggests a guess each round and reads the game's feedback back in text
//! notation.

use crate::core::{Feedback, Word};
use crate::feedback::parse_for_guess;
use crate::output::display::{
    print_candidates, print_round_summary, print_suggestion, print_victory,
};
use crate::solver::{Session, Solver, SolverError};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// What the player chose to do after a suggestion
enum Action<'a> {
    Feedback(&'a Word, Feedback),
    Win,
    Undo,
    NewGame,
    Quit,
}

/// Run the interactive mode
///
/// # Errors
///
/// Returns an error on an I/O failure reading input or a solver failure other
/// than running out of candidates.
pub fn run_play(solver: &Solver<'_>, verbose: bool) -> Result<()> {
    print_banner();

    let mut session = solver.new_game();

    loop {
        let started = Instant::now();
        let selection = match session.suggest() {
            Ok(selection) => selection,
            Err(SolverError::EmptyCandidateSet) => {
                println!(
                    "\n{}",
                    "❌ No candidates remain! Your feedback may be incorrect.".red()
                );
                println!("Type 'undo' to go back, or 'new' to start over.\n");
                match get_user_input("Command")?.to_lowercase().as_str() {
                    "undo" | "u" => undo(&mut session),
                    "new" | "n" => new_game(&mut session),
                    "quit" | "q" | "exit" => return Ok(()),
                    _ => {}
                }
                continue;
            }
            Err(error) => return Err(error.into()),
        };

        println!("{}", "─".repeat(60).cyan());
        println!(
            "Round {}: {} candidates remaining",
            session.round_number(),
            session.candidates().len()
        );
        println!("{}", "─".repeat(60).cyan());
        print_suggestion(&selection, verbose.then(|| started.elapsed()));
        print_candidates(session.candidates(), 10);

        match read_action(solver, &session, selection.word)? {
            Action::Feedback(guess, feedback) => {
                let round = session.apply(guess, feedback);
                print_round_summary(round, verbose);
            }
            Action::Win => {
                print_victory(&session, selection.word);
                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => new_game(&mut session),
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            Action::Undo => undo(&mut session),
            Action::NewGame => new_game(&mut session),
            Action::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Diffle Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest the guess that leaves the fewest answers in the worst case.");
    println!("After each guess, enter the feedback one letter at a time:\n");
    println!("  - letter:tag[+tag]  e.g. {}", "c:start+head a:tail t:end".bright_white());
    println!("  - tags: absent, start, end, head, tail, present");
    println!("  - a bare letter means absent");
    println!("  - type 'use <word>' first if you played a different word");
    println!("  - or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");
}

/// Read input until it forms a valid action for `suggested`
fn read_action<'a>(
    solver: &Solver<'a>,
    session: &Session<'_, 'a>,
    suggested: &'a Word,
) -> Result<Action<'a>> {
    let mut guess = suggested;

    loop {
        let input = get_user_input(&format!(
            "Feedback for {} (or command)",
            guess.text().to_uppercase().bright_yellow()
        ))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Action::Quit),
            "new" | "n" => return Ok(Action::NewGame),
            "undo" | "u" => return Ok(Action::Undo),
            "win" | "correct" | "solved" => return Ok(Action::Win),
            other => {
                if let Some(text) = other.strip_prefix("use ") {
                    match find_guess(solver, text.trim()) {
                        Some(word) if session.has_played(word) => {
                            println!("❌ '{}' was already played\n", word.text());
                        }
                        Some(word) => guess = word,
                        None => println!("❌ '{}' is not in the word list\n", text.trim()),
                    }
                    continue;
                }

                match parse_for_guess(&input, guess) {
                    Ok(feedback) => return Ok(Action::Feedback(guess, feedback)),
                    Err(error) => println!("❌ {error}\n"),
                }
            }
        }
    }
}

fn find_guess<'a>(solver: &Solver<'a>, text: &str) -> Option<&'a Word> {
    solver
        .vocabulary()
        .iter()
        .copied()
        .find(|word| word.text() == text)
}

fn undo(session: &mut Session<'_, '_>) {
    match session.undo() {
        Some(round) => println!(
            "✓ Undid {}! Back to round {}\n",
            round.guess.text().to_uppercase(),
            session.round_number()
        ),
        None => println!("Nothing to undo!\n"),
    }
}

fn new_game(session: &mut Session<'_, '_>) {
    session.reset();
    println!("\n🔄 New game started!\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
