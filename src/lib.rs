//! Diffle Solver
//!
//! A worst-case minimax solver for Diffle, the word game where guesses may be
//! any length and every guessed letter is annotated with how it lines up
//! against the hidden word.
//!
//! # Quick Start
//!
//! ```rust
//! use diffle_solver::feedback::feedback_for;
//! use diffle_solver::solver::{Solver, SolverConfig};
//! use diffle_solver::wordlists::loader::words_from_slice;
//!
//! let all_words = words_from_slice(&["cat", "cart", "act", "tac", "at"]);
//! let answers = words_from_slice(&["cat", "cart", "act"]);
//! let solver = Solver::new(SolverConfig::default(), &all_words, &answers).unwrap();
//!
//! let mut session = solver.new_game();
//! let guess = session.suggest().unwrap().word;
//! let hidden = &answers[1];
//! if guess != hidden {
//!     session.apply(guess, feedback_for(guess, hidden));
//! }
//! assert!(session.candidates().contains(&hidden));
//! ```

// Core domain types
pub mod core;

// Feedback translation and notation
pub mod feedback;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
