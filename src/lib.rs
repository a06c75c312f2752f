//! Word Guess
//!
//! A word-guessing puzzle: find a hidden five-letter word in six attempts,
//! with per-letter feedback after each one.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Outcome, Round};
//! use wordle_game::wordlists::Vocabulary;
//!
//! let vocabulary = Vocabulary::load("crane\ntrace\n");
//! let mut round = Round::new(Word::new("crane").unwrap());
//!
//! for letter in "trace".chars() {
//!     round.stage_letter(letter);
//! }
//! let submission = round.submit(&vocabulary).unwrap();
//! println!("{}", submission.feedback.to_emoji());
//!
//! for letter in "crane".chars() {
//!     round.stage_letter(letter);
//! }
//! let submission = round.submit(&vocabulary).unwrap();
//! assert_eq!(submission.outcome, Some(Outcome::Won { guesses: 2 }));
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Word lists
pub mod wordlists;

// Persisted display preferences
pub mod settings;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
