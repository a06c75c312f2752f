//! Simple line-mode play
//!
//! Text-based game without the TUI: one guess per line on stdin.

use crate::core::WORD_LENGTH;
use crate::game::{MAX_GUESSES, Session};
use crate::output::{print_outcome, print_rejection, print_round};
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewRound,
    Guess(String),
}

impl LineCommand {
    /// Interpret one line; `None` for a blank line
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => None,
            ":q" | ":quit" | ":exit" => Some(Self::Quit),
            ":n" | ":new" => Some(Self::NewRound),
            _ => Some(Self::Guess(line.to_string())),
        }
    }
}

/// Run the line-mode game on stdin
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, stdin.lock())
}

/// Run the line-mode game on any line source
///
/// # Errors
///
/// Returns an error if reading `input` or flushing stdout fails.
pub fn run_simple_with<R: Rng, I: BufRead>(session: &mut Session<R>, input: I) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║          Word Guess - Line Mode      ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Guess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries.");
    println!("Commands: ':new' for a new word, ':quit' to exit\n");

    let mut lines = input.lines();
    loop {
        if session.round().is_over() {
            prompt("Play again? (yes/no)")?;
            let Some(answer) = lines.next().transpose()? else {
                break;
            };
            if matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
                session.new_round();
                println!("\n🔄 New word picked!");
            } else {
                break;
            }
        }

        prompt(&format!("Guess {}", session.round().attempts() + 1))?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match LineCommand::parse(&line) {
            None => {}
            Some(LineCommand::Quit) => break,
            Some(LineCommand::NewRound) => {
                session.new_round();
                println!("\n🔄 New word picked!");
            }
            Some(LineCommand::Guess(text)) => match session.submit_text(&text) {
                Ok(submission) => {
                    print_round(session.round());
                    if let Some(outcome) = &submission.outcome {
                        print_outcome(outcome);
                    }
                }
                Err(reason) => print_rejection(&reason),
            },
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}: ");
    io::stdout().flush()
}
