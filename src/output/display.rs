//! Display functions for rounds and command results

use super::formatters::{guess_tiles, keyboard_rows, score};
use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::game::{MAX_GUESSES, Outcome, RejectReason, Round};
use colored::Colorize;

/// Print the board so far, the score and the keyboard hints
pub fn print_round(round: &Round) {
    println!("\n{}", "─".repeat(30).cyan());
    for record in round.history() {
        println!("  {}", guess_tiles(&record.guess, &record.feedback));
    }
    for _ in round.attempts()..MAX_GUESSES {
        println!("  {}", " _ ".repeat(WORD_LENGTH).bright_black());
    }
    println!("{}", "─".repeat(30).cyan());
    println!("  Score: {}", score(round.attempts(), MAX_GUESSES).bold());
    println!();
    for row in keyboard_rows(round.key_hints()) {
        println!("  {row}");
    }
    println!();
}

/// Print the end-of-round message
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Won { guesses } => println!(
            "{}",
            format!("🎉 Nice! You got it in {guesses}/{MAX_GUESSES} guesses.")
                .green()
                .bold()
        ),
        Outcome::Lost { secret } => println!(
            "{}",
            format!(
                "❌ Out of guesses! The word was: {}",
                secret.text().to_uppercase()
            )
            .red()
            .bold()
        ),
    }
}

/// Print why a guess was refused
pub fn print_rejection(reason: &RejectReason) {
    println!("{} {}", "✗".red().bold(), reason.to_string().red());
}

/// Print the feedback for a single guess/secret pair
pub fn print_score_result(guess: &Word, secret: &Word, feedback: &Feedback) {
    println!(
        "\n{} vs {}",
        guess.text().to_uppercase().bright_white().bold(),
        secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("  {}", guess_tiles(guess, feedback));
    println!("  {}", feedback.to_emoji());
    for (letter, judgment) in guess.text().chars().zip(feedback.judgments()) {
        println!("  {} → {judgment}", letter.to_ascii_uppercase());
    }
}
