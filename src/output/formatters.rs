//! Formatting utilities for terminal output

use crate::core::{Feedback, Judgment, KEYBOARD_ROWS, KeyHints, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, judgment: Option<Judgment>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match judgment {
        Some(Judgment::Correct) => text.black().on_green().bold(),
        Some(Judgment::Present) => text.black().on_yellow().bold(),
        Some(Judgment::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a judged guess as a row of colored tiles
#[must_use]
pub fn guess_tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.judgments())
        .map(|(letter, &judgment)| letter_tile(letter, Some(judgment)).to_string())
        .collect()
}

/// Render the on-screen keyboard, one row per line
#[must_use]
pub fn keyboard_rows(hints: &KeyHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| letter_tile(letter, hints.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Score display, e.g. `2/6`
#[must_use]
pub fn score(attempts: usize, max: usize) -> String {
    format!("{attempts}/{max}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tiles_without_colors() {
        colored::control::set_override(false);
        assert_eq!(letter_tile('a', None).to_string(), " A ");
        assert_eq!(letter_tile('b', Some(Judgment::Correct)).to_string(), " B ");
    }

    #[test]
    fn guess_tiles_follow_guess_letters() {
        colored::control::set_override(false);
        let guess = Word::new("trace").unwrap();
        let secret = Word::new("crane").unwrap();
        let feedback = Feedback::evaluate(&guess, &secret);
        assert_eq!(guess_tiles(&guess, &feedback), " T  R  A  C  E ");
    }

    #[test]
    fn keyboard_has_three_indented_rows() {
        colored::control::set_override(false);
        let rows = keyboard_rows(&KeyHints::new());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" Q "));
        assert!(rows[1].starts_with("   A "));
        assert!(rows[2].starts_with("     Z "));
    }

    #[test]
    fn score_format() {
        assert_eq!(score(0, 6), "0/6");
        assert_eq!(score(2, 6), "2/6");
    }
}
