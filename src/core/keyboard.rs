//! Cumulative keyboard hints
//!
//! Tracks, for every letter of the alphabet, the strongest judgment it has
//! received across all submitted guesses of a round.

use super::judgment::{Feedback, Judgment};
use super::word::Word;

const ALPHABET_SIZE: usize = 26;

/// Keyboard rows in on-screen order
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best judgment seen so far for each letter
///
/// Derived state: it can always be rebuilt from the guess history with
/// [`KeyHints::from_history`]. Hints only ever move up the
/// `Absent < Present < Correct` ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyHints([Option<Judgment>; ALPHABET_SIZE]);

impl KeyHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild hints from a full guess history
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Feedback)>,
    {
        let mut hints = Self::new();
        for (guess, feedback) in history {
            hints.record(guess, feedback);
        }
        hints
    }

    /// Fold one judged guess into the hints
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &judgment) in guess.letters().iter().zip(feedback.judgments()) {
            let Some(slot) = Self::index(letter).and_then(|i| self.0.get_mut(i)) else {
                continue;
            };
            *slot = Some(slot.map_or(judgment, |seen| seen.max(judgment)));
        }
    }

    /// Best judgment seen for `letter`, if it has been guessed at all
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Judgment> {
        u8::try_from(letter)
            .ok()
            .and_then(Self::index)
            .and_then(|i| self.0[i])
    }

    /// Iterate over `(letter, hint)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<Judgment>)> + '_ {
        (b'a'..=b'z').map(char::from).zip(self.0.iter().copied())
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_lowercase() - b'a'))
    }
}
