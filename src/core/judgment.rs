//! Per-letter feedback for a submitted guess
//!
//! Each position of a guess receives one [`Judgment`]:
//! - `Correct`: right letter in the right position
//! - `Present`: letter occurs elsewhere in the secret
//! - `Absent`: letter not in the secret (or all its occurrences already claimed)

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
///
/// Ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Judgment {
    Absent,
    Present,
    Correct,
}

impl Judgment {
    /// Emoji tile for this judgment
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Lowercase name, as used in messages
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Judgments for every position of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Judgment; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([Judgment::Correct; WORD_LENGTH]);

    /// Wrap raw judgments
    #[must_use]
    pub const fn new(judgments: [Judgment; WORD_LENGTH]) -> Self {
        Self(judgments)
    }

    /// Evaluate `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and claim those secret slots
    /// 2. Second pass: for each still-absent guess letter, claim the lowest
    ///    unclaimed secret slot holding the same letter
    ///
    /// Each secret letter is claimed at most once, so surplus duplicates in the
    /// guess stay absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Judgment::*, Word};
    ///
    /// let secret = Word::new("allot").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    ///
    /// let feedback = Feedback::evaluate(&guess, &secret);
    /// assert_eq!(feedback.judgments(), &[Present, Present, Correct, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let guess = guess.letters();
        let secret = secret.letters();
        let mut result = [Judgment::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Index needed to compare guess[i] with secret[i] and set both flags
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                result[i] = Judgment::Correct;
                consumed[i] = true;
            }
        }

        for (letter, slot) in guess.iter().zip(result.iter_mut()) {
            if *slot != Judgment::Absent {
                continue;
            }
            let claim = (0..WORD_LENGTH).find(|&j| !consumed[j] && secret[j] == *letter);
            if let Some(j) = claim {
                *slot = Judgment::Present;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    /// Judgments in guess order
    #[inline]
    #[must_use]
    pub const fn judgments(&self) -> &[Judgment; WORD_LENGTH] {
        &self.0
    }

    /// Judgment at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Judgment {
        self.0[position]
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|j| j.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Judgment::{Absent, Correct, Present};
    use super::*;

    fn judge(guess: &str, secret: &str) -> [Judgment; WORD_LENGTH] {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        *Feedback::evaluate(&guess, &secret).judgments()
    }

    #[test]
    fn judgment_ordering() {
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(Correct.max(Absent), Correct);
    }

    #[test]
    fn guess_equal_to_secret_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "allot"] {
            let w = Word::new(word).unwrap();
            let feedback = Feedback::evaluate(&w, &w);
            assert!(feedback.is_perfect(), "{word} should be perfect");
            assert_eq!(feedback.judgments(), &[Correct; WORD_LENGTH]);
        }
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        assert_eq!(judge("abcde", "fghij"), [Absent; WORD_LENGTH]);
        assert_eq!(judge("pudgy", "crane"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn duplicate_guess_letters_limited_by_secret() {
        // l@0 claims secret l@1, o@1 claims secret o@3, l@2 is exact,
        // l@3 finds both secret l's consumed
        assert_eq!(
            judge("lolly", "allot"),
            [Present, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn exact_match_wins_over_earlier_displaced_letter() {
        // The e@4 exact match is claimed in the first pass, so the e@0 gets
        // the only other e
        assert_eq!(
            judge("eerie", "there"),
            [Present, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn surplus_duplicates_stay_absent() {
        assert_eq!(
            judge("speed", "abide"),
            [Absent, Absent, Present, Absent, Present]
        );
        assert_eq!(
            judge("aaaaa", "about"),
            [Correct, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn displaced_matches_claim_lowest_index_first() {
        // o@3 is exact, so o@1 claims the remaining o
        assert_eq!(
            judge("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn anagram_is_all_present_or_correct() {
        assert_eq!(
            judge("trace", "crane"),
            [Absent, Correct, Correct, Present, Correct]
        );
        assert_eq!(
            judge("react", "cater"),
            [Present, Present, Present, Present, Present]
        );
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::new([Correct, Present, Absent, Correct, Present]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(Feedback::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
    }
}
