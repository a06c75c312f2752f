//! Round lifecycle
//!
//! A [`Round`] owns everything about one game: the secret, the judged guesses
//! so far, the letters staged for the next attempt and the outcome.
//!
//! ```text
//! Ongoing ──(guess == secret)──────────> Won
//!    │
//!    └──(MAX_GUESSES without a win)────> Lost
//! ```
//!
//! Terminal states are only left through [`Round::restart`].

use crate::core::{Feedback, KeyHints, WORD_LENGTH, Word};
use crate::wordlists::Vocabulary;
use thiserror::Error;
use tracing::{debug, info};

/// Number of attempts in a round
pub const MAX_GUESSES: usize = 6;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Ongoing,
    Won,
    Lost,
}

impl RoundState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Terminal result of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Solved after `guesses` attempts
    Won { guesses: usize },
    /// Out of attempts; carries the secret so it can be revealed
    Lost { secret: Word },
}

/// Why a submission was refused
///
/// Every variant is recoverable: the round is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("Not enough letters ({staged}/{WORD_LENGTH})")]
    IncompleteGuess { staged: usize },
    #[error("Not in word list: {0}")]
    UnknownWord(String),
    #[error("The round is over")]
    RoundOver,
}

/// One accepted guess and its judgments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub guess: Word,
    pub feedback: Feedback,
    pub state: RoundState,
    /// Set once the round has reached a terminal state
    pub outcome: Option<Outcome>,
}

/// A single game session
#[derive(Debug, Clone)]
pub struct Round {
    secret: Word,
    history: Vec<GuessRecord>,
    staged: Vec<u8>,
    state: RoundState,
    key_hints: KeyHints,
}

impl Round {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        info!("New round started");
        Self {
            secret,
            history: Vec::with_capacity(MAX_GUESSES),
            staged: Vec::with_capacity(WORD_LENGTH),
            state: RoundState::Ongoing,
            key_hints: KeyHints::new(),
        }
    }

    /// Discard everything and start over with a new secret
    pub fn restart(&mut self, secret: Word) {
        *self = Self::new(secret);
    }

    /// Stage one letter for the current attempt
    ///
    /// Ignored (returns `false`) when the round is over, the attempt is full,
    /// or `letter` is not an ASCII letter.
    pub fn stage_letter(&mut self, letter: char) -> bool {
        if self.state.is_terminal() || self.staged.len() >= WORD_LENGTH {
            return false;
        }
        let Ok(byte) = u8::try_from(letter) else {
            return false;
        };
        if !byte.is_ascii_alphabetic() {
            return false;
        }
        self.staged.push(byte.to_ascii_lowercase());
        true
    }

    /// Remove the last staged letter, if any
    pub fn unstage_letter(&mut self) -> bool {
        self.staged.pop().is_some()
    }

    /// Submit the staged letters as a guess
    ///
    /// # Errors
    ///
    /// Returns a [`RejectReason`] and leaves the round unchanged when the
    /// round is over, fewer than `WORD_LENGTH` letters are staged, or the
    /// staged word is not in `vocabulary`. Staged letters are kept so the
    /// player can edit them.
    pub fn submit(&mut self, vocabulary: &Vocabulary) -> Result<Submission, RejectReason> {
        if self.state.is_terminal() {
            return Err(RejectReason::RoundOver);
        }

        let letters: [u8; WORD_LENGTH] =
            self.staged
                .as_slice()
                .try_into()
                .map_err(|_| RejectReason::IncompleteGuess {
                    staged: self.staged.len(),
                })?;
        let guess = Word::from_letters(letters);

        if !vocabulary.contains(&guess) {
            debug!(guess = %guess, "Rejected unknown word");
            return Err(RejectReason::UnknownWord(guess.text().to_string()));
        }

        let feedback = Feedback::evaluate(&guess, &self.secret);
        self.key_hints.record(&guess, &feedback);
        self.history.push(GuessRecord {
            guess: guess.clone(),
            feedback,
        });
        self.staged.clear();

        self.state = if guess == self.secret {
            RoundState::Won
        } else if self.history.len() >= MAX_GUESSES {
            RoundState::Lost
        } else {
            RoundState::Ongoing
        };

        debug!(
            guess = %guess,
            feedback = %feedback.to_emoji(),
            attempt = self.history.len(),
            "Guess accepted"
        );
        if self.state.is_terminal() {
            info!(state = ?self.state, attempts = self.history.len(), "Round finished");
        }

        Ok(Submission {
            guess,
            feedback,
            state: self.state,
            outcome: self.outcome(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Terminal outcome, or `None` while the round is ongoing
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Ongoing => None,
            RoundState::Won => Some(Outcome::Won {
                guesses: self.history.len(),
            }),
            RoundState::Lost => Some(Outcome::Lost {
                secret: self.secret.clone(),
            }),
        }
    }

    /// The hidden word
    ///
    /// Front-ends should only reveal it once the round is lost.
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Staged letters as a lowercase string
    #[must_use]
    pub fn staged(&self) -> String {
        self.staged.iter().map(|&b| char::from(b)).collect()
    }

    /// Number of accepted guesses
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn key_hints(&self) -> &KeyHints {
        &self.key_hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Judgment::{Absent, Correct, Present};

    fn vocabulary() -> Vocabulary {
        Vocabulary::load(
            "crane\ntrace\nslate\nallot\nlolly\naudio\npudgy\nfjord\nmixer\nbumpy\nwhisk\n",
        )
    }

    fn round(secret: &str) -> Round {
        Round::new(Word::new(secret).unwrap())
    }

    fn stage(round: &mut Round, word: &str) {
        for ch in word.chars() {
            round.stage_letter(ch);
        }
    }

    fn guess(round: &mut Round, vocabulary: &Vocabulary, word: &str) -> Submission {
        stage(round, word);
        round.submit(vocabulary).unwrap()
    }

    #[test]
    fn new_round_is_ongoing_and_empty() {
        let round = round("crane");
        assert_eq!(round.state(), RoundState::Ongoing);
        assert_eq!(round.attempts(), 0);
        assert_eq!(round.remaining_attempts(), MAX_GUESSES);
        assert!(round.history().is_empty());
        assert_eq!(round.staged(), "");
        assert_eq!(round.outcome(), None);
    }

    #[test]
    fn staging_normalizes_and_filters() {
        let mut round = round("crane");
        assert!(round.stage_letter('C'));
        assert!(!round.stage_letter('1'));
        assert!(!round.stage_letter(' '));
        assert!(!round.stage_letter('é'));
        assert!(round.stage_letter('r'));
        assert_eq!(round.staged(), "cr");
    }

    #[test]
    fn staging_stops_at_word_length() {
        let mut round = round("crane");
        stage(&mut round, "cranes");
        assert_eq!(round.staged(), "crane");
        assert!(!round.stage_letter('x'));
    }

    #[test]
    fn unstage_removes_last_letter() {
        let mut round = round("crane");
        assert!(!round.unstage_letter());
        stage(&mut round, "cra");
        assert!(round.unstage_letter());
        assert_eq!(round.staged(), "cr");
    }

    #[test]
    fn trace_then_crane_wins_in_two() {
        let vocabulary = vocabulary();
        let mut round = round("crane");

        let first = guess(&mut round, &vocabulary, "trace");
        assert_eq!(
            first.feedback.judgments(),
            &[Absent, Correct, Correct, Present, Correct]
        );
        assert_eq!(first.state, RoundState::Ongoing);
        assert_eq!(first.outcome, None);
        assert_eq!(round.staged(), "");

        let second = guess(&mut round, &vocabulary, "crane");
        assert!(second.feedback.is_perfect());
        assert_eq!(second.state, RoundState::Won);
        assert_eq!(second.outcome, Some(Outcome::Won { guesses: 2 }));
        assert_eq!(round.attempts(), 2);
    }

    #[test]
    fn six_misses_lose_and_reveal_secret() {
        let vocabulary = vocabulary();
        let mut round = round("crane");

        for word in ["slate", "audio", "pudgy", "fjord", "mixer"] {
            let submission = guess(&mut round, &vocabulary, word);
            assert_eq!(submission.state, RoundState::Ongoing);
        }

        let last = guess(&mut round, &vocabulary, "whisk");
        assert_eq!(last.state, RoundState::Lost);
        assert_eq!(
            last.outcome,
            Some(Outcome::Lost {
                secret: Word::new("crane").unwrap()
            })
        );
        assert_eq!(round.remaining_attempts(), 0);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let vocabulary = vocabulary();
        let mut round = round("crane");

        for word in ["slate", "audio", "pudgy", "fjord", "mixer"] {
            guess(&mut round, &vocabulary, word);
        }
        let last = guess(&mut round, &vocabulary, "crane");
        assert_eq!(last.outcome, Some(Outcome::Won { guesses: 6 }));
    }

    #[test]
    fn incomplete_guess_changes_nothing() {
        let vocabulary = vocabulary();
        let mut round = round("crane");
        stage(&mut round, "cra");

        assert_eq!(
            round.submit(&vocabulary),
            Err(RejectReason::IncompleteGuess { staged: 3 })
        );
        assert_eq!(round.attempts(), 0);
        assert!(round.history().is_empty());
        assert_eq!(round.staged(), "cra");
    }

    #[test]
    fn unknown_word_keeps_staged_letters() {
        let vocabulary = vocabulary();
        let mut round = round("crane");
        guess(&mut round, &vocabulary, "slate");
        stage(&mut round, "qwert");

        assert_eq!(
            round.submit(&vocabulary),
            Err(RejectReason::UnknownWord("qwert".to_string()))
        );
        assert_eq!(round.attempts(), 1);
        assert_eq!(round.history().len(), 1);
        assert_eq!(round.staged(), "qwert");
        assert_eq!(round.state(), RoundState::Ongoing);
    }

    #[test]
    fn terminal_round_ignores_input() {
        let vocabulary = vocabulary();
        let mut round = round("crane");
        guess(&mut round, &vocabulary, "crane");

        assert!(round.is_over());
        assert!(!round.stage_letter('a'));
        assert_eq!(round.submit(&vocabulary), Err(RejectReason::RoundOver));
        assert_eq!(round.attempts(), 1);
    }

    #[test]
    fn key_hints_follow_history() {
        let vocabulary = vocabulary();
        let mut round = round("crane");
        guess(&mut round, &vocabulary, "trace");
        guess(&mut round, &vocabulary, "slate");

        let rebuilt = KeyHints::from_history(
            round.history().iter().map(|record| (&record.guess, &record.feedback)),
        );
        assert_eq!(round.key_hints(), &rebuilt);
        assert_eq!(round.key_hints().get('a'), Some(Correct));
        assert_eq!(round.key_hints().get('t'), Some(Absent));
    }

    #[test]
    fn restart_resets_everything() {
        let vocabulary = vocabulary();
        let mut round = round("crane");
        guess(&mut round, &vocabulary, "crane");
        stage(&mut round, "ab");

        round.restart(Word::new("allot").unwrap());
        assert_eq!(round.state(), RoundState::Ongoing);
        assert_eq!(round.attempts(), 0);
        assert_eq!(round.staged(), "");
        assert_eq!(round.key_hints(), &KeyHints::new());
        assert_eq!(round.secret().text(), "allot");
    }
}
