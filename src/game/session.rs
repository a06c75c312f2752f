//! One player's session: the vocabulary, the randomness source and the single
//! live round

use super::round::{RejectReason, Round, Submission};
use crate::core::Word;
use crate::wordlists::{Vocabulary, fallback_secret};
use rand::Rng;

/// Owns the live round and knows how to replace it
pub struct Session<R> {
    vocabulary: Vocabulary,
    fallback: Word,
    rng: R,
    round: Round,
}

impl<R: Rng> Session<R> {
    /// Start a session with a freshly drawn secret
    pub fn new(vocabulary: Vocabulary, mut rng: R) -> Self {
        let fallback = fallback_secret();
        let secret = vocabulary.pick_secret(&fallback, &mut rng);
        Self {
            vocabulary,
            fallback,
            rng,
            round: Round::new(secret),
        }
    }

    /// Start a session with a known secret
    pub fn with_secret(vocabulary: Vocabulary, rng: R, secret: Word) -> Self {
        Self {
            vocabulary,
            fallback: fallback_secret(),
            rng,
            round: Round::new(secret),
        }
    }

    /// Replace the live round with a new one
    pub fn new_round(&mut self) {
        let secret = self.vocabulary.pick_secret(&self.fallback, &mut self.rng);
        self.round.restart(secret);
    }

    /// Stage a whole line of input as one attempt and submit it
    ///
    /// Previously staged letters are discarded first and non-letters are
    /// skipped, so `"c r-a n e"` submits `crane`.
    ///
    /// # Errors
    ///
    /// Same as [`Round::submit`].
    pub fn submit_text(&mut self, text: &str) -> Result<Submission, RejectReason> {
        while self.round.unstage_letter() {}
        for letter in text.chars() {
            self.round.stage_letter(letter);
        }
        self.submit()
    }

    /// Submit the currently staged letters
    ///
    /// # Errors
    ///
    /// Same as [`Round::submit`].
    pub fn submit(&mut self) -> Result<Submission, RejectReason> {
        self.round.submit(&self.vocabulary)
    }
}

impl<R> Session<R> {
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    pub const fn round_mut(&mut self) -> &mut Round {
        &mut self.round
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}
