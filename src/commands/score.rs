//! One-shot scoring of a guess against a secret

use crate::core::{Feedback, Word, WordError};

/// Feedback for a single guess/secret pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `secret`
///
/// No vocabulary check is made: any two well-formed words can be scored.
///
/// # Errors
///
/// Returns `WordError` if either argument is not a valid word.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = Feedback::evaluate(&guess, &secret);
    Ok(ScoreResult {
        guess,
        secret,
        feedback,
    })
}
