//! Round state machine and the session that owns it

mod round;
mod session;

pub use round::{GuessRecord, MAX_GUESSES, Outcome, RejectReason, Round, RoundState, Submission};
pub use session::Session;
