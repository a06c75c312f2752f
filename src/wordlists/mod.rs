//! Word source for the game
//!
//! Loads the vocabulary (from a file or the embedded dictionary) and draws
//! secrets from it.

mod embedded;
mod vocabulary;

pub use embedded::DICTIONARY;
pub use vocabulary::{FALLBACK_SECRET, Vocabulary, fallback_secret};
