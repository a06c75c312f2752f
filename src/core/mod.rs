//! Core domain types for the puzzle
//!
//! Pure, synchronous types with no I/O: words, per-letter feedback and the
//! cumulative keyboard hints derived from it.

mod judgment;
mod keyboard;
mod word;

pub use judgment::{Feedback, Judgment};
pub use keyboard::{KEYBOARD_ROWS, KeyHints};
pub use word::{WORD_LENGTH, Word, WordError};
