//! Embedded dictionary
//!
//! Compiled into the binary so the game works without a word list file.

/// Default dictionary, one word per line
pub const DICTIONARY: &str = include_str!("../../data/dictionary.txt");
