//! Vocabulary loading and secret selection

use super::embedded::DICTIONARY;
use crate::core::{WORD_LENGTH, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Secret used when the vocabulary is empty
pub const FALLBACK_SECRET: &str = "crane";

/// Accepted words, also the pool secrets are drawn from
///
/// Keeps an ordered list for random indexing and a hash set for membership.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Vocabulary {
    /// Parse newline-separated text into a vocabulary
    ///
    /// Entries are trimmed and lowercased. Only entries of exactly
    /// `WORD_LENGTH` characters are kept; those that are not plain ASCII
    /// letters are dropped too since they could never be typed. Duplicates
    /// keep their first position. An empty result is not an error.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::load("  Crane \r\nslates\nTRACE\n\n");
    /// assert_eq!(vocabulary.len(), 2);
    /// assert!(vocabulary.contains_str("crane"));
    /// assert!(!vocabulary.contains_str("slates"));
    /// ```
    #[must_use]
    pub fn load(raw: &str) -> Self {
        let mut vocabulary = Self::default();

        for entry in raw.lines().map(str::trim) {
            if entry.chars().count() != WORD_LENGTH {
                continue;
            }
            match Word::new(entry) {
                Ok(word) => {
                    if vocabulary.index.insert(word.clone()) {
                        vocabulary.words.push(word);
                    }
                }
                Err(err) => debug!(entry, %err, "Skipping dictionary entry"),
            }
        }

        if vocabulary.is_empty() {
            warn!("Dictionary loaded empty");
        } else {
            debug!(words = vocabulary.len(), "Dictionary loaded");
        }

        vocabulary
    }

    /// Load a vocabulary from a file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or is not UTF-8.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::load(&content))
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::load(DICTIONARY)
    }

    /// Draw a secret uniformly at random, or `fallback` when empty
    pub fn pick_secret<R: Rng + ?Sized>(&self, fallback: &Word, rng: &mut R) -> Word {
        if let Some(word) = self.words.choose(rng) {
            word.clone()
        } else {
            warn!(%fallback, "Empty vocabulary, using fallback secret");
            fallback.clone()
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Membership test on raw text, case-insensitive
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// The fallback secret as a `Word`
#[must_use]
pub fn fallback_secret() -> Word {
    let mut letters = [0u8; WORD_LENGTH];
    letters.copy_from_slice(FALLBACK_SECRET.as_bytes());
    Word::from_letters(letters)
}
