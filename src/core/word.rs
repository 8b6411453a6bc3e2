//! Validated 5-letter word value
//!
//! A `Word` is the only way letters enter the engine: construction lowercases
//! the input and rejects anything that is not exactly five ASCII letters, so
//! every downstream comparison can assume equal, fixed lengths.

use std::fmt;

/// Fixed word length for the whole engine.
pub const WORD_LEN: usize = 5;

/// A case-normalized 5-letter word.
///
/// Immutable once constructed. Equality and ordering follow the normalized
/// text, so the canonical order of a word list is its load order and
/// comparisons never depend on the caller's casing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Input was not exactly [`WORD_LEN`] bytes long.
    InvalidLength(usize),
    /// Input contained non-ASCII characters.
    NonAscii,
    /// Input contained ASCII characters outside `a..=z`.
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "word contains non-letter characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new `Word` from a string.
    ///
    /// The input is lowercased before validation, so `"CRANE"` and `"crane"`
    /// construct equal words.
    ///
    /// # Errors
    /// Returns `WordError` if the input is not exactly five ASCII letters.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Per-letter occurrence counts, indexed by `letter - b'a'`.
    ///
    /// Used by pattern calculation to limit Present credit for duplicate
    /// letters to the number of actual occurrences in the target.
    #[inline]
    #[must_use]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &b in &self.letters {
            counts[usize::from(b - b'a')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
