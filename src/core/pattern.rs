//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback a guess receives against a target word
//! using base-3 encoding over the five positions:
//! - 0 = Absent (letter not in the target)
//! - 1 = Present (letter in the target, wrong position)
//! - 2 = Hit (letter in the correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where position i
//! contributes `digit * 3^i`. Exactly 3^5 = 243 distinct patterns exist.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Feedback symbol for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter does not occur in the target (given prior consumption).
    Absent,
    /// Letter occurs in the target but at a different position.
    Present,
    /// Letter is in exactly the right position.
    Hit,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Hit,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback pattern for one guess against one target.
///
/// Value range: 0-242 (3^5 - 1). Produced by [`Pattern::calculate`];
/// hand-construction is reserved for tests and history parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All hits (the guess is the target).
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct patterns.
    pub const COUNT: usize = 243;

    /// Create a pattern from a raw base-3 value.
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        debug_assert!(value < 243, "pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this pattern is all hits
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Calculate the pattern when `guess` is played and `target` is the answer.
    ///
    /// Two passes are required to credit duplicate letters correctly:
    /// 1. Mark hits and consume those target letter instances.
    /// 2. For each remaining position, mark Present if an unconsumed instance
    ///    of the letter exists (consuming it), otherwise Absent.
    ///
    /// A guess with two `e`s against a target with one `e` therefore earns at
    /// most one Hit/Present for `e`. Pure and deterministic; length mismatch
    /// is impossible because both arguments are validated [`Word`]s.
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut digits = [0u8; WORD_LEN];
        let mut available = target.letter_counts();

        let guess_letters = guess.letters();
        let target_letters = target.letters();

        // First pass: hits consume their target instance
        for i in 0..WORD_LEN {
            if guess_letters[i] == target_letters[i] {
                digits[i] = Feedback::Hit.digit();
                available[usize::from(guess_letters[i] - b'a')] -= 1;
            }
        }

        // Second pass: presents draw from what is left
        for i in 0..WORD_LEN {
            if digits[i] == 0 {
                let slot = usize::from(guess_letters[i] - b'a');
                if available[slot] > 0 {
                    digits[i] = Feedback::Present.digit();
                    available[slot] -= 1;
                }
            }
        }

        let mut value = 0u8;
        let mut multiplier = 1u8;
        for &digit in &digits {
            value += digit * multiplier;
            multiplier *= 3;
        }

        Self(value)
    }

    /// Decode the pattern into its five feedback symbols, position 0 first.
    #[must_use]
    pub fn symbols(self) -> [Feedback; WORD_LEN] {
        let mut symbols = [Feedback::Absent; WORD_LEN];
        let mut value = self.0;
        for symbol in &mut symbols {
            *symbol = Feedback::from_digit(value % 3);
            value /= 3;
        }
        symbols
    }

    /// Build a pattern from five feedback symbols, position 0 first.
    #[must_use]
    pub fn from_symbols(symbols: [Feedback; WORD_LEN]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for symbol in symbols {
            value += symbol.digit() * multiplier;
            multiplier *= 3;
        }
        Self(value)
    }

    /// Parse a pattern from a 5-letter code like `"gybbg"`.
    ///
    /// Accepts `g`/`G` for Hit, `y`/`Y` for Present, `b`/`B` for Absent.
    /// Returns `None` for any other input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != WORD_LEN {
            return None;
        }

        let mut symbols = [Feedback::Absent; WORD_LEN];
        for (symbol, &b) in symbols.iter_mut().zip(bytes) {
            *symbol = match b {
                b'g' | b'G' => Feedback::Hit,
                b'y' | b'Y' => Feedback::Present,
                b'b' | b'B' => Feedback::Absent,
                _ => return None,
            };
        }
        Some(Self::from_symbols(symbols))
    }
}

impl fmt::Display for Pattern {
    /// Renders the pattern in the same `g`/`y`/`b` code that [`Pattern::parse`] accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            f.write_str(match symbol {
                Feedback::Hit => "g",
                Feedback::Present => "y",
                Feedback::Absent => "b",
            })?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid pattern code: {s}"))
    }
}
