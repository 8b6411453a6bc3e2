//! Word universes
//!
//! A [`Lexicon`] holds the two immutable word lists the engine works with:
//! the answer universe (words that can be the secret target) and the guess
//! universe (words legal to play, a superset of the answers). Both are loaded
//! once and never mutated; components borrow them for the process lifetime.
//!
//! Loading is fail-fast: a malformed entry, a duplicate, or an answer missing
//! from the guess universe aborts the load instead of being silently dropped.

mod loader;

pub use loader::load_words;

use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::Path;

/// Validation failure while building a [`Lexicon`].
#[derive(Debug)]
pub enum LexiconError {
    /// A word list file could not be read.
    Io(io::Error),
    /// An entry failed word validation (1-based line number).
    InvalidWord { line: usize, source: WordError },
    /// The same word appeared twice in one list (1-based line number of the
    /// second occurrence).
    DuplicateWord { line: usize, word: String },
    /// An answer-universe word is missing from the guess universe.
    AnswerNotGuessable { word: String },
    /// A word list contained no entries.
    EmptyList { name: &'static str },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read word list: {err}"),
            Self::InvalidWord { line, source } => {
                write!(f, "invalid word on line {line}: {source}")
            }
            Self::DuplicateWord { line, word } => {
                write!(f, "duplicate word {word:?} on line {line}")
            }
            Self::AnswerNotGuessable { word } => {
                write!(f, "answer word {word:?} is not in the guess universe")
            }
            Self::EmptyList { name } => write!(f, "{name} word list is empty"),
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for LexiconError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// The immutable answer and guess universes.
///
/// Canonical order of each universe is its load order; tie-breaking in guess
/// selection refers to the guess universe's canonical order.
#[derive(Debug, Clone)]
pub struct Lexicon {
    answers: Vec<Word>,
    guesses: Vec<Word>,
}

impl Lexicon {
    /// Build a lexicon from already-validated word vectors.
    ///
    /// # Errors
    /// Returns `LexiconError` if either list is empty or an answer is missing
    /// from the guess universe. Duplicate detection happens during file
    /// loading; lists constructed in code are trusted on that point.
    pub fn new(answers: Vec<Word>, guesses: Vec<Word>) -> Result<Self, LexiconError> {
        if answers.is_empty() {
            return Err(LexiconError::EmptyList { name: "answer" });
        }
        if guesses.is_empty() {
            return Err(LexiconError::EmptyList { name: "guess" });
        }

        let guessable: FxHashSet<&Word> = guesses.iter().collect();
        for answer in &answers {
            if !guessable.contains(answer) {
                return Err(LexiconError::AnswerNotGuessable {
                    word: answer.text().to_string(),
                });
            }
        }

        Ok(Self { answers, guesses })
    }

    /// Load both universes from newline-delimited word list files.
    ///
    /// # Errors
    /// Fails fast on I/O problems, malformed entries, duplicates, or an
    /// answer file that is not a subset of the guess file.
    pub fn load<P: AsRef<Path>>(answers_path: P, guesses_path: P) -> Result<Self, LexiconError> {
        let answers = load_words(answers_path)?;
        let guesses = load_words(guesses_path)?;
        Self::new(answers, guesses)
    }

    /// Words that can be the secret target, in canonical order.
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Words legal to play as a guess, in canonical order.
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Small fixed lexicon shared by solver and simulator tests.
    pub(crate) fn tiny_lexicon() -> Lexicon {
        let answers = ["crane", "trace", "grate", "irate", "crate"]
            .iter()
            .map(|s| Word::new(*s).unwrap())
            .collect::<Vec<_>>();
        let mut guesses = answers.clone();
        for extra in ["tares", "slate", "aeros"] {
            guesses.push(Word::new(extra).unwrap());
        }
        Lexicon::new(answers, guesses).unwrap()
    }

    #[test]
    fn new_accepts_answers_subset() {
        let lexicon = tiny_lexicon();
        assert_eq!(lexicon.answers().len(), 5);
        assert_eq!(lexicon.guesses().len(), 8);
    }

    #[test]
    fn new_rejects_empty_lists() {
        let word = Word::new("crane").unwrap();
        assert!(matches!(
            Lexicon::new(vec![], vec![word.clone()]),
            Err(LexiconError::EmptyList { name: "answer" })
        ));
        assert!(matches!(
            Lexicon::new(vec![word], vec![]),
            Err(LexiconError::EmptyList { name: "guess" })
        ));
    }

    #[test]
    fn new_rejects_unguessable_answer() {
        let answers = vec![Word::new("crane").unwrap()];
        let guesses = vec![Word::new("slate").unwrap()];
        let err = Lexicon::new(answers, guesses).unwrap_err();
        assert!(matches!(
            err,
            LexiconError::AnswerNotGuessable { word } if word == "crane"
        ));
    }

    #[test]
    fn canonical_order_is_load_order() {
        let lexicon = tiny_lexicon();
        assert_eq!(lexicon.guesses()[0].text(), "crane");
        assert_eq!(lexicon.guesses()[5].text(), "tares");
    }
}
