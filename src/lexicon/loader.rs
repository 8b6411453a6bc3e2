//! Word list file loading
//!
//! Word lists are newline-delimited lowercase 5-letter tokens, one word per
//! line. Unlike a lenient loader that skips bad lines, this one surfaces the
//! first malformed or duplicate entry with its line number, so a broken list
//! is caught at startup rather than quietly shrinking the universe.

use super::LexiconError;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load and validate a word list file.
///
/// Returns the words in file order, which becomes their canonical order.
///
/// # Errors
/// Returns `LexiconError` on I/O failure, on the first entry that is not a
/// valid 5-letter word, or on the first duplicate entry.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LexiconError> {
    let content = fs::read_to_string(path)?;
    parse_words(&content)
}

fn parse_words(content: &str) -> Result<Vec<Word>, LexiconError> {
    let mut words = Vec::new();
    let mut seen = FxHashSet::default();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let word =
            Word::new(raw.trim()).map_err(|source| LexiconError::InvalidWord { line, source })?;

        if !seen.insert(word.clone()) {
            return Err(LexiconError::DuplicateWord {
                line,
                word: word.text().to_string(),
            });
        }
        words.push(word);
    }

    Ok(words)
}
