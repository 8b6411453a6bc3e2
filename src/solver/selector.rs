//! Best-guess selection
//!
//! Scans a score table and returns the highest-scoring guess. Ties are broken
//! by canonical order: the table preserves guess-universe order, and only a
//! strictly greater score displaces the current best, so the earliest maximum
//! wins on every call. Selection never depends on hash iteration order.

use super::entropy::GuessScore;
use std::fmt;

/// Failure to select a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The score table was empty, e.g. an empty guess universe upstream.
    EmptyScoreTable,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyScoreTable => write!(f, "no scored guesses to choose from"),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Pick the highest-scoring entry from a score table.
///
/// # Errors
/// Returns `SelectionError::EmptyScoreTable` when `scores` is empty; an
/// empty table signals a caller logic error and is surfaced rather than
/// silently defaulted.
pub fn choose_best<'a>(scores: &[GuessScore<'a>]) -> Result<GuessScore<'a>, SelectionError> {
    let mut iter = scores.iter();
    let mut best = *iter.next().ok_or(SelectionError::EmptyScoreTable)?;

    for &score in iter {
        if score.bits > best.bits {
            best = score;
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn table<'a>(entries: &[(&'a Word, f64)]) -> Vec<GuessScore<'a>> {
        entries
            .iter()
            .map(|&(word, bits)| GuessScore { word, bits })
            .collect()
    }

    #[test]
    fn picks_the_maximum() {
        let low = Word::new("aaaaa").unwrap();
        let high = Word::new("aeros").unwrap();
        let scores = table(&[(&low, 0.5), (&high, 2.3)]);

        let best = choose_best(&scores).unwrap();
        assert_eq!(best.word.text(), "aeros");
        assert!((best.bits - 2.3).abs() < f64::EPSILON);
    }

    #[test]
    fn tie_goes_to_earlier_entry() {
        let first = Word::new("aaaaa").unwrap();
        let second = Word::new("bbbbb").unwrap();
        let third = Word::new("ccccc").unwrap();
        let scores = table(&[(&first, 1.0), (&second, 1.5), (&third, 1.5)]);

        for _ in 0..10 {
            let best = choose_best(&scores).unwrap();
            assert_eq!(best.word.text(), "bbbbb");
        }
    }

    #[test]
    fn all_tied_returns_first() {
        let a = Word::new("aaaaa").unwrap();
        let b = Word::new("bbbbb").unwrap();
        let scores = table(&[(&a, 0.0), (&b, 0.0)]);

        assert_eq!(choose_best(&scores).unwrap().word.text(), "aaaaa");
    }

    #[test]
    fn empty_table_is_an_error() {
        assert_eq!(
            choose_best(&[]).unwrap_err(),
            SelectionError::EmptyScoreTable
        );
    }

    #[test]
    fn single_entry_wins() {
        let only = Word::new("crane").unwrap();
        let scores = table(&[(&only, 0.0)]);
        assert_eq!(choose_best(&scores).unwrap().word.text(), "crane");
    }
}
