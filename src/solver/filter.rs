//! Candidate set refinement
//!
//! After a guess is played and its feedback observed, only the words that
//! would have produced that exact feedback remain possible targets.

use crate::core::{Pattern, Word};

/// Narrow `candidates` to the words consistent with `observed` for `guess`.
///
/// Returns a fresh vector; the input is never mutated. The result is always
/// a subset of the input, and when `observed` came from comparing `guess`
/// against the true target, that target is guaranteed to survive.
#[must_use]
pub fn prune(candidates: &[Word], guess: &Word, observed: Pattern) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| Pattern::calculate(guess, candidate) == observed)
        .cloned()
        .collect()
}
