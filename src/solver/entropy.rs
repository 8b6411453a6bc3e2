//! Expected-information scoring
//!
//! Given a guess and a reference distribution of words, computes the Shannon
//! entropy of the feedback-pattern partition the guess induces. A guess that
//! splits the reference set into many small, even cells carries more expected
//! information than one that lumps most words into a single pattern.

use crate::core::{Pattern, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// One guess's expected information against a reference set.
///
/// Borrowed entries keep per-turn score tables allocation-light; the table is
/// rebuilt every turn and never outlives the decision it serves.
#[derive(Debug, Clone, Copy)]
pub struct GuessScore<'a> {
    /// The scored guess word.
    pub word: &'a Word,
    /// Expected information in bits.
    pub bits: f64,
}

/// Expected information (bits) of playing `guess` against `reference`.
///
/// Partitions `reference` by the pattern each word would produce and returns
/// `Σ p(c) · log2(1 / p(c))` over the non-empty cells. Patterns that no
/// reference word produces have probability zero and contribute nothing, so
/// grouping is equivalent to enumerating all 243 codes.
///
/// An empty reference set yields 0.0: there is nothing left to distinguish,
/// which is a degenerate input rather than an error.
#[must_use]
pub fn expected_information(guess: &Word, reference: &[Word]) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }

    let mut partition: FxHashMap<Pattern, usize> = FxHashMap::default();
    for word in reference {
        *partition.entry(Pattern::calculate(guess, word)).or_insert(0) += 1;
    }

    let total = reference.len() as f64;
    partition
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Score every word in `pool` against `reference`, in parallel.
///
/// The returned table preserves `pool` order, so downstream tie-breaking can
/// rely on canonical guess-universe order rather than scheduling order. Each
/// scoring task reads only immutable snapshots; no locking is involved.
#[must_use]
pub fn score_guesses<'a>(pool: &'a [Word], reference: &[Word]) -> Vec<GuessScore<'a>> {
    pool.par_iter()
        .map(|word| GuessScore {
            word,
            bits: expected_information(word, reference),
        })
        .collect()
}
