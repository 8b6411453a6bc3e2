//! Engine facade
//!
//! Ties scoring, selection, and the lexicon together behind the one call the
//! surrounding game layer makes: "what should I guess next?"

use super::entropy::score_guesses;
use super::selector::{SelectionError, choose_best};
use crate::core::Word;
use crate::lexicon::Lexicon;
use log::debug;

/// Which word distribution a guess is scored against.
///
/// The original behavior was inconsistent between call sites, so the choice
/// is explicit configuration here rather than an internal detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceMode {
    /// Score against the current candidate set. Information-theoretically
    /// correct: measures how much a guess narrows what is actually possible.
    #[default]
    Candidates,
    /// Score against the full guess universe. Cheaper to reason about but an
    /// approximation; kept for comparison runs.
    FullUniverse,
}

impl ReferenceMode {
    /// Parse a mode name; unrecognized names fall back to the default.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "universe" | "full-universe" => Self::FullUniverse,
            _ => Self::Candidates,
        }
    }
}

/// The guess-selection engine.
///
/// Holds only borrowed, immutable word lists, so independent engines (one per
/// test, one per game) coexist without shared state.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    lexicon: &'a Lexicon,
    reference: ReferenceMode,
}

impl<'a> Engine<'a> {
    /// Create an engine over `lexicon` with the default reference mode.
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            reference: ReferenceMode::Candidates,
        }
    }

    /// Replace the reference mode used for scoring.
    #[must_use]
    pub const fn with_reference_mode(mut self, reference: ReferenceMode) -> Self {
        self.reference = reference;
        self
    }

    /// The word lists this engine scores over.
    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Suggest the guess that maximizes expected information.
    ///
    /// Scores every word in the guess universe against the configured
    /// reference distribution and returns the best one, ties broken by
    /// canonical guess-universe order. With a single candidate left the
    /// candidate itself is the only sensible play and is returned directly.
    ///
    /// # Errors
    /// Returns `SelectionError::EmptyScoreTable` if the guess universe is
    /// empty, which a validated [`Lexicon`] rules out.
    pub fn suggest_guess(&self, candidates: &[Word]) -> Result<&'a Word, SelectionError> {
        if candidates.len() == 1 {
            if let Some(word) = self.lexicon.guesses().iter().find(|w| *w == &candidates[0]) {
                debug!("single candidate left, playing {word}");
                return Ok(word);
            }
        }

        let reference: &[Word] = match self.reference {
            ReferenceMode::Candidates => candidates,
            ReferenceMode::FullUniverse => self.lexicon.guesses(),
        };

        let scores = score_guesses(self.lexicon.guesses(), reference);
        let best = choose_best(&scores)?;
        debug!(
            "scored {} guesses against {} reference words, best {} at {:.3} bits",
            scores.len(),
            reference.len(),
            best.word,
            best.bits
        );
        Ok(best.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::lexicon::tests::tiny_lexicon;
    use crate::solver::filter::prune;

    #[test]
    fn suggestion_comes_from_guess_universe() {
        let lexicon = tiny_lexicon();
        let engine = Engine::new(&lexicon);

        let guess = engine.suggest_guess(lexicon.answers()).unwrap();
        assert!(lexicon.guesses().contains(guess));
    }

    #[test]
    fn single_candidate_is_played_directly() {
        let lexicon = tiny_lexicon();
        let engine = Engine::new(&lexicon);

        let lone = vec![lexicon.answers()[3].clone()]; // "irate"
        let guess = engine.suggest_guess(&lone).unwrap();
        assert_eq!(guess.text(), "irate");
    }

    #[test]
    fn suggestion_is_deterministic() {
        let lexicon = tiny_lexicon();
        let engine = Engine::new(&lexicon);

        let first = engine.suggest_guess(lexicon.answers()).unwrap();
        let second = engine.suggest_guess(lexicon.answers()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reference_modes_both_produce_valid_guesses() {
        let lexicon = tiny_lexicon();

        for mode in [ReferenceMode::Candidates, ReferenceMode::FullUniverse] {
            let engine = Engine::new(&lexicon).with_reference_mode(mode);
            let guess = engine.suggest_guess(lexicon.answers()).unwrap();
            assert!(lexicon.guesses().contains(guess));
        }
    }

    #[test]
    fn suggestion_narrows_after_feedback() {
        let lexicon = tiny_lexicon();
        let engine = Engine::new(&lexicon);
        let target = Word::new("grate").unwrap();

        let first = engine.suggest_guess(lexicon.answers()).unwrap();
        let observed = Pattern::calculate(first, &target);
        let narrowed = prune(lexicon.answers(), first, observed);

        assert!(narrowed.len() <= lexicon.answers().len());
        assert!(narrowed.contains(&target));

        let next = engine.suggest_guess(&narrowed).unwrap();
        assert!(lexicon.guesses().contains(next));
    }

    #[test]
    fn mode_names_parse() {
        assert_eq!(
            ReferenceMode::from_name("universe"),
            ReferenceMode::FullUniverse
        );
        assert_eq!(
            ReferenceMode::from_name("candidates"),
            ReferenceMode::Candidates
        );
        assert_eq!(
            ReferenceMode::from_name("anything"),
            ReferenceMode::Candidates
        );
    }
}
