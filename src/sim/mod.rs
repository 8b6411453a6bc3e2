//! Automated playthroughs
//!
//! Drives single rounds and seeded batches of rounds against known targets,
//! used to benchmark how quickly the engine narrows the answer universe.

use crate::core::{Pattern, Word};
use crate::solver::{Engine, SelectionError, prune};
use indicatif::ProgressBar;
use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::sync::atomic::{AtomicBool, Ordering};

/// Attempt limit of a standard round.
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Result of one automated round.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// Whether the target was guessed within the attempt limit.
    pub solved: bool,
    /// Attempts used, including the winning guess.
    pub attempts: usize,
    /// Every guess played, in order.
    pub guesses: Vec<Word>,
    /// Candidate-set size after each non-winning guess.
    pub candidates_left: Vec<usize>,
}

/// Aggregate of a batch simulation.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Rounds actually completed (less than requested when cancelled).
    pub games: usize,
    /// Rounds solved within the attempt limit.
    pub wins: usize,
    /// Attempts summed over completed rounds.
    pub total_attempts: usize,
    /// Whether the batch stopped early on the cancel flag.
    pub cancelled: bool,
}

impl BatchReport {
    /// Wins as a percentage of completed games; 0.0 for an empty batch.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64 * 100.0
    }

    /// Mean attempts per completed game; 0.0 for an empty batch.
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_attempts as f64 / self.games as f64
    }
}

/// Play one automated round against a known target.
///
/// The candidate set starts as the full answer universe. Attempt 1 plays the
/// fixed `opening` guess (precomputed openings skip the most expensive
/// scoring pass); later attempts score the guess universe and play the
/// engine's pick. After every non-winning guess the candidate set is pruned
/// by the observed feedback, so its size never grows within the round.
///
/// # Errors
/// Propagates `SelectionError` from the engine, which a validated lexicon
/// rules out.
pub fn play_round(
    engine: &Engine<'_>,
    target: &Word,
    opening: &Word,
    max_attempts: usize,
) -> Result<RoundOutcome, SelectionError> {
    let mut candidates = engine.lexicon().answers().to_vec();
    let mut guesses = Vec::new();
    let mut candidates_left = Vec::new();
    let mut attempts = 0;

    while attempts < max_attempts {
        let guess = if attempts == 0 {
            opening.clone()
        } else {
            engine.suggest_guess(&candidates)?.clone()
        };
        attempts += 1;

        let observed = Pattern::calculate(&guess, target);
        debug!("attempt {attempts}: {guess} -> {observed}");
        guesses.push(guess.clone());

        if observed.is_perfect() {
            return Ok(RoundOutcome {
                solved: true,
                attempts,
                guesses,
                candidates_left,
            });
        }

        candidates = prune(&candidates, &guess, observed);
        candidates_left.push(candidates.len());
    }

    Ok(RoundOutcome {
        solved: false,
        attempts,
        guesses,
        candidates_left,
    })
}

/// Run `games` rounds against targets drawn from the answer universe.
///
/// Targets come from the injected `rng`, so a seeded generator reproduces the
/// exact same batch. The `cancel` flag is checked between rounds; a cancelled
/// batch reports only the rounds it completed. An optional progress bar is
/// advanced once per round.
///
/// # Errors
/// Propagates `SelectionError` from the engine.
pub fn simulate_batch<R: Rng + ?Sized>(
    engine: &Engine<'_>,
    opening: &Word,
    games: usize,
    rng: &mut R,
    cancel: &AtomicBool,
    progress: Option<&ProgressBar>,
) -> Result<BatchReport, SelectionError> {
    let answers = engine.lexicon().answers();
    let mut report = BatchReport::default();

    for _ in 0..games {
        if cancel.load(Ordering::Relaxed) {
            report.cancelled = true;
            break;
        }

        let Some(target) = answers.choose(rng) else {
            break;
        };

        let outcome = play_round(engine, target, opening, DEFAULT_MAX_ATTEMPTS)?;
        report.games += 1;
        if outcome.solved {
            report.wins += 1;
        }
        report.total_attempts += outcome.attempts;

        if let Some(bar) = progress {
            bar.inc(1);
        }
    }

    Ok(report)
}

/// Deterministic generator for reproducible batches.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::tests::tiny_lexicon;

    #[test]
    fn round_solves_known_target() {
        let lexicon = tiny_lexicon();
        let engine = Engine::new(&lexicon);
        let target = Word::new("crane").unwrap();
        let opening = Word::new("tares").unwrap();

        let outcome = play_round(&engine, &target, &opening, DEFAULT_MAX_ATTEMPTS).unwrap();
        assert!(outcome.solved);
        assert!(outcome.attempts <= DEFAULT_MAX_ATTEMPTS);
        assert_eq!(outcome.guesses.len(), outcome.attempts);
        assert_eq!(outcome.guesses.last().unwrap().text(), "crane");
    }

    #[test]
    fn candidate_counts_never_grow() {
        let lexicon = tiny_lexicon();
        let engine = Engine::new(&lexicon);
        let target = Word::new("grate").unwrap();
        let opening = Word::new("tares").unwrap();

        let outcome = play_round(&engine, &target, &opening, DEFAULT_MAX_ATTEMPTS).unwrap();

        let mut previous = lexicon.answers().len();
        for &count in &outcome.candidates_left {
            assert!(count <= previous);
            previous = count;
        }
    }

    #[test]
    fn guessing_the_target_first_wins_in_one() {
        let lexicon = tiny_lexicon();
        let engine = Engine::new(&lexicon);
        let target = Word::new("crane").unwrap();

        let outcome = play_round(&engine, &target, &target, DEFAULT_MAX_ATTEMPTS).unwrap();
        assert!(outcome.solved);
        assert_eq!(outcome.attempts, 1);
        assert!(outcome.candidates_left.is_empty());
    }

    #[test]
    fn round_exhausts_when_target_is_outside_the_universe() {
        let lexicon = tiny_lexicon();
        let engine = Engine::new(&lexicon);
        // Valid word, but not in the answer universe, so pruning can never
        // isolate it.
        let target = Word::new("mount").unwrap();
        let opening = Word::new("tares").unwrap();

        let outcome = play_round(&engine, &target, &opening, DEFAULT_MAX_ATTEMPTS).unwrap();
        assert!(!outcome.solved);
        assert_eq!(outcome.attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn batch_aggregates_completed_games() {
        let lexicon = tiny_lexicon();
        let engine = Engine::new(&lexicon);
        let opening = Word::new("tares").unwrap();
        let cancel = AtomicBool::new(false);

        let report = simulate_batch(&engine, &opening, 8, &mut seeded_rng(7), &cancel, None)
            .unwrap();

        assert_eq!(report.games, 8);
        assert!(!report.cancelled);
        assert!(report.wins <= report.games);
        assert!(report.total_attempts >= report.games);
        assert!(report.average_attempts() >= 1.0);
        assert!(report.win_rate() <= 100.0);
    }

    #[test]
    fn batch_is_reproducible_for_a_seed() {
        let lexicon = tiny_lexicon();
        let engine = Engine::new(&lexicon);
        let opening = Word::new("tares").unwrap();
        let cancel = AtomicBool::new(false);

        let first = simulate_batch(&engine, &opening, 6, &mut seeded_rng(42), &cancel, None)
            .unwrap();
        let second = simulate_batch(&engine, &opening, 6, &mut seeded_rng(42), &cancel, None)
            .unwrap();

        assert_eq!(first.games, second.games);
        assert_eq!(first.wins, second.wins);
        assert_eq!(first.total_attempts, second.total_attempts);
    }

    #[test]
    fn cancelled_batch_stops_before_playing() {
        let lexicon = tiny_lexicon();
        let engine = Engine::new(&lexicon);
        let opening = Word::new("tares").unwrap();
        let cancel = AtomicBool::new(true);

        let report = simulate_batch(&engine, &opening, 100, &mut seeded_rng(1), &cancel, None)
            .unwrap();

        assert!(report.cancelled);
        assert_eq!(report.games, 0);
        assert!((report.win_rate() - 0.0).abs() < f64::EPSILON);
        assert!((report.average_attempts() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_report_rates_are_zero() {
        let report = BatchReport::default();
        assert!((report.win_rate() - 0.0).abs() < f64::EPSILON);
        assert!((report.average_attempts() - 0.0).abs() < f64::EPSILON);
    }
}
