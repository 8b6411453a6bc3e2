//! Guess-selection algorithms
//!
//! Entropy scoring, candidate refinement, best-guess selection, and the
//! [`Engine`] facade that exposes them as a single suggestion call.

pub mod engine;
pub mod entropy;
pub mod filter;
pub mod selector;

pub use engine::{Engine, ReferenceMode};
pub use entropy::{GuessScore, expected_information, score_guesses};
pub use filter::prune;
pub use selector::{SelectionError, choose_best};
