//! wordgain
//!
//! An entropy-maximization guess-selection engine for 5-letter word games.
//! Each turn it scores every legal guess by the Shannon entropy of the
//! feedback distribution it induces over the remaining candidates and plays
//! the guess that narrows the candidate set fastest.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgain::core::{Pattern, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("trace").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &target);
//! assert_eq!(format!("{pattern}"), "yggbg");
//! ```

// Core domain types
pub mod core;

// Answer and guess universes
pub mod lexicon;

// Scoring, filtering, and selection
pub mod solver;

// Automated playthroughs and batch benchmarking
pub mod sim;
