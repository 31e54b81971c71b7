//! Tally engine for the vote chain.
//!
//! Results are always re-derived by walking the ledger; roster counters are
//! never consulted.

pub mod engine;
pub mod outcome;

pub use engine::{compute_results, TallyEngine};
pub use outcome::{Outcome, TallyResult};
