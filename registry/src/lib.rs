//! Eligibility bookkeeping for an election.
//!
//! - [`VoterRegistry`]: the set of voter ids allowed to cast a ballot.
//! - [`CandidateRoster`]: the fixed set of candidates, with running counters.
//!
//! Both are filled during setup and only read while votes are being cast.
//! The roster counters are informational; final results are always derived
//! from the ledger.

pub mod candidates;
pub mod error;
pub mod voters;

pub use candidates::{CandidateRoster, Declaration};
pub use error::RegistryError;
pub use voters::{Registration, VoterRegistry};
