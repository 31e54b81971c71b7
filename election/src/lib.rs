//! Election facade over the vote ledger.
//!
//! An [`Election`] owns its voter registry, candidate roster and ledger.
//! Callers register voters and declare candidates, cast ballots, then read
//! results and the chain back. [`SharedElection`] wraps one election behind
//! a lock for callers that submit ballots from several threads.

pub mod election;
pub mod error;
pub mod outcome;
pub mod shared;

pub use election::{Election, Phase};
pub use error::ElectionError;
pub use outcome::VoteOutcome;
pub use shared::SharedElection;

pub use ballot_ledger::{BlockRef, BlockSnapshot, ChainFault, ChainSnapshot, VoteRejection};
pub use ballot_registry::{Declaration, Registration};
pub use ballot_tally::{Outcome, TallyResult};
pub use ballot_types::{Digest, Vote, VoterId};
