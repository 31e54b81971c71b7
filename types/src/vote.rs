//! The vote record stored inside ledger blocks.

use crate::voter::VoterId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single vote: who voted, and for which candidate.
///
/// Fields are private so a vote cannot change once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vote {
    voter: VoterId,
    candidate: String,
}

impl Vote {
    pub fn new(voter: VoterId, candidate: impl Into<String>) -> Self {
        Self {
            voter,
            candidate: candidate.into(),
        }
    }

    pub fn voter(&self) -> VoterId {
        self.voter
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.voter, self.candidate)
    }
}
