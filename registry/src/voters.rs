//! Voter registry: who may vote.

use ballot_types::VoterId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Result of a registration attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Registration {
    /// The voter was not known and is now registered.
    Added,
    /// The voter was already registered; nothing changed.
    AlreadyRegistered,
}

/// Set of registered voter ids.
#[derive(Clone, Debug, Default)]
pub struct VoterRegistry {
    voters: BTreeSet<VoterId>,
}

impl VoterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a voter. Registering twice is reported, not an error.
    pub fn register(&mut self, voter: VoterId) -> Registration {
        if self.voters.insert(voter) {
            tracing::info!(%voter, "voter registered");
            Registration::Added
        } else {
            tracing::warn!(%voter, "voter has already registered");
            Registration::AlreadyRegistered
        }
    }

    pub fn is_registered(&self, voter: VoterId) -> bool {
        self.voters.contains(&voter)
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    /// Registered voters in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = VoterId> + '_ {
        self.voters.iter().copied()
    }
}
