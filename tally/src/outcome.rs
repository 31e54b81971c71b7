//! Tally results and how the winner was resolved.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the election resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "candidates", rename_all = "snake_case")]
pub enum Outcome {
    /// One candidate holds strictly more votes than every other.
    Winner(String),
    /// Two or more candidates share the highest count (sorted by name).
    Tie(Vec<String>),
    /// No vote was recorded. Not a tie.
    NoVotes,
}

impl Outcome {
    pub fn winner(&self) -> Option<&str> {
        match self {
            Self::Winner(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Self::Tie(_))
    }
}

/// Per-candidate totals and the resolved outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyResult {
    /// Votes per candidate, only for candidates with at least one vote.
    pub counts: BTreeMap<String, u64>,
    pub outcome: Outcome,
}

impl TallyResult {
    /// Highest count among all candidates, or 0 when nothing was cast.
    pub fn max_votes(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Total number of counted votes.
    pub fn total_votes(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn count(&self, candidate: &str) -> u64 {
        self.counts.get(candidate).copied().unwrap_or(0)
    }
}
