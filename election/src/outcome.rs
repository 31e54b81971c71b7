//! Caller-facing outcome of a single ballot.

use ballot_ledger::{BlockRef, VoteRejection};
use std::fmt;

/// What happened to a submitted ballot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    Recorded(BlockRef),
    UnregisteredVoter,
    DuplicateVote,
    UnknownCandidate,
    HashEncodingFailure,
}

impl VoteOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded(_))
    }

    /// Short, stable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Recorded(_) => "recorded",
            Self::UnregisteredVoter => "unregistered_voter",
            Self::DuplicateVote => "duplicate_vote",
            Self::UnknownCandidate => "unknown_candidate",
            Self::HashEncodingFailure => "hash_encoding_failure",
        }
    }
}

impl From<&VoteRejection> for VoteOutcome {
    fn from(rejection: &VoteRejection) -> Self {
        match rejection {
            VoteRejection::UnregisteredVoter(_) => Self::UnregisteredVoter,
            VoteRejection::DuplicateVote(_) => Self::DuplicateVote,
            VoteRejection::UnknownCandidate(_) => Self::UnknownCandidate,
            VoteRejection::HashEncoding(_) => Self::HashEncodingFailure,
        }
    }
}

impl From<&Result<BlockRef, VoteRejection>> for VoteOutcome {
    fn from(result: &Result<BlockRef, VoteRejection>) -> Self {
        match result {
            Ok(block) => Self::Recorded(*block),
            Err(rejection) => rejection.into(),
        }
    }
}

impl From<Result<BlockRef, VoteRejection>> for VoteOutcome {
    fn from(result: Result<BlockRef, VoteRejection>) -> Self {
        Self::from(&result)
    }
}

impl fmt::Display for VoteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
