use ballot_crypto::EncodingError;
use ballot_types::VoterId;
use thiserror::Error;

/// Why a vote was not appended. The ledger is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteRejection {
    #[error("invalid voter id: {0}")]
    UnregisteredVoter(VoterId),

    #[error("voter {0} has already cast a vote")]
    DuplicateVote(VoterId),

    #[error("candidate {0} does not exist")]
    UnknownCandidate(String),

    #[error("failed to encode block for hashing: {0}")]
    HashEncoding(#[from] EncodingError),
}

/// First integrity violation found while auditing the chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainFault {
    #[error("block 0 is not a well-formed genesis block")]
    MalformedGenesis,

    #[error("block {index} holds {votes} votes, expected exactly one")]
    MalformedBlock { index: usize, votes: usize },

    #[error("block {index} does not link to the digest of its predecessor")]
    BrokenLink { index: usize },

    #[error("block {index} digest does not match its content")]
    DigestMismatch { index: usize },

    #[error("block {index} cannot be re-encoded: {source}")]
    Encoding {
        index: usize,
        #[source]
        source: EncodingError,
    },
}

impl ChainFault {
    /// Position of the offending block.
    pub fn index(&self) -> usize {
        match self {
            Self::MalformedGenesis => 0,
            Self::MalformedBlock { index, .. }
            | Self::BrokenLink { index }
            | Self::DigestMismatch { index }
            | Self::Encoding { index, .. } => *index,
        }
    }
}
