//! Ledger block: one accepted vote plus the link to its predecessor.

use ballot_crypto::{block_digest, EncodingError};
use ballot_types::{Digest, Vote};

/// A block in the vote chain.
///
/// Blocks are only built by the ledger and never modified afterwards; the
/// fields are readable through accessors but not writable outside this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Digest of the preceding block (genesis sentinel for the first block).
    pub(crate) previous: Digest,

    /// Digest of this block's content.
    pub(crate) digest: Digest,

    /// Votes held by this block: one for every block but genesis.
    pub(crate) votes: Vec<Vote>,
}

impl Block {
    /// Build a block for `vote` on top of `previous` and compute its digest.
    pub(crate) fn seal(previous: Digest, vote: Vote) -> Result<Self, EncodingError> {
        let votes = vec![vote];
        let digest = block_digest(&votes[0], &votes, &previous)?;
        Ok(Self {
            previous,
            digest,
            votes,
        })
    }

    /// Recompute the digest from the stored fields.
    ///
    /// A block without votes hashes to the genesis sentinel.
    pub fn compute_digest(&self) -> Result<Digest, EncodingError> {
        match self.votes.first() {
            Some(vote) => block_digest(vote, &self.votes, &self.previous),
            None => Ok(Digest::GENESIS),
        }
    }

    pub fn previous(&self) -> &Digest {
        &self.previous
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    /// The single vote of a non-genesis block.
    pub fn vote(&self) -> Option<&Vote> {
        match self.votes.as_slice() {
            [vote] => Some(vote),
            _ => None,
        }
    }

    /// Whether this block has the genesis shape.
    pub fn is_genesis(&self) -> bool {
        self.previous.is_genesis() && self.digest.is_genesis() && self.votes.is_empty()
    }
}
