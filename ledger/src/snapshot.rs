//! Chain snapshots: plain, serialisable copies of the ledger for display
//! and audit export.

use crate::block::Block;
use ballot_types::Vote;
use serde::{Deserialize, Serialize};

/// A copy of one block, with digests rendered as text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSnapshot {
    pub index: usize,
    /// Previous digest as lowercase hex; empty for the genesis link.
    pub previous: String,
    /// This block's digest as lowercase hex; empty for genesis.
    pub digest: String,
    pub votes: Vec<Vote>,
}

impl BlockSnapshot {
    pub(crate) fn of(index: usize, block: &Block) -> Self {
        Self {
            index,
            previous: block.previous().link_text(),
            digest: block.digest().link_text(),
            votes: block.votes().to_vec(),
        }
    }
}

/// The whole chain at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    /// Number of blocks including genesis.
    pub length: usize,
    /// Digest of the last block.
    pub head: String,
    pub blocks: Vec<BlockSnapshot>,
}

impl ChainSnapshot {
    pub(crate) fn new(blocks: Vec<BlockSnapshot>) -> Self {
        let head = blocks
            .last()
            .map(|block| block.digest.clone())
            .unwrap_or_default();
        Self {
            length: blocks.len(),
            head,
            blocks,
        }
    }
}
