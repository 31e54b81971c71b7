//! Genesis block creation: the root of every vote chain.
//!
//! The genesis block has no predecessor and no votes. Both of its digest
//! fields carry [`Digest::GENESIS`], which renders as empty text, so the
//! first real block chains onto an empty link.

use crate::block::Block;
use ballot_types::Digest;

/// Create the genesis block.
pub fn create_genesis_block() -> Block {
    Block {
        previous: Digest::GENESIS,
        digest: Digest::GENESIS,
        votes: Vec::new(),
    }
}
