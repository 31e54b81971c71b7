//! Append-only, hash-chained vote ledger.
//!
//! The chain starts with a vote-less genesis block. Every accepted vote adds
//! exactly one block whose `previous` field is the digest of the block
//! before it, so altering any stored block breaks every link after it.
//! Appends are gated by voter registration, a full-chain duplicate scan and
//! candidate membership, checked in that order.

pub mod audit;
pub mod block;
pub mod error;
pub mod genesis;
pub mod ledger;
pub mod snapshot;

pub use block::Block;
pub use error::{ChainFault, VoteRejection};
pub use genesis::create_genesis_block;
pub use ledger::{BlockRef, Ledger};
pub use snapshot::{BlockSnapshot, ChainSnapshot};
