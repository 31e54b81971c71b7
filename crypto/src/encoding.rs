//! Canonical byte encoding of block content.
//!
//! The digest input for a block is the concatenation, in order, of:
//!
//! 1. the new vote: voter id as an `i64` in little-endian (8 bytes),
//!    followed by the candidate name's UTF-8 bytes;
//! 2. the same encoding for every vote held by the new block (exactly one);
//! 3. the previous block's digest as lowercase hex text, or nothing when the
//!    predecessor is the genesis block.
//!
//! Fields are not length-prefixed. The layout is reproducible but not
//! collision-hardened against adversarial candidate names. Changing any part
//! of it changes every digest in every chain.

use crate::error::EncodingError;
use ballot_types::{Digest, Vote};

/// Encode `(vote, votes, previous)` into the canonical digest input.
pub fn encode_block_content(
    vote: &Vote,
    votes: &[Vote],
    previous: &Digest,
) -> Result<Vec<u8>, EncodingError> {
    let link = previous.link_text();
    let capacity = encoded_vote_len(vote)
        + votes.iter().map(encoded_vote_len).sum::<usize>()
        + link.len();
    let mut buffer = Vec::with_capacity(capacity);

    put_vote(&mut buffer, vote)?;
    for v in votes {
        put_vote(&mut buffer, v)?;
    }
    buffer.extend_from_slice(link.as_bytes());
    Ok(buffer)
}

fn put_vote(buffer: &mut Vec<u8>, vote: &Vote) -> Result<(), EncodingError> {
    let id = i64::try_from(vote.voter().get())
        .map_err(|_| EncodingError::VoterIdOutOfRange(vote.voter()))?;
    buffer.extend_from_slice(&id.to_le_bytes());
    buffer.extend_from_slice(vote.candidate().as_bytes());
    Ok(())
}

fn encoded_vote_len(vote: &Vote) -> usize {
    8 + vote.candidate().len()
}
