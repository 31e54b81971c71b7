//! SHA-256 hashing for ledger blocks.

use crate::encoding::encode_block_content;
use crate::error::EncodingError;
use ballot_types::{Digest, Vote};
use sha2::{Digest as _, Sha256};

/// Compute a SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Digest of a block holding `votes`, created for `vote`, linked to `previous`.
pub fn block_digest(
    vote: &Vote,
    votes: &[Vote],
    previous: &Digest,
) -> Result<Digest, EncodingError> {
    let bytes = encode_block_content(vote, votes, previous)?;
    Ok(Digest::new(sha256(&bytes)))
}
