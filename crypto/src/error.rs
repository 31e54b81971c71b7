use ballot_types::VoterId;
use thiserror::Error;

/// Failure to produce the canonical byte encoding of a block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("voter id {0} does not fit the signed 64-bit wire encoding")]
    VoterIdOutOfRange(VoterId),
}
