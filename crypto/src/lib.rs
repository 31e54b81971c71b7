//! Hashing primitives for the ballot ledger.
//!
//! - **SHA-256** for block digests
//! - A fixed, documented byte encoding of block content (see [`encoding`])
//!   so that independent implementations chain identical digests from
//!   identical votes

pub mod encoding;
pub mod error;
pub mod hash;

pub use encoding::encode_block_content;
pub use error::EncodingError;
pub use hash::{block_digest, sha256, sha256_multi};
