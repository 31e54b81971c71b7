//! Block digest type for the hash-chained ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte SHA-256 digest identifying a block in the chain.
///
/// The all-zero value is reserved as the genesis sentinel: the genesis block
/// carries it both as its own digest and as its (absent) predecessor link.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Digest([u8; 32]);

impl Default for Digest {
    fn default() -> Self {
        Self::GENESIS
    }
}

impl Digest {
    pub const GENESIS: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_genesis(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Textual form used when this digest is chained into the next block.
    ///
    /// Lowercase hex for real digests, the empty string for the genesis
    /// sentinel. This is also the form shown in chain listings.
    pub fn link_text(&self) -> String {
        if self.is_genesis() {
            String::new()
        } else {
            hex::encode(self.0)
        }
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_genesis() {
            return write!(f, "Digest(genesis)");
        }
        write!(f, "Digest(")?;
        for b in &self.0[..4] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "\u{2026})")
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.link_text())
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}
