//! Fundamental value types for the ballot ledger.
//!
//! This crate defines the small set of types shared by every other crate in
//! the workspace: block digests, voter identifiers and the vote record itself.

pub mod digest;
pub mod vote;
pub mod voter;

pub use digest::Digest;
pub use vote::Vote;
pub use voter::VoterId;
