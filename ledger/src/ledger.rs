//! The vote ledger: an ordered, append-only sequence of blocks.

use crate::block::Block;
use crate::error::VoteRejection;
use crate::genesis::create_genesis_block;
use crate::snapshot::{BlockSnapshot, ChainSnapshot};
use ballot_registry::{CandidateRoster, VoterRegistry};
use ballot_types::{Digest, Vote, VoterId};

/// Handle to a block that was just appended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockRef {
    /// Position in the chain (genesis is 0).
    pub index: usize,
    pub digest: Digest,
}

/// Hash-chained vote ledger, rooted at a genesis block.
#[derive(Clone, Debug)]
pub struct Ledger {
    pub(crate) blocks: Vec<Block>,
}

impl Ledger {
    /// Create a ledger holding only the genesis block.
    pub fn new() -> Self {
        Self {
            blocks: vec![create_genesis_block()],
        }
    }

    /// Validate a vote and, if it passes, append it as a new block.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. the voter is registered,
    /// 2. the voter has no vote anywhere in the chain,
    /// 3. the candidate is on the roster.
    ///
    /// Any rejection, including a hashing failure, leaves the ledger as it was.
    pub fn append(
        &mut self,
        voters: &VoterRegistry,
        roster: &CandidateRoster,
        voter: VoterId,
        candidate: &str,
    ) -> Result<BlockRef, VoteRejection> {
        if !voters.is_registered(voter) {
            tracing::warn!(%voter, "invalid voter id");
            return Err(VoteRejection::UnregisteredVoter(voter));
        }
        if self.has_voted(voter) {
            tracing::warn!(%voter, "voter has already cast a vote");
            return Err(VoteRejection::DuplicateVote(voter));
        }
        if !roster.is_valid(candidate) {
            tracing::warn!(%voter, candidate, "candidate does not exist");
            return Err(VoteRejection::UnknownCandidate(candidate.to_string()));
        }

        let previous = *self.head().digest();
        let block = Block::seal(previous, Vote::new(voter, candidate)).map_err(|e| {
            tracing::error!(%voter, "error in conversion to bytes: {e}");
            VoteRejection::from(e)
        })?;

        let block_ref = BlockRef {
            index: self.blocks.len(),
            digest: *block.digest(),
        };
        tracing::debug!(index = block_ref.index, digest = %block_ref.digest, "block sealed");
        self.blocks.push(block);
        tracing::info!(%voter, candidate, "vote recorded");
        Ok(block_ref)
    }

    /// Whether `voter` appears in any block after genesis.
    pub fn has_voted(&self, voter: VoterId) -> bool {
        self.votes().any(|vote| vote.voter() == voter)
    }

    /// The most recently appended block (genesis when no vote was recorded).
    pub fn head(&self) -> &Block {
        // `blocks` always holds at least the genesis block.
        &self.blocks[self.blocks.len() - 1]
    }

    /// Number of blocks including genesis.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Number of recorded votes (blocks after genesis).
    pub fn vote_count(&self) -> usize {
        self.blocks.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Every recorded vote in chain order, genesis excluded.
    pub fn votes(&self) -> impl Iterator<Item = &Vote> + '_ {
        self.blocks.iter().skip(1).flat_map(|block| block.votes.iter())
    }

    /// Display/audit copy of the whole chain.
    pub fn snapshot(&self) -> ChainSnapshot {
        let blocks = self
            .blocks
            .iter()
            .enumerate()
            .map(|(index, block)| BlockSnapshot::of(index, block))
            .collect();
        ChainSnapshot::new(blocks)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(voters: &[u64], candidates: &[&str]) -> (VoterRegistry, CandidateRoster) {
        let mut registry = VoterRegistry::new();
        for &id in voters {
            registry.register(VoterId::new(id));
        }
        let mut roster = CandidateRoster::new();
        for &name in candidates {
            roster.declare(name).unwrap();
        }
        (registry, roster)
    }

    #[test]
    fn new_ledger_holds_only_genesis() {
        let ledger = Ledger::new();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.vote_count(), 0);
        assert!(ledger.head().is_genesis());
        assert_eq!(ledger.votes().count(), 0);
    }

    #[test]
    fn append_links_to_previous_head() {
        let (voters, roster) = setup(&[1, 2], &["A"]);
        let mut ledger = Ledger::new();

        let first = ledger.append(&voters, &roster, VoterId::new(1), "A").unwrap();
        assert_eq!(first.index, 1);
        assert!(ledger.get(1).unwrap().previous().is_genesis());

        let second = ledger.append(&voters, &roster, VoterId::new(2), "A").unwrap();
        assert_eq!(second.index, 2);
        assert_eq!(*ledger.get(2).unwrap().previous(), first.digest);
        assert_eq!(*ledger.head().digest(), second.digest);
    }

    #[test]
    fn unregistered_voter_is_rejected_first() {
        let (voters, roster) = setup(&[1], &["A"]);
        let mut ledger = Ledger::new();
        // Unknown candidate too, but registration is checked first.
        let err = ledger.append(&voters, &roster, VoterId::new(11), "C").unwrap_err();
        assert_eq!(err, VoteRejection::UnregisteredVoter(VoterId::new(11)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn duplicate_is_checked_before_candidate() {
        let (voters, roster) = setup(&[3], &["A"]);
        let mut ledger = Ledger::new();
        ledger.append(&voters, &roster, VoterId::new(3), "A").unwrap();
        let err = ledger.append(&voters, &roster, VoterId::new(3), "Z").unwrap_err();
        assert_eq!(err, VoteRejection::DuplicateVote(VoterId::new(3)));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn duplicate_detected_deep_in_history() {
        let (voters, roster) = setup(&[1, 2, 3, 4], &["A", "B"]);
        let mut ledger = Ledger::new();
        ledger.append(&voters, &roster, VoterId::new(1), "A").unwrap();
        ledger.append(&voters, &roster, VoterId::new(2), "B").unwrap();
        ledger.append(&voters, &roster, VoterId::new(3), "A").unwrap();

        // Voter 1 is not in the last block but must still be caught.
        let err = ledger.append(&voters, &roster, VoterId::new(1), "B").unwrap_err();
        assert_eq!(err, VoteRejection::DuplicateVote(VoterId::new(1)));
        assert!(ledger.has_voted(VoterId::new(1)));
        assert!(!ledger.has_voted(VoterId::new(4)));
    }

    #[test]
    fn unknown_candidate_is_rejected() {
        let (voters, roster) = setup(&[7], &["A", "B"]);
        let mut ledger = Ledger::new();
        let err = ledger.append(&voters, &roster, VoterId::new(7), "C").unwrap_err();
        assert_eq!(err, VoteRejection::UnknownCandidate("C".into()));
        assert_eq!(ledger.len(), 1);
        assert!(!ledger.has_voted(VoterId::new(7)));
    }

    #[test]
    fn encoding_failure_leaves_ledger_unchanged() {
        let id = u64::MAX;
        let (voters, roster) = setup(&[1, id], &["A"]);
        let mut ledger = Ledger::new();
        ledger.append(&voters, &roster, VoterId::new(1), "A").unwrap();
        let before = ledger.snapshot();

        let err = ledger.append(&voters, &roster, VoterId::new(id), "A").unwrap_err();
        assert!(matches!(err, VoteRejection::HashEncoding(_)));
        assert_eq!(ledger.snapshot(), before);
    }

    #[test]
    fn votes_iterates_in_chain_order() {
        let (voters, roster) = setup(&[1, 2], &["A", "B"]);
        let mut ledger = Ledger::new();
        ledger.append(&voters, &roster, VoterId::new(2), "B").unwrap();
        ledger.append(&voters, &roster, VoterId::new(1), "A").unwrap();
        let ids: Vec<u64> = ledger.votes().map(|v| v.voter().get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
