//! Chain audit: recompute every digest and check every link.

use crate::error::ChainFault;
use crate::ledger::Ledger;

impl Ledger {
    /// Walk the chain from genesis and report the first integrity violation.
    pub fn audit(&self) -> Result<(), ChainFault> {
        let genesis = &self.blocks[0];
        if !genesis.is_genesis() {
            return Err(ChainFault::MalformedGenesis);
        }

        for (index, pair) in self.blocks.windows(2).enumerate() {
            let index = index + 1;
            let (prior, block) = (&pair[0], &pair[1]);

            if block.votes.len() != 1 {
                return Err(ChainFault::MalformedBlock {
                    index,
                    votes: block.votes.len(),
                });
            }
            if block.previous != prior.digest {
                return Err(ChainFault::BrokenLink { index });
            }
            let recomputed = block
                .compute_digest()
                .map_err(|source| ChainFault::Encoding { index, source })?;
            if recomputed != block.digest {
                return Err(ChainFault::DigestMismatch { index });
            }
        }
        Ok(())
    }

    /// `true` when every block's digest and link check out.
    pub fn verify_chain(&self) -> bool {
        match self.audit() {
            Ok(()) => true,
            Err(fault) => {
                tracing::error!(index = fault.index(), "chain verification failed: {fault}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ChainFault;
    use crate::ledger::Ledger;
    use ballot_registry::{CandidateRoster, VoterRegistry};
    use ballot_types::{Digest, Vote, VoterId};

    fn ledger_with_votes(n: u64) -> Ledger {
        let mut voters = VoterRegistry::new();
        let mut roster = CandidateRoster::new();
        roster.declare("A").unwrap();
        roster.declare("B").unwrap();
        let mut ledger = Ledger::new();
        for id in 1..=n {
            voters.register(VoterId::new(id));
            let candidate = if id % 2 == 0 { "B" } else { "A" };
            ledger
                .append(&voters, &roster, VoterId::new(id), candidate)
                .unwrap();
        }
        ledger
    }

    #[test]
    fn fresh_ledger_verifies() {
        assert!(Ledger::new().verify_chain());
    }

    #[test]
    fn appended_chain_verifies() {
        let ledger = ledger_with_votes(6);
        assert_eq!(ledger.audit(), Ok(()));
        assert!(ledger.verify_chain());
    }

    #[test]
    fn corrupted_digest_is_detected() {
        let mut ledger = ledger_with_votes(4);
        ledger.blocks[4].digest = Digest::new([0x55; 32]);
        assert_eq!(ledger.audit(), Err(ChainFault::DigestMismatch { index: 4 }));
        assert!(!ledger.verify_chain());
    }

    #[test]
    fn corrupted_middle_digest_is_reported_at_its_block() {
        let mut ledger = ledger_with_votes(4);
        ledger.blocks[2].digest = Digest::new([0x55; 32]);
        // Block 2's own content no longer matches; that is reported first.
        assert_eq!(ledger.audit(), Err(ChainFault::DigestMismatch { index: 2 }));
    }

    #[test]
    fn corrupted_candidate_is_detected() {
        let mut ledger = ledger_with_votes(3);
        ledger.blocks[1].votes[0] = Vote::new(VoterId::new(1), "B");
        assert_eq!(ledger.audit(), Err(ChainFault::DigestMismatch { index: 1 }));
    }

    #[test]
    fn corrupted_voter_is_detected() {
        let mut ledger = ledger_with_votes(3);
        ledger.blocks[3].votes[0] = Vote::new(VoterId::new(99), "A");
        assert!(!ledger.verify_chain());
    }

    #[test]
    fn rewritten_previous_link_is_detected() {
        let mut ledger = ledger_with_votes(3);
        ledger.blocks[2].previous = Digest::GENESIS;
        assert_eq!(ledger.audit(), Err(ChainFault::BrokenLink { index: 2 }));
    }

    #[test]
    fn extra_vote_in_block_is_malformed() {
        let mut ledger = ledger_with_votes(2);
        ledger.blocks[1].votes.push(Vote::new(VoterId::new(5), "A"));
        assert_eq!(
            ledger.audit(),
            Err(ChainFault::MalformedBlock { index: 1, votes: 2 })
        );
    }

    #[test]
    fn tampered_genesis_is_detected() {
        let mut ledger = ledger_with_votes(1);
        ledger.blocks[0].votes.push(Vote::new(VoterId::new(1), "A"));
        assert_eq!(ledger.audit(), Err(ChainFault::MalformedGenesis));
        assert_eq!(ChainFault::MalformedGenesis.index(), 0);
    }
}
