//! Single-process election: setup, voting, results.

use crate::error::ElectionError;
use ballot_ledger::{BlockRef, ChainFault, ChainSnapshot, Ledger, VoteRejection};
use ballot_registry::{CandidateRoster, Declaration, Registration, VoterRegistry};
use ballot_tally::{TallyEngine, TallyResult};
use ballot_types::VoterId;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of an election.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Voters and candidates may be added.
    Setup,
    /// At least one ballot was submitted; registry and roster are frozen.
    Voting,
}

/// An election with its own registry, roster and ledger.
#[derive(Clone, Debug)]
pub struct Election {
    voters: VoterRegistry,
    roster: CandidateRoster,
    ledger: Ledger,
    phase: Phase,
}

impl Election {
    pub fn new() -> Self {
        Self {
            voters: VoterRegistry::new(),
            roster: CandidateRoster::new(),
            ledger: Ledger::new(),
            phase: Phase::Setup,
        }
    }

    pub fn register_voter(&mut self, voter: VoterId) -> Result<Registration, ElectionError> {
        self.ensure_setup()?;
        Ok(self.voters.register(voter))
    }

    pub fn declare_candidate(&mut self, name: &str) -> Result<Declaration, ElectionError> {
        self.ensure_setup()?;
        Ok(self.roster.declare(name)?)
    }

    /// Submit a ballot. The first submission closes setup.
    pub fn cast_vote(&mut self, voter: VoterId, candidate: &str) -> Result<BlockRef, VoteRejection> {
        if self.phase == Phase::Setup {
            tracing::info!(
                voters = self.voters.len(),
                candidates = self.roster.len(),
                "voting opened"
            );
            self.phase = Phase::Voting;
        }

        let block = self.ledger.append(&self.voters, &self.roster, voter, candidate)?;
        if let Err(e) = self.roster.increment(candidate) {
            // The ledger already validated the candidate; the chain stays authoritative.
            tracing::warn!(candidate, "roster counter not updated: {e}");
        }
        Ok(block)
    }

    /// Tally the chain. Roster counters are compared but never used.
    pub fn get_results(&self) -> TallyResult {
        let result = TallyEngine.compute_results(&self.ledger);
        if !self.counters_agree(&result) {
            tracing::warn!("roster counters disagree with the chain tally");
        }
        result
    }

    /// Whether every roster counter equals the chain-derived count.
    pub fn counters_agree(&self, result: &TallyResult) -> bool {
        let roster_total: u64 = self.roster.counts().values().sum();
        roster_total == result.total_votes()
            && self
                .roster
                .counts()
                .iter()
                .all(|(name, &count)| result.count(name) == count)
    }

    pub fn get_chain(&self) -> ChainSnapshot {
        self.ledger.snapshot()
    }

    pub fn verify_chain(&self) -> bool {
        self.ledger.verify_chain()
    }

    pub fn audit(&self) -> Result<(), ChainFault> {
        self.ledger.audit()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn voters(&self) -> &VoterRegistry {
        &self.voters
    }

    pub fn roster(&self) -> &CandidateRoster {
        &self.roster
    }

    fn ensure_setup(&self) -> Result<(), ElectionError> {
        match self.phase {
            Phase::Setup => Ok(()),
            Phase::Voting => Err(ElectionError::SetupClosed),
        }
    }
}

impl Default for Election {
    fn default() -> Self {
        Self::new()
    }
}
