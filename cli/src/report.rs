//! Text and JSON rendering of an election run.

use ballot_election::{
    BlockRef, BlockSnapshot, ChainSnapshot, Outcome, TallyResult, Vote, VoteOutcome,
    VoteRejection, VoterId,
};
use serde::Serialize;
use std::fmt::Write as _;

/// One submitted ballot and what happened to it.
#[derive(Debug, Serialize)]
pub struct BallotReport {
    pub voter: u64,
    pub candidate: String,
    pub outcome: &'static str,
    /// Chain position when the ballot was recorded.
    pub block: Option<usize>,
}

impl BallotReport {
    pub fn new(voter: VoterId, candidate: &str, result: &Result<BlockRef, VoteRejection>) -> Self {
        Self {
            voter: voter.get(),
            candidate: candidate.to_string(),
            outcome: VoteOutcome::from(result).label(),
            block: result.as_ref().ok().map(|block| block.index),
        }
    }
}

/// Machine-readable summary printed with `run --json`.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub ballots: Vec<BallotReport>,
    pub results: TallyResult,
    pub chain_valid: bool,
    pub chain: ChainSnapshot,
}

/// Console line for a submitted ballot.
pub fn ballot_line(voter: VoterId, candidate: &str, result: &Result<BlockRef, VoteRejection>) -> String {
    match result {
        Ok(_) => format!("Vote cast by Voter {voter} for {candidate} is recorded."),
        Err(VoteRejection::UnregisteredVoter(id)) => format!("Invalid voter ID: {id}"),
        Err(VoteRejection::DuplicateVote(id)) => format!("Voter {id} has already cast a vote."),
        Err(VoteRejection::UnknownCandidate(name)) => format!("Candidate {name} does not exist."),
        Err(VoteRejection::HashEncoding(e)) => format!("Error in conversion to bytes: {e}"),
    }
}

/// Results section: per-candidate totals followed by the outcome.
pub fn results_text(results: &TallyResult) -> String {
    let mut out = String::from("\nElection Results:\n");
    for (candidate, votes) in &results.counts {
        let _ = writeln!(out, "{candidate}: {votes} votes");
    }
    match &results.outcome {
        Outcome::Winner(name) => {
            let _ = writeln!(out, "Winner: {name}");
        }
        Outcome::Tie(_) => out.push_str("Election resulted in a tie.\n"),
        Outcome::NoVotes => out.push_str("No votes were cast.\n"),
    }
    out
}

/// Chain listing, one stanza per block.
pub fn chain_text(chain: &ChainSnapshot) -> String {
    let mut out = String::from("\nBlockchain:\n");
    for block in &chain.blocks {
        out.push_str(&block_text(block));
    }
    out
}

fn block_text(block: &BlockSnapshot) -> String {
    format!(
        "Block {}\nPrevHash: {}\nCurrentHash: {}\nVotes: {}\n\n",
        block.index,
        block.previous,
        block.digest,
        votes_text(&block.votes)
    )
}

fn votes_text(votes: &[Vote]) -> String {
    let inner: Vec<String> = votes.iter().map(Vote::to_string).collect();
    format!("[{}]", inner.join(" "))
}
