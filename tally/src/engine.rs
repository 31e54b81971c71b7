//! Walks the ledger and resolves a winner.

use crate::outcome::{Outcome, TallyResult};
use ballot_ledger::Ledger;
use std::collections::BTreeMap;

/// Stateless tally engine.
pub struct TallyEngine;

impl TallyEngine {
    /// Count every vote after genesis and resolve the outcome.
    ///
    /// The tie-set is every candidate sharing the maximum count. One member
    /// is a winner, several are a tie, and an empty ledger has no winner.
    pub fn compute_results(&self, ledger: &Ledger) -> TallyResult {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for vote in ledger.votes() {
            *counts.entry(vote.candidate().to_string()).or_default() += 1;
        }

        let outcome = resolve(&counts);
        tracing::debug!(candidates = counts.len(), ?outcome, "tally computed");
        TallyResult { counts, outcome }
    }
}

/// Convenience wrapper around [`TallyEngine::compute_results`].
pub fn compute_results(ledger: &Ledger) -> TallyResult {
    TallyEngine.compute_results(ledger)
}

fn resolve(counts: &BTreeMap<String, u64>) -> Outcome {
    let Some(max_votes) = counts.values().copied().max() else {
        return Outcome::NoVotes;
    };

    // BTreeMap iteration keeps the tie-set sorted by name.
    let mut tie_set: Vec<String> = counts
        .iter()
        .filter(|(_, votes)| **votes == max_votes)
        .map(|(name, _)| name.clone())
        .collect();

    if tie_set.len() > 1 {
        Outcome::Tie(tie_set)
    } else {
        match tie_set.pop() {
            Some(name) => Outcome::Winner(name),
            None => Outcome::NoVotes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballot_registry::{CandidateRoster, VoterRegistry};
    use ballot_types::VoterId;

    fn ledger_from(ballots: &[&str], declared: &[&str]) -> Ledger {
        let mut voters = VoterRegistry::new();
        let mut roster = CandidateRoster::new();
        for &name in declared {
            roster.declare(name).unwrap();
        }
        let mut ledger = Ledger::new();
        for (i, &candidate) in ballots.iter().enumerate() {
            let id = VoterId::new(i as u64 + 1);
            voters.register(id);
            ledger.append(&voters, &roster, id, candidate).unwrap();
        }
        ledger
    }

    #[test]
    fn clear_winner() {
        let ledger = ledger_from(&["A", "A", "B"], &["A", "B"]);
        let result = compute_results(&ledger);
        assert_eq!(result.count("A"), 2);
        assert_eq!(result.count("B"), 1);
        assert_eq!(result.outcome, Outcome::Winner("A".into()));
        assert_eq!(result.max_votes(), 2);
    }

    #[test]
    fn two_way_tie() {
        let ledger = ledger_from(&["A", "B"], &["A", "B"]);
        let result = compute_results(&ledger);
        assert_eq!(result.outcome, Outcome::Tie(vec!["A".into(), "B".into()]));
    }

    #[test]
    fn tie_set_excludes_trailing_candidates() {
        let ledger = ledger_from(&["C", "A", "B", "C", "A"], &["A", "B", "C"]);
        let result = compute_results(&ledger);
        assert_eq!(result.outcome, Outcome::Tie(vec!["A".into(), "C".into()]));
        assert_eq!(result.total_votes(), 5);
    }

    #[test]
    fn empty_ledger_has_no_winner_and_no_tie() {
        let result = compute_results(&Ledger::new());
        assert!(result.counts.is_empty());
        assert_eq!(result.outcome, Outcome::NoVotes);
        assert!(!result.outcome.is_tie());
    }

    #[test]
    fn sole_declared_candidate_with_zero_votes_is_not_a_winner() {
        let ledger = ledger_from(&[], &["A"]);
        let result = compute_results(&ledger);
        assert_eq!(result.outcome, Outcome::NoVotes);
        assert_eq!(result.count("A"), 0);
    }

    #[test]
    fn single_vote_wins() {
        let ledger = ledger_from(&["B"], &["A", "B"]);
        let result = compute_results(&ledger);
        assert_eq!(result.outcome.winner(), Some("B"));
        assert!(!result.counts.contains_key("A"));
    }

    #[test]
    fn result_serialises_with_tagged_outcome() {
        let ledger = ledger_from(&["A", "B"], &["A", "B"]);
        let json = serde_json::to_value(compute_results(&ledger)).unwrap();
        assert_eq!(json["outcome"]["kind"], "tie");
        assert_eq!(json["counts"]["A"], 1);
    }
}
