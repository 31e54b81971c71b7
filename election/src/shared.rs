//! Thread-safe election handle.
//!
//! Every operation holds one lock for its whole duration, so the duplicate
//! scan and the append of a ballot can never interleave with another ballot.

use crate::election::Election;
use crate::error::ElectionError;
use ballot_ledger::{BlockRef, ChainSnapshot, VoteRejection};
use ballot_registry::{Declaration, Registration};
use ballot_tally::TallyResult;
use ballot_types::VoterId;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, lock-guarded handle to one [`Election`].
#[derive(Clone, Debug, Default)]
pub struct SharedElection {
    inner: Arc<Mutex<Election>>,
}

impl SharedElection {
    pub fn new(election: Election) -> Self {
        Self {
            inner: Arc::new(Mutex::new(election)),
        }
    }

    pub fn register_voter(&self, voter: VoterId) -> Result<Registration, ElectionError> {
        self.lock().register_voter(voter)
    }

    pub fn declare_candidate(&self, name: &str) -> Result<Declaration, ElectionError> {
        self.lock().declare_candidate(name)
    }

    pub fn cast_vote(&self, voter: VoterId, candidate: &str) -> Result<BlockRef, VoteRejection> {
        self.lock().cast_vote(voter, candidate)
    }

    pub fn get_results(&self) -> TallyResult {
        self.lock().get_results()
    }

    pub fn get_chain(&self) -> ChainSnapshot {
        self.lock().get_chain()
    }

    pub fn verify_chain(&self) -> bool {
        self.lock().verify_chain()
    }

    /// Run `f` with exclusive access to the election.
    pub fn with<R>(&self, f: impl FnOnce(&mut Election) -> R) -> R {
        f(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Election> {
        // Every mutation either completes or leaves the election untouched,
        // so state behind a poisoned lock is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn shared(voters: u64) -> SharedElection {
        let election = SharedElection::default();
        for id in 1..=voters {
            election.register_voter(VoterId::new(id)).unwrap();
        }
        election.declare_candidate("A").unwrap();
        election.declare_candidate("B").unwrap();
        election
    }

    #[test]
    fn concurrent_ballots_for_one_voter_record_once() {
        let election = shared(1);
        let recorded: usize = thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|i| {
                    let election = election.clone();
                    s.spawn(move || {
                        let candidate = if i % 2 == 0 { "A" } else { "B" };
                        election.cast_vote(VoterId::new(1), candidate).is_ok() as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(recorded, 1);
        assert_eq!(election.get_chain().length, 2);
        assert!(election.verify_chain());
    }

    #[test]
    fn concurrent_distinct_voters_all_recorded() {
        let election = shared(32);
        thread::scope(|s| {
            for id in 1..=32u64 {
                let election = election.clone();
                s.spawn(move || {
                    let candidate = if id % 2 == 0 { "A" } else { "B" };
                    election.cast_vote(VoterId::new(id), candidate).unwrap();
                });
            }
        });

        let result = election.get_results();
        assert_eq!(result.total_votes(), 32);
        assert!(result.outcome.is_tie());
        assert!(election.verify_chain());
        assert_eq!(election.with(|e| e.ledger().len()), 33);
    }
}
