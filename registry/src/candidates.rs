//! Candidate roster: who may be voted for, with running counters.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of declaring a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Declaration {
    Added,
    AlreadyDeclared,
}

/// Fixed set of candidates and the number of accepted votes seen for each.
#[derive(Clone, Debug, Default)]
pub struct CandidateRoster {
    counts: BTreeMap<String, u64>,
}

impl CandidateRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate with a zero counter.
    ///
    /// Declaring an existing candidate leaves its counter untouched.
    pub fn declare(&mut self, name: impl Into<String>) -> Result<Declaration, RegistryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::EmptyCandidateName);
        }
        if self.counts.contains_key(&name) {
            tracing::warn!(candidate = %name, "candidate already declared");
            return Ok(Declaration::AlreadyDeclared);
        }
        tracing::info!(candidate = %name, "candidate declared");
        self.counts.insert(name, 0);
        Ok(Declaration::Added)
    }

    pub fn is_valid(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }

    /// Bump the counter for `name`, returning the new value.
    pub fn increment(&mut self, name: &str) -> Result<u64, RegistryError> {
        let count = self
            .counts
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownCandidate(name.to_string()))?;
        *count += 1;
        Ok(*count)
    }

    pub fn count(&self, name: &str) -> Option<u64> {
        self.counts.get(name).copied()
    }

    /// Counter snapshot keyed by candidate name.
    pub fn counts(&self) -> &BTreeMap<String, u64> {
        &self.counts
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
