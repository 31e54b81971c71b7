//! Scenario configuration with TOML file support.

use ballot_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// One ballot to submit, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub voter: u64,
    pub candidate: String,
}

impl Ballot {
    fn new(voter: u64, candidate: &str) -> Self {
        Self {
            voter,
            candidate: candidate.to_string(),
        }
    }
}

/// A complete election run: who may vote, who may be voted for, and the
/// ballots to submit.
///
/// Can be loaded from a TOML file via [`ScenarioConfig::from_toml_file`];
/// every field falls back to the built-in demo when omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Candidates declared before voting opens.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,

    /// Voter ids registered before voting opens.
    #[serde(default = "default_voters")]
    pub voters: Vec<u64>,

    /// Ballots submitted in order once setup is done.
    #[serde(default = "default_ballots")]
    pub ballots: Vec<Ballot>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_candidates() -> Vec<String> {
    vec!["Candidate A".to_string(), "Candidate B".to_string()]
}

fn default_voters() -> Vec<u64> {
    (1..=10).collect()
}

fn default_ballots() -> Vec<Ballot> {
    vec![
        Ballot::new(1, "Candidate A"),
        Ballot::new(2, "Candidate B"),
        Ballot::new(3, "Candidate A"),
        Ballot::new(3, "Candidate B"),
        Ballot::new(4, "Candidate B"),
        Ballot::new(5, "Candidate A"),
        Ballot::new(5, "Candidate A"),
        Ballot::new(6, "Candidate B"),
        Ballot::new(7, "Candidate C"),
        Ballot::new(11, "Candidate B"),
    ]
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ScenarioConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            candidates: default_candidates(),
            voters: default_voters(),
            ballots: default_ballots(),
        }
    }
}
