use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("candidate name must not be empty")]
    EmptyCandidateName,

    #[error("candidate {0} is not on the roster")]
    UnknownCandidate(String),
}
