use ballot_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElectionError {
    #[error("setup is closed: voting has already started")]
    SetupClosed,

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}
