//! Error types for Genesis

use genesis_domain::{CarryError, JoinQueueError, RepositoryError};
use thiserror::Error;

/// Error thrown when a config file has an extension we cannot parse
#[derive(Debug, Error)]
#[error("Unsupported config format '{extension}' for {path}. Expected one of: yml, yaml, json")]
pub struct UnsupportedConfigFormatError {
    pub path: String,
    pub extension: String,
}

/// General Genesis error type
#[derive(Debug, Error)]
pub enum GenesisError {
    #[error(transparent)]
    UnsupportedConfigFormat(#[from] UnsupportedConfigFormatError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Join queue error: {0}")]
    JoinQueue(String),

    #[error("Carry error: {0}")]
    Carry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

impl From<RepositoryError> for GenesisError {
    fn from(e: RepositoryError) -> Self {
        GenesisError::Repository(e.to_string())
    }
}

impl From<JoinQueueError> for GenesisError {
    fn from(e: JoinQueueError) -> Self {
        GenesisError::JoinQueue(e.to_string())
    }
}

impl From<CarryError> for GenesisError {
    fn from(e: CarryError) -> Self {
        GenesisError::Carry(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GenesisError>;
