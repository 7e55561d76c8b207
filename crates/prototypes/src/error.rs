//! Error types for prototype loading

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrototypeError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Document #{index} in {path} has no 'type' field")]
    MissingType { path: PathBuf, index: usize },

    #[error("{path} must contain a list of prototypes or a 'prototypes' list")]
    InvalidShape { path: PathBuf },

    #[error("Directory {path} does not exist")]
    MissingDirectory { path: PathBuf },

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
