//! Configuration types for Genesis

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::UnsupportedConfigFormatError;

/// Join-queue settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinQueueConfig {
    /// Whether the queue gates admissions
    #[serde(default)]
    pub enabled: bool,

    /// How often `genesis serve` logs the gate status
    #[serde(default = "default_status_interval")]
    pub status_interval_secs: u64,
}

fn default_status_interval() -> u64 {
    30
}

impl Default for JoinQueueConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            status_interval_secs: default_status_interval(),
        }
    }
}

/// Server configuration (`genesis.yml` / `genesis.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default)]
    pub join_queue: JoinQueueConfig,

    /// Root of the YAML prototype tree
    #[serde(default = "default_prototypes_dir")]
    pub prototypes_dir: PathBuf,

    /// Root of the Fluent locale tree
    #[serde(default = "default_locale_dir")]
    pub locale_dir: PathBuf,

    /// `tracing` filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_prototypes_dir() -> PathBuf {
    PathBuf::from("Resources/Prototypes")
}

fn default_locale_dir() -> PathBuf {
    PathBuf::from("Resources/Locale")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            join_queue: JoinQueueConfig::default(),
            prototypes_dir: default_prototypes_dir(),
            locale_dir: default_locale_dir(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML or JSON file, chosen by extension
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let config = match extension.as_str() {
            "yml" | "yaml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => {
                return Err(UnsupportedConfigFormatError {
                    path: path.display().to_string(),
                    extension,
                }
                .into())
            }
        };
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolve relative directories against the config file's location
    pub fn rebase(mut self, base: &Path) -> Self {
        if self.prototypes_dir.is_relative() {
            self.prototypes_dir = base.join(&self.prototypes_dir);
        }
        if self.locale_dir.is_relative() {
            self.locale_dir = base.join(&self.locale_dir);
        }
        self
    }
}
