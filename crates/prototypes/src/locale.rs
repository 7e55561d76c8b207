//! LocaleIndex - Fluent message keys found under a locale directory

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::PrototypeError;

/// Where a key was defined
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyLocation {
    pub path: PathBuf,
    pub line: usize,
}

impl std::fmt::Display for KeyLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.line)
    }
}

/// Every message key with all the places it is defined
#[derive(Debug, Default)]
pub struct LocaleIndex {
    keys: BTreeMap<String, Vec<KeyLocation>>,
}

/// `key = value` at the start of a line
static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9_-]+)\s*=").expect("literal regex"));

impl LocaleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan every `*.ftl` file under `dir`, recursively. A missing
    /// directory yields an empty index.
    pub fn load_from_directory(dir: &Path) -> Result<Self, PrototypeError> {
        let mut index = Self::new();
        if !dir.exists() {
            warn!(dir = %dir.display(), "locale directory does not exist");
            return Ok(index);
        }

        let pattern = dir.join("**").join("*.ftl");
        let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!(error = %e, "unreadable locale path");
                    None
                }
            })
            .collect();
        files.sort();

        for path in files {
            let content = std::fs::read_to_string(&path).map_err(|source| PrototypeError::Io {
                path: path.clone(),
                source,
            })?;
            index.add_str(&content, &path);
        }

        debug!(keys = index.len(), "locale keys indexed");
        Ok(index)
    }

    /// Index keys from Fluent text, attributing them to `path`
    pub fn add_str(&mut self, content: &str, path: &Path) {
        for (number, line) in content.lines().enumerate() {
            if let Some(caps) = KEY_PATTERN.captures(line) {
                self.keys
                    .entry(caps[1].to_string())
                    .or_default()
                    .push(KeyLocation {
                        path: path.to_path_buf(),
                        line: number + 1,
                    });
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys defined more than once, with every location
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, &[KeyLocation])> {
        self.keys
            .iter()
            .filter(|(_, locations)| locations.len() > 1)
            .map(|(key, locations)| (key.as_str(), locations.as_slice()))
    }
}
