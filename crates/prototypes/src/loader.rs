//! PrototypeLoader - Load prototype documents from a directory of YAML files
//!
//! A file is either a top-level list of documents or a mapping with a
//! `prototypes:` list. A file that fails to parse is recorded and skipped;
//! the rest of the directory still loads. A single document that doesn't
//! fit its typed shape is kept untyped, with its id.

use std::path::{Path, PathBuf};

use genesis_domain::model::felinid::FelinidComponent;
use serde_yaml::Value;
use tracing::{debug, warn};

use crate::document::{
    JobPrototype, MindFilterPrototype, Prototype, SoundCollectionPrototype,
};
use crate::error::PrototypeError;

/// A document together with the file it came from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPrototype {
    pub prototype: Prototype,
    pub path: PathBuf,
}

/// Prototype loader
#[derive(Debug, Default)]
pub struct PrototypeLoader {
    prototypes: Vec<LoadedPrototype>,
    errors: Vec<PrototypeError>,
}

impl PrototypeLoader {
    /// Create a new PrototypeLoader
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.yml` / `*.yaml` file under `dir`, recursively.
    ///
    /// Files are visited in path order so the result is stable. A missing
    /// directory loads nothing and is recorded in `errors`.
    pub fn load_from_directory(&mut self, dir: &Path) -> Result<(), PrototypeError> {
        if !dir.exists() {
            warn!(dir = %dir.display(), "prototype directory does not exist");
            self.errors.push(PrototypeError::MissingDirectory {
                path: dir.to_path_buf(),
            });
            return Ok(());
        }

        let mut files = Vec::new();
        for ext in ["yml", "yaml"] {
            let pattern = dir.join("**").join(format!("*.{}", ext));
            for entry in glob::glob(&pattern.to_string_lossy())? {
                match entry {
                    Ok(path) if path.is_file() => files.push(path),
                    Ok(_) => {}
                    Err(e) => warn!(error = %e, "unreadable prototype path"),
                }
            }
        }
        files.sort();

        for path in files {
            if let Err(e) = self.load_file(&path) {
                warn!(error = %e, "skipping prototype file");
                self.errors.push(e);
            }
        }

        debug!(
            count = self.prototypes.len(),
            errors = self.errors.len(),
            "prototypes loaded"
        );
        Ok(())
    }

    /// Load a single prototype file
    pub fn load_file(&mut self, path: &Path) -> Result<(), PrototypeError> {
        let content = std::fs::read_to_string(path).map_err(|source| PrototypeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&content, path)
    }

    /// Load documents from YAML text, attributing them to `path`
    pub fn load_str(&mut self, content: &str, path: &Path) -> Result<(), PrototypeError> {
        let root: Value =
            serde_yaml::from_str(content).map_err(|source| PrototypeError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;
        let documents = match root {
            Value::Null => return Ok(()),
            Value::Sequence(docs) => docs,
            Value::Mapping(mut map) => match map.remove("prototypes") {
                Some(Value::Sequence(docs)) => docs,
                _ => {
                    return Err(PrototypeError::InvalidShape {
                        path: path.to_path_buf(),
                    })
                }
            },
            _ => {
                return Err(PrototypeError::InvalidShape {
                    path: path.to_path_buf(),
                })
            }
        };

        // Decode the whole file before committing any of it
        let mut decoded = Vec::with_capacity(documents.len());
        for (index, document) in documents.into_iter().enumerate() {
            let Some(kind) = document.get("type").and_then(Value::as_str).map(str::to_owned)
            else {
                return Err(PrototypeError::MissingType {
                    path: path.to_path_buf(),
                    index,
                });
            };
            // A document we can't type still keeps its id for the checks
            let prototype = match Prototype::from_value(&kind, document.clone()) {
                Ok(prototype) => prototype,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        index,
                        kind = %kind,
                        error = %e,
                        "keeping untyped prototype"
                    );
                    Prototype::untyped(&kind, &document)
                }
            };
            decoded.push(LoadedPrototype {
                prototype,
                path: path.to_path_buf(),
            });
        }

        self.prototypes.extend(decoded);
        Ok(())
    }

    // ========== Getters ==========

    /// All loaded documents, in load order
    pub fn prototypes(&self) -> &[LoadedPrototype] {
        &self.prototypes
    }

    /// Files (or directories) that could not be loaded
    pub fn errors(&self) -> &[PrototypeError] {
        &self.errors
    }

    pub fn jobs(&self) -> impl Iterator<Item = &JobPrototype> {
        self.prototypes.iter().filter_map(|p| match &p.prototype {
            Prototype::Job(job) => Some(job),
            _ => None,
        })
    }

    pub fn sound_collections(&self) -> impl Iterator<Item = &SoundCollectionPrototype> {
        self.prototypes.iter().filter_map(|p| match &p.prototype {
            Prototype::SoundCollection(collection) => Some(collection),
            _ => None,
        })
    }

    pub fn mind_filters(&self) -> impl Iterator<Item = &MindFilterPrototype> {
        self.prototypes.iter().filter_map(|p| match &p.prototype {
            Prototype::MindFilter(filter) => Some(filter),
            _ => None,
        })
    }

    /// Felinid component for an entity prototype, if it declares one
    pub fn felinid_for(&self, entity_id: &str) -> Option<FelinidComponent> {
        self.prototypes.iter().find_map(|p| match &p.prototype {
            Prototype::Entity(entity) if entity.id == entity_id => {
                entity.felinid().map(|data| data.to_component())
            }
            _ => None,
        })
    }
}
