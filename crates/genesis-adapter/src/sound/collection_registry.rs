//! SoundCollectionRegistry - resolves sound collections to files
//!
//! Collections come from `soundCollection` prototypes. Each collection keeps
//! its own position and hands out its files in turn.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use genesis_domain::model::sound::{ResolvedSound, SoundResolver, SoundSpecifier};
use tracing::warn;

/// Files of one collection and the next one to hand out
#[derive(Debug, Default)]
struct Collection {
    files: Vec<String>,
    cursor: AtomicUsize,
}

/// Registry of named sound collections
#[derive(Debug, Default)]
pub struct SoundCollectionRegistry {
    collections: HashMap<String, Collection>,
}

impl SoundCollectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a collection
    pub fn register(&mut self, id: impl Into<String>, files: impl IntoIterator<Item = String>) {
        self.collections.insert(
            id.into(),
            Collection {
                files: files.into_iter().collect(),
                cursor: AtomicUsize::new(0),
            },
        );
    }

    pub fn contains(&self, id: &str) -> bool {
        self.collections.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

impl SoundResolver for SoundCollectionRegistry {
    fn resolve(&self, specifier: &SoundSpecifier) -> Option<ResolvedSound> {
        match specifier {
            SoundSpecifier::Path(path) => Some(ResolvedSound { path: path.clone() }),
            SoundSpecifier::Collection(id) => {
                let Some(collection) = self.collections.get(id.as_str()) else {
                    warn!(collection = %id, "unknown sound collection");
                    return None;
                };
                if collection.files.is_empty() {
                    return None;
                }
                let index =
                    collection.cursor.fetch_add(1, Ordering::Relaxed) % collection.files.len();
                Some(ResolvedSound {
                    path: collection.files[index].clone(),
                })
            }
        }
    }
}
