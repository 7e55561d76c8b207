//! In-Memory Repository Implementations
//!
//! Component tables and mind storage held in process memory. Clones share
//! the same underlying storage, so a table can be handed to several systems.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use genesis_domain::model::entity::EntityUid;
use genesis_domain::model::mind::{JobId, Mind, MindId};
use genesis_domain::repository::component_repository::{ComponentRepository, RepositoryError};
use genesis_domain::repository::mind_repository::{JobQuery, MindRepository};
use tracing::warn;

fn read_poisoned() -> RepositoryError {
    RepositoryError::PersistenceError {
        message: "Failed to acquire read lock".to_string(),
    }
}

fn write_poisoned() -> RepositoryError {
    RepositoryError::PersistenceError {
        message: "Failed to acquire write lock".to_string(),
    }
}

/// In-memory component table
///
/// Thread-safe implementation using RwLock. Entities iterate in
/// ascending `EntityUid` order.
#[derive(Debug)]
pub struct InMemoryComponentTable<T> {
    rows: Arc<RwLock<BTreeMap<EntityUid, T>>>,
}

impl<T> InMemoryComponentTable<T> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl<T> Default for InMemoryComponentTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for InMemoryComponentTable<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T: Clone> ComponentRepository<T> for InMemoryComponentTable<T> {
    fn insert(&mut self, uid: EntityUid, component: T) -> Result<Option<T>, RepositoryError> {
        let mut rows = self.rows.write().map_err(|_| write_poisoned())?;
        Ok(rows.insert(uid, component))
    }

    fn get(&self, uid: EntityUid) -> Result<Option<T>, RepositoryError> {
        let rows = self.rows.read().map_err(|_| read_poisoned())?;
        Ok(rows.get(&uid).cloned())
    }

    fn update<R>(
        &mut self,
        uid: EntityUid,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<Option<R>, RepositoryError> {
        let mut rows = self.rows.write().map_err(|_| write_poisoned())?;
        Ok(rows.get_mut(&uid).map(f))
    }

    fn remove(&mut self, uid: EntityUid) -> Result<Option<T>, RepositoryError> {
        let mut rows = self.rows.write().map_err(|_| write_poisoned())?;
        Ok(rows.remove(&uid))
    }

    fn entities(&self) -> Result<Vec<EntityUid>, RepositoryError> {
        let rows = self.rows.read().map_err(|_| read_poisoned())?;
        Ok(rows.keys().copied().collect())
    }

    fn contains(&self, uid: EntityUid) -> Result<bool, RepositoryError> {
        let rows = self.rows.read().map_err(|_| read_poisoned())?;
        Ok(rows.contains_key(&uid))
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        let rows = self.rows.read().map_err(|_| read_poisoned())?;
        Ok(rows.len())
    }
}

/// In-memory Mind Repository
///
/// Also answers job queries, so it can be passed straight to mind filters.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMindRepository {
    minds: Arc<RwLock<HashMap<String, Mind>>>,
}

impl InMemoryMindRepository {
    pub fn new() -> Self {
        Self {
            minds: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl MindRepository for InMemoryMindRepository {
    fn save(&mut self, mind: &Mind) -> Result<(), RepositoryError> {
        let mut minds = self.minds.write().map_err(|_| write_poisoned())?;
        minds.insert(mind.id().as_str().to_string(), mind.clone());
        Ok(())
    }

    fn find_by_id(&self, id: &MindId) -> Result<Option<Mind>, RepositoryError> {
        let minds = self.minds.read().map_err(|_| read_poisoned())?;
        Ok(minds.get(id.as_str()).cloned())
    }

    fn find_by_job(&self, job: &JobId) -> Result<Vec<Mind>, RepositoryError> {
        let minds = self.minds.read().map_err(|_| read_poisoned())?;
        Ok(minds.values().filter(|m| m.has_job(job)).cloned().collect())
    }

    fn delete(&mut self, id: &MindId) -> Result<(), RepositoryError> {
        let mut minds = self.minds.write().map_err(|_| write_poisoned())?;
        minds.remove(id.as_str());
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Mind>, RepositoryError> {
        let minds = self.minds.read().map_err(|_| read_poisoned())?;
        Ok(minds.values().cloned().collect())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        let minds = self.minds.read().map_err(|_| read_poisoned())?;
        Ok(minds.len())
    }
}

impl JobQuery for InMemoryMindRepository {
    fn mind_has_job_with_id(&self, mind: &MindId, job: &JobId) -> bool {
        match self.minds.read() {
            Ok(minds) => minds
                .get(mind.as_str())
                .map(|m| m.has_job(job))
                .unwrap_or(false),
            Err(_) => {
                warn!(mind = %mind, job = %job, "mind store lock poisoned, treating job as not held");
                false
            }
        }
    }
}
