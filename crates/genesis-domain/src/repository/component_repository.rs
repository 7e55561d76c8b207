//! Component Repository - Entity-indexed component tables
//!
//! One table per component type. A table maps `EntityUid` to at most one
//! component record.

use crate::model::entity::EntityUid;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Record not found
    NotFound { id: String },
    /// Failed to persist
    PersistenceError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { id } => {
                write!(f, "Record not found: {}", id)
            }
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Component Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// It replaces the engine's component registry: components are plain
/// records, the table owns them.
pub trait ComponentRepository<T: Clone> {
    /// Attach a component, returning the one it replaced
    fn insert(&mut self, uid: EntityUid, component: T) -> Result<Option<T>, RepositoryError>;

    /// Get a copy of the component on an entity
    fn get(&self, uid: EntityUid) -> Result<Option<T>, RepositoryError>;

    /// Mutate the component in place.
    ///
    /// Returns `None` when the entity has no such component.
    fn update<R>(
        &mut self,
        uid: EntityUid,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<Option<R>, RepositoryError>;

    /// Detach a component
    fn remove(&mut self, uid: EntityUid) -> Result<Option<T>, RepositoryError>;

    /// All entities that have this component, in ascending order
    fn entities(&self) -> Result<Vec<EntityUid>, RepositoryError>;

    /// Check if an entity has this component
    fn contains(&self, uid: EntityUid) -> Result<bool, RepositoryError> {
        Ok(self.get(uid)?.is_some())
    }

    /// Count entities with this component
    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.entities()?.len())
    }

    /// Get the component or fail with `NotFound`
    fn require(&self, uid: EntityUid) -> Result<T, RepositoryError> {
        self.get(uid)?.ok_or_else(|| RepositoryError::NotFound {
            id: uid.to_string(),
        })
    }
}
