//! Mind Repository - Abstract persistence for Minds, plus job lookups
//!
//! `JobQuery` is the only capability the mind filters need. It is split
//! from `MindRepository` so a filter can be evaluated against anything
//! that knows which jobs a mind holds.

use crate::model::mind::{JobId, Mind, MindId};
use crate::repository::component_repository::RepositoryError;

/// Job lookup capability
///
/// Answers "does this mind currently hold job X". Cannot fail: an unknown
/// mind holds no jobs.
pub trait JobQuery {
    fn mind_has_job_with_id(&self, mind: &MindId, job: &JobId) -> bool;
}

impl<Q: JobQuery + ?Sized> JobQuery for &Q {
    fn mind_has_job_with_id(&self, mind: &MindId, job: &JobId) -> bool {
        (**self).mind_has_job_with_id(mind, job)
    }
}

/// Mind Repository Trait
///
/// This is a PORT in hexagonal architecture.
pub trait MindRepository {
    /// Save a mind (create or update)
    fn save(&mut self, mind: &Mind) -> Result<(), RepositoryError>;

    /// Find a mind by ID
    fn find_by_id(&self, id: &MindId) -> Result<Option<Mind>, RepositoryError>;

    /// Find all minds holding a job
    fn find_by_job(&self, job: &JobId) -> Result<Vec<Mind>, RepositoryError>;

    /// Delete a mind
    fn delete(&mut self, id: &MindId) -> Result<(), RepositoryError>;

    /// List all minds
    fn list_all(&self) -> Result<Vec<Mind>, RepositoryError>;

    /// Count all minds
    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.list_all()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct InMemoryMindRepo {
        minds: HashMap<String, Mind>,
    }

    impl InMemoryMindRepo {
        fn new() -> Self {
            Self {
                minds: HashMap::new(),
            }
        }
    }

    impl MindRepository for InMemoryMindRepo {
        fn save(&mut self, mind: &Mind) -> Result<(), RepositoryError> {
            self.minds
                .insert(mind.id().as_str().to_string(), mind.clone());
            Ok(())
        }

        fn find_by_id(&self, id: &MindId) -> Result<Option<Mind>, RepositoryError> {
            Ok(self.minds.get(id.as_str()).cloned())
        }

        fn find_by_job(&self, job: &JobId) -> Result<Vec<Mind>, RepositoryError> {
            Ok(self
                .minds
                .values()
                .filter(|m| m.has_job(job))
                .cloned()
                .collect())
        }

        fn delete(&mut self, id: &MindId) -> Result<(), RepositoryError> {
            self.minds.remove(id.as_str());
            Ok(())
        }

        fn list_all(&self) -> Result<Vec<Mind>, RepositoryError> {
            Ok(self.minds.values().cloned().collect())
        }
    }

    impl JobQuery for InMemoryMindRepo {
        fn mind_has_job_with_id(&self, mind: &MindId, job: &JobId) -> bool {
            self.minds
                .get(mind.as_str())
                .map(|m| m.has_job(job))
                .unwrap_or(false)
        }
    }

    #[test]
    fn test_find_by_job() {
        let mut repo = InMemoryMindRepo::new();
        repo.save(&Mind::new(MindId::new("m-1"), "A").with_job("Chef"))
            .unwrap();
        repo.save(&Mind::new(MindId::new("m-2"), "B").with_job("Captain"))
            .unwrap();
        repo.save(&Mind::new(MindId::new("m-3"), "C").with_job("Chef"))
            .unwrap();

        assert_eq!(repo.find_by_job(&JobId::from("Chef")).unwrap().len(), 2);
        assert_eq!(repo.count().unwrap(), 3);
    }

    #[test]
    fn test_job_query_unknown_mind() {
        let repo = InMemoryMindRepo::new();
        assert!(!repo.mind_has_job_with_id(&MindId::new("ghost"), &JobId::from("Chef")));
    }
}
