//! Mind - The persistent player identity
//!
//! Mind is an Entity (has identity).
//! The same MindId refers to the same player even when the body they
//! control is destroyed and replaced.

use super::entity::EntityUid;

/// Unique identifier for a Mind
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MindId(String);

impl MindId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for MindId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a job prototype (e.g. "Captain", "Chef")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl core::fmt::Display for JobId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mind - a player identity with the jobs it currently holds
#[derive(Debug, Clone)]
pub struct Mind {
    /// Unique identifier (Entity identity)
    id: MindId,
    /// In-round character name
    character_name: String,
    /// Jobs held by this mind, in assignment order
    jobs: Vec<JobId>,
    /// Body currently controlled, if any
    owned_entity: Option<EntityUid>,
}

impl Mind {
    /// Create a new Mind with no jobs and no body
    pub fn new(id: MindId, character_name: impl Into<String>) -> Self {
        Self {
            id,
            character_name: character_name.into(),
            jobs: Vec::new(),
            owned_entity: None,
        }
    }

    /// Builder: add a job
    pub fn with_job(mut self, job: impl Into<JobId>) -> Self {
        self.assign_job(job.into());
        self
    }

    /// Builder: attach a body
    pub fn with_owned_entity(mut self, uid: EntityUid) -> Self {
        self.owned_entity = Some(uid);
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &MindId {
        &self.id
    }

    pub fn character_name(&self) -> &str {
        &self.character_name
    }

    pub fn jobs(&self) -> &[JobId] {
        &self.jobs
    }

    pub fn owned_entity(&self) -> Option<EntityUid> {
        self.owned_entity
    }

    // ========== Jobs ==========

    /// Assign a job; assigning a job twice is a no-op
    pub fn assign_job(&mut self, job: JobId) {
        if !self.has_job(&job) {
            self.jobs.push(job);
        }
    }

    /// Revoke a job, returning whether it was held
    pub fn revoke_job(&mut self, job: &JobId) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|j| j != job);
        self.jobs.len() != before
    }

    pub fn has_job(&self, job: &JobId) -> bool {
        self.jobs.iter().any(|j| j == job)
    }

    pub fn set_owned_entity(&mut self, uid: Option<EntityUid>) {
        self.owned_entity = uid;
    }
}

impl PartialEq for Mind {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Mind {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mind_jobs() {
        let mut mind = Mind::new(MindId::new("m-1"), "Urist")
            .with_job("Chef")
            .with_job("Chef")
            .with_job("Bartender");

        assert_eq!(mind.jobs().len(), 2);
        assert!(mind.has_job(&JobId::from("Chef")));

        assert!(mind.revoke_job(&JobId::from("Chef")));
        assert!(!mind.revoke_job(&JobId::from("Chef")));
        assert_eq!(mind.jobs(), &[JobId::from("Bartender")]);
    }

    #[test]
    fn test_entity_equality() {
        let a = Mind::new(MindId::new("m-1"), "Urist").with_job("Chef");
        let b = Mind::new(MindId::new("m-1"), "Someone Else");
        assert_eq!(a, b);
    }
}
