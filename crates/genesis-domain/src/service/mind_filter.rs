//! Mind Filters - deciding which minds keep a privileged status
//!
//! A filter is a pure predicate over a mind and a `JobQuery`. Filters are
//! configured once (from prototypes) and evaluated on demand; evaluating a
//! filter never mutates it.

use crate::model::mind::{JobId, MindId};
use crate::repository::mind_repository::JobQuery;

/// A predicate that may strip a mind of a status
pub trait MindFilter {
    /// Returns true if the mind *should be removed*.
    fn should_remove(&self, mind: &MindId, jobs: &dyn JobQuery) -> bool;

    /// Inverse of `should_remove`.
    fn is_allowed(&self, mind: &MindId, jobs: &dyn JobQuery) -> bool {
        !self.should_remove(mind, jobs)
    }
}

/// Job-list mind filter.
///
/// NOTE: despite the name this is an allow-list. A mind is removed unless it
/// holds at least one of the listed jobs. The polarity is kept as-is for
/// compatibility with existing content that already relies on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlacklistedJobsMindFilter {
    /// Jobs checked against the mind, in configured order.
    blacklist: Vec<JobId>,
}

impl BlacklistedJobsMindFilter {
    pub fn new(blacklist: impl IntoIterator<Item = JobId>) -> Self {
        Self {
            blacklist: blacklist.into_iter().collect(),
        }
    }

    pub fn blacklist(&self) -> &[JobId] {
        &self.blacklist
    }
}

impl MindFilter for BlacklistedJobsMindFilter {
    fn should_remove(&self, mind: &MindId, jobs: &dyn JobQuery) -> bool {
        !self
            .blacklist
            .iter()
            .any(|job| jobs.mind_has_job_with_id(mind, job))
    }
}

/// Keep only the minds that every filter allows.
///
/// Relative order of the surviving minds is preserved.
pub fn retain_allowed(minds: &mut Vec<MindId>, filters: &[&dyn MindFilter], jobs: &dyn JobQuery) {
    minds.retain(|mind| filters.iter().all(|filter| filter.is_allowed(mind, jobs)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::{HashMap, HashSet};

    struct Jobs {
        held: HashMap<MindId, HashSet<JobId>>,
        lookups: Cell<usize>,
    }

    impl Jobs {
        fn new() -> Self {
            Self {
                held: HashMap::new(),
                lookups: Cell::new(0),
            }
        }

        fn with(mut self, mind: &str, jobs: &[&str]) -> Self {
            self.held.insert(
                MindId::new(mind),
                jobs.iter().map(|j| JobId::from(*j)).collect(),
            );
            self
        }
    }

    impl JobQuery for Jobs {
        fn mind_has_job_with_id(&self, mind: &MindId, job: &JobId) -> bool {
            self.lookups.set(self.lookups.get() + 1);
            self.held
                .get(mind)
                .map(|set| set.contains(job))
                .unwrap_or(false)
        }
    }

    fn command_filter() -> BlacklistedJobsMindFilter {
        BlacklistedJobsMindFilter::new([JobId::from("Captain"), JobId::from("HeadOfSecurity")])
    }

    #[test]
    fn test_no_overlap_is_removed() {
        let jobs = Jobs::new().with("chef", &["Chef"]);
        let filter = command_filter();

        assert!(filter.should_remove(&MindId::new("chef"), &jobs));
        assert!(!filter.is_allowed(&MindId::new("chef"), &jobs));
    }

    #[test]
    fn test_single_match_is_kept() {
        let jobs = Jobs::new().with("cap", &["Captain"]);
        let filter = command_filter();

        assert!(!filter.should_remove(&MindId::new("cap"), &jobs));
        assert!(filter.is_allowed(&MindId::new("cap"), &jobs));
    }

    #[test]
    fn test_any_match_suffices() {
        let jobs = Jobs::new().with("multi", &["Chef", "Janitor", "HeadOfSecurity"]);
        let filter = command_filter();

        assert!(!filter.should_remove(&MindId::new("multi"), &jobs));
    }

    #[test]
    fn test_mind_without_jobs_is_removed() {
        let jobs = Jobs::new().with("nobody", &[]);
        let filter = command_filter();

        assert!(filter.should_remove(&MindId::new("nobody"), &jobs));
        assert!(filter.should_remove(&MindId::new("unknown"), &jobs));
    }

    #[test]
    fn test_empty_blacklist_always_removes() {
        let jobs = Jobs::new().with("cap", &["Captain"]).with("chef", &["Chef"]);
        let filter = BlacklistedJobsMindFilter::default();

        for mind in ["cap", "chef", "unknown"] {
            assert!(filter.should_remove(&MindId::new(mind), &jobs));
            assert!(!filter.is_allowed(&MindId::new(mind), &jobs));
        }
        assert_eq!(jobs.lookups.get(), 0);
    }

    #[test]
    fn test_complement_over_all_combinations() {
        let pool = ["Captain", "HeadOfSecurity", "Chef", "Janitor"];
        // Every subset of the pool as both the blacklist and the held jobs.
        for b in 0u32..16 {
            for j in 0u32..16 {
                let blacklist: Vec<JobId> = (0..4)
                    .filter(|i| b & (1 << i) != 0)
                    .map(|i| JobId::from(pool[i]))
                    .collect();
                let held: Vec<&str> = (0..4)
                    .filter(|i| j & (1 << i) != 0)
                    .map(|i| pool[i])
                    .collect();

                let jobs = Jobs::new().with("m", &held);
                let filter = BlacklistedJobsMindFilter::new(blacklist);
                let mind = MindId::new("m");

                let expected_remove = b & j == 0;
                assert_eq!(filter.should_remove(&mind, &jobs), expected_remove);
                assert_ne!(filter.should_remove(&mind, &jobs), filter.is_allowed(&mind, &jobs));
            }
        }
    }

    #[test]
    fn test_lookups_bounded_by_blacklist_len() {
        let jobs = Jobs::new().with("chef", &["Chef"]);
        let filter = command_filter();

        filter.should_remove(&MindId::new("chef"), &jobs);
        assert_eq!(jobs.lookups.get(), 2);

        // First entry matches, second is never queried.
        let jobs = Jobs::new().with("cap", &["Captain"]);
        filter.should_remove(&MindId::new("cap"), &jobs);
        assert_eq!(jobs.lookups.get(), 1);
    }

    #[test]
    fn test_retain_allowed() {
        let jobs = Jobs::new()
            .with("cap", &["Captain"])
            .with("chef", &["Chef"])
            .with("hos", &["HeadOfSecurity", "Chef"]);
        let filter = command_filter();

        let mut minds = vec![MindId::new("cap"), MindId::new("chef"), MindId::new("hos")];
        retain_allowed(&mut minds, &[&filter], &jobs);

        assert_eq!(minds, vec![MindId::new("cap"), MindId::new("hos")]);
    }

    #[test]
    fn test_retain_allowed_with_no_filters_keeps_everyone() {
        let jobs = Jobs::new();
        let mut minds = vec![MindId::new("a"), MindId::new("b")];
        retain_allowed(&mut minds, &[], &jobs);
        assert_eq!(minds.len(), 2);
    }
}
