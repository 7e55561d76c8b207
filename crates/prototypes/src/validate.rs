//! Validator - Content checks over loaded prototypes and locale files
//!
//! Four checks, all reported as errors:
//!
//! - the same prototype id defined more than once
//! - a reference to an id no prototype defines
//! - the same locale key defined more than once
//! - a prototype id with no locale key

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::info;

use crate::loader::PrototypeLoader;
use crate::locale::LocaleIndex;

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    DuplicateId,
    UnknownReference,
    DuplicateLocale,
    MissingLocale,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            IssueKind::DuplicateId => "DUPLICATE ID",
            IssueKind::UnknownReference => "UNKNOWN REFERENCE",
            IssueKind::DuplicateLocale => "DUPLICATE LOCALE",
            IssueKind::MissingLocale => "MISSING LOCALE",
        };
        f.write_str(label)
    }
}

/// One finding. `locations` are file paths, or `path:line` for locale keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub id: String,
    pub locations: Vec<String>,
}

/// Result of a validation run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
    pub prototype_ids: usize,
    pub referenced_ids: usize,
    pub locale_keys: usize,
    /// Files the loader could not read
    pub skipped_files: Vec<String>,
    pub generated_at: String,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues of one kind
    pub fn of_kind(&self, kind: IssueKind) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |issue| issue.kind == kind)
    }
}

/// Runs every check over one loader and one locale index
pub struct Validator<'a> {
    prototypes: &'a PrototypeLoader,
    locale: &'a LocaleIndex,
}

impl<'a> Validator<'a> {
    pub fn new(prototypes: &'a PrototypeLoader, locale: &'a LocaleIndex) -> Self {
        Self { prototypes, locale }
    }

    pub fn run(&self) -> ValidationReport {
        let mut defined: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        let mut referenced: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();

        for loaded in self.prototypes.prototypes() {
            let path = loaded.path.display().to_string();
            if let Some(id) = loaded.prototype.id() {
                defined.entry(id).or_default().push(path.clone());
            }
            for reference in loaded.prototype.references() {
                referenced
                    .entry(reference)
                    .or_default()
                    .insert(path.clone());
            }
        }

        let mut issues = Vec::new();

        for (id, paths) in &defined {
            if paths.len() > 1 {
                issues.push(ValidationIssue {
                    kind: IssueKind::DuplicateId,
                    id: id.to_string(),
                    locations: paths.clone(),
                });
            }
        }

        for (id, paths) in &referenced {
            if !defined.contains_key(id) {
                issues.push(ValidationIssue {
                    kind: IssueKind::UnknownReference,
                    id: id.to_string(),
                    locations: paths.iter().cloned().collect(),
                });
            }
        }

        for (key, locations) in self.locale.duplicates() {
            issues.push(ValidationIssue {
                kind: IssueKind::DuplicateLocale,
                id: key.to_string(),
                locations: locations.iter().map(|l| l.to_string()).collect(),
            });
        }

        for (id, paths) in &defined {
            if !self.locale.contains(id) {
                issues.push(ValidationIssue {
                    kind: IssueKind::MissingLocale,
                    id: id.to_string(),
                    locations: paths.clone(),
                });
            }
        }

        issues.sort_by(|a, b| (a.kind, &a.id).cmp(&(b.kind, &b.id)));

        let report = ValidationReport {
            issues,
            prototype_ids: defined.len(),
            referenced_ids: referenced.len(),
            locale_keys: self.locale.len(),
            skipped_files: self
                .prototypes
                .errors()
                .iter()
                .map(|e| e.to_string())
                .collect(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        };

        info!(
            prototypes = report.prototype_ids,
            locale_keys = report.locale_keys,
            issues = report.issues.len(),
            "validation finished"
        );
        report
    }
}
