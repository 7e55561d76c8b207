//! # Genesis Prototypes
//!
//! Declarative content loaded from YAML, and the checks run over it.
//!
//! ## Components
//!
//! - `PrototypeLoader` - Reads prototype files into typed documents
//! - `LocaleIndex` - Collects Fluent message keys
//! - `Validator` - Duplicate ids, dangling references, locale coverage

pub mod document;
pub mod error;
pub mod loader;
pub mod locale;
pub mod validate;

pub use document::{
    ComponentData, EntityPrototype, FelinidData, JobPrototype, MindFilterPrototype, Parents, Prototype,
    SoundCollectionPrototype, SoundData,
};
pub use error::PrototypeError;
pub use loader::{LoadedPrototype, PrototypeLoader};
pub use locale::LocaleIndex;
pub use validate::{IssueKind, ValidationIssue, ValidationReport, Validator};
