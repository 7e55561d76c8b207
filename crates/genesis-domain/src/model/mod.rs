//! Domain Models - The vocabulary of Genesis content
//!
//! Identifiers and plain data records. Components are owned by
//! entity-indexed tables (see `repository::component_repository`).

pub mod carrying;
pub mod entity;
pub mod felinid;
pub mod mind;
pub mod sound;
