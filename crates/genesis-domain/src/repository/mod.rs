//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits stand in for the engine's component registry and job
//! system. The domain says what it needs; adapters decide how.
//!
//! ```text
//! Domain Layer                 │  Adapter Layer
//! ─────────────────────────────┼────────────────────────────
//! trait ComponentRepository<T> │  InMemoryComponentTable<T>
//! trait MindRepository         │  InMemoryMindRepository
//! trait JobQuery               │  InMemoryMindRepository
//! ```

pub mod component_repository;
pub mod mind_repository;
