//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from genesis-domain.

pub mod in_memory;
