//! Sound resolution adapters

pub mod collection_registry;
