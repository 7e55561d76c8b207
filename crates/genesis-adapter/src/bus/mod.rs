//! Event delivery adapters

pub mod event_bus;
