//! Join-queue adapters

pub mod join_queue_gate;
