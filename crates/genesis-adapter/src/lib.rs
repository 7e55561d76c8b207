//! # Genesis Adapter Layer
//!
//! Implementations of the domain ports (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - Component tables and mind storage
//! - `bus/` - Typed by-reference event delivery
//! - `queue/` - The process-wide join-queue gate
//! - `sound/` - Sound collection resolution

pub mod bus;
pub mod queue;
pub mod repository;
pub mod sound;

pub use bus::event_bus::{EventBus, SubscriptionId};
pub use queue::join_queue_gate::JoinQueueGate;
pub use repository::in_memory::{InMemoryComponentTable, InMemoryMindRepository};
pub use sound::collection_registry::SoundCollectionRegistry;
