//! # Genesis Domain Layer
//!
//! Content logic for the Genesis game server, written against explicit
//! ports instead of a host engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Identifiers, components, minds, sounds        ││
//! │  │  repository/- Trait definitions (component tables, jobs)    ││
//! │  │  service/   - Mind filters, join queue, events, carrying    ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! Every engine facility the content relies on (component storage, job
//! lookups, event delivery, do-after timers, sound resolution) arrives as a
//! trait object or generic parameter. Swapping the engine means writing new
//! adapters, never touching this crate.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    carrying::{BeingCarriedComponent, CarryingComponent},
    entity::{EntProtoId, EntityUid},
    felinid::FelinidComponent,
    mind::{JobId, Mind, MindId},
    sound::{ResolvedSound, SoundCollectionId, SoundResolver, SoundSpecifier},
};

pub use repository::{
    component_repository::{ComponentRepository, RepositoryError},
    mind_repository::{JobQuery, MindRepository},
};

pub use service::{
    carrying::{begin_carry, release_carried, CarryError},
    do_after::{DoAfterArgs, DoAfterId, DoAfterOutcome, DoAfterScheduler},
    events::{
        ByRefEvent, CarryDroppedEvent, EntityEvent, EntityTargetActionEvent, EventSink,
        SimpleDoAfterEvent, WoundLicking, WoundLickingActionEvent, WoundLickingDoAfterEvent,
    },
    join_queue::{JoinQueueError, JoinQueuePhase, JoinQueueStatus, ServerJoinQueueManager},
    mind_filter::{retain_allowed, BlacklistedJobsMindFilter, MindFilter},
    wound_licking::start_wound_licking,
};
