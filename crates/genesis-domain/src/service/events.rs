//! Entity Events - typed signals raised on entities
//!
//! Events are concrete types delivered through an `EventSink`. Delivery is
//! by reference: subscribers see (and may mark) the very value the raiser
//! holds, nothing is copied.

use core::marker::PhantomData;

use crate::model::entity::EntityUid;

/// Anything that can be raised on an entity
pub trait EntityEvent: 'static {}

/// Events that are always raised by reference.
///
/// Implemented by payload-free notifications that exist only to tell
/// listeners that something happened.
pub trait ByRefEvent: EntityEvent {}

/// Raises events on entities
///
/// The sink delivers to zero or more subscribers and returns once every
/// subscriber has seen the event.
pub trait EventSink {
    fn raise_local_event<E: EntityEvent>(&mut self, uid: EntityUid, event: &mut E);
}

/// Raised on an entity that was just released from a carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarryDroppedEvent;

impl EntityEvent for CarryDroppedEvent {}
impl ByRefEvent for CarryDroppedEvent {}

// ============================================================================
// Action / do-after base events
// ============================================================================

/// An action aimed at another entity.
///
/// `K` is a zero-sized tag naming the action; the tag carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityTargetActionEvent<K> {
    pub performer: EntityUid,
    pub target: EntityUid,
    /// Set by the subscriber that acted on the event
    pub handled: bool,
    kind: PhantomData<K>,
}

impl<K> EntityTargetActionEvent<K> {
    pub fn new(performer: EntityUid, target: EntityUid) -> Self {
        Self {
            performer,
            target,
            handled: false,
            kind: PhantomData,
        }
    }
}

impl<K: 'static> EntityEvent for EntityTargetActionEvent<K> {}

/// Raised when a do-after finishes, successfully or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleDoAfterEvent<K> {
    pub user: EntityUid,
    pub target: Option<EntityUid>,
    pub cancelled: bool,
    pub handled: bool,
    kind: PhantomData<K>,
}

impl<K> SimpleDoAfterEvent<K> {
    pub fn new(user: EntityUid, target: Option<EntityUid>) -> Self {
        Self {
            user,
            target,
            cancelled: false,
            handled: false,
            kind: PhantomData,
        }
    }

    pub fn into_cancelled(mut self) -> Self {
        self.cancelled = true;
        self
    }
}

impl<K: 'static> EntityEvent for SimpleDoAfterEvent<K> {}

/// Tag for the "lick wound" action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WoundLicking;

pub type WoundLickingActionEvent = EntityTargetActionEvent<WoundLicking>;
pub type WoundLickingDoAfterEvent = SimpleDoAfterEvent<WoundLicking>;
