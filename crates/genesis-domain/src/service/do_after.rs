//! Do-After - the timed, interruptible action port
//!
//! The timer subsystem itself lives outside the domain. Content asks the
//! scheduler to start a do-after and later receives the attached event back
//! with the outcome applied.

use core::time::Duration;

use crate::model::entity::EntityUid;
use crate::service::events::{EntityEvent, SimpleDoAfterEvent};

/// Handle to a running do-after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoAfterId(u64);

impl DoAfterId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// How a do-after ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoAfterOutcome {
    Completed,
    Cancelled,
}

impl DoAfterOutcome {
    /// Apply the outcome to the event that will be raised on completion
    pub fn apply<K>(self, event: &mut SimpleDoAfterEvent<K>) {
        event.cancelled = matches!(self, DoAfterOutcome::Cancelled);
    }
}

/// Request to start a do-after
#[derive(Debug, Clone, PartialEq)]
pub struct DoAfterArgs<E> {
    pub user: EntityUid,
    pub target: Option<EntityUid>,
    /// Item used to perform the action, if any
    pub used: Option<EntityUid>,
    pub delay: Duration,
    /// Raised on the user when the do-after ends
    pub event: E,
    pub break_on_move: bool,
    pub break_on_damage: bool,
    pub needs_hand: bool,
}

impl<E> DoAfterArgs<E> {
    pub fn new(user: EntityUid, delay: Duration, event: E) -> Self {
        Self {
            user,
            target: None,
            used: None,
            delay,
            event,
            break_on_move: false,
            break_on_damage: false,
            needs_hand: false,
        }
    }

    pub fn with_target(mut self, target: EntityUid) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_used(mut self, used: EntityUid) -> Self {
        self.used = Some(used);
        self
    }

    pub fn break_on_move(mut self) -> Self {
        self.break_on_move = true;
        self
    }

    pub fn break_on_damage(mut self) -> Self {
        self.break_on_damage = true;
        self
    }

    pub fn needs_hand(mut self) -> Self {
        self.needs_hand = true;
        self
    }
}

/// Do-after scheduler port
///
/// `try_start` returns `None` when the request is rejected (for example a
/// duplicate do-after on the same user and target).
pub trait DoAfterScheduler<E: EntityEvent> {
    fn try_start(&mut self, args: DoAfterArgs<E>) -> Option<DoAfterId>;

    /// Cancel a running do-after, returning whether it was running
    fn cancel(&mut self, id: DoAfterId) -> bool;
}
