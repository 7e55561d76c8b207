//! EventBus - typed, by-reference event delivery
//!
//! Subscribers register per event type. Raising an event hands the same
//! `&mut E` to every subscriber in subscription order; nothing is cloned.
//! The bus is driven from one thread, like a simulation tick.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use genesis_domain::model::entity::EntityUid;
use genesis_domain::service::events::{EntityEvent, EventSink};
use tracing::trace;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<E> = Box<dyn FnMut(EntityUid, &mut E) + Send>;

/// Type-erased list of handlers for one event type
trait HandlerList: Send {
    fn remove(&mut self, id: SubscriptionId) -> bool;
    fn len(&self) -> usize;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

struct Handlers<E> {
    entries: Vec<(SubscriptionId, Handler<E>)>,
}

impl<E: EntityEvent> HandlerList for Handlers<E> {
    fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Typed publish/subscribe channel for entity events
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<TypeId, Box<dyn HandlerList>>,
    next_id: u64,
}

impl EventBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every `E` raised on any entity
    pub fn subscribe<E, F>(&mut self, handler: F) -> SubscriptionId
    where
        E: EntityEvent,
        F: FnMut(EntityUid, &mut E) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let list = self
            .handlers
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(Handlers::<E> { entries: Vec::new() }) as Box<dyn HandlerList>);

        // The map is keyed by TypeId, so the downcast always matches.
        if let Some(handlers) = list.as_any_mut().downcast_mut::<Handlers<E>>() {
            handlers.entries.push((id, Box::new(handler)));
        }

        trace!(event = std::any::type_name::<E>(), ?id, "subscribed");
        id
    }

    /// Remove a subscription, returning whether it existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.handlers.values_mut().any(|list| list.remove(id))
    }

    /// Number of subscribers for `E`
    pub fn subscriber_count<E: EntityEvent>(&self) -> usize {
        self.handlers
            .get(&TypeId::of::<E>())
            .map(|list| list.len())
            .unwrap_or(0)
    }
}

impl EventSink for EventBus {
    fn raise_local_event<E: EntityEvent>(&mut self, uid: EntityUid, event: &mut E) {
        let Some(list) = self.handlers.get_mut(&TypeId::of::<E>()) else {
            return;
        };
        let Some(handlers) = list.as_any_mut().downcast_mut::<Handlers<E>>() else {
            return;
        };

        trace!(
            event = std::any::type_name::<E>(),
            %uid,
            subscribers = handlers.entries.len(),
            "raising event"
        );
        for (_, handler) in handlers.entries.iter_mut() {
            handler(uid, &mut *event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("event_types", &self.handlers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genesis_domain::service::events::{CarryDroppedEvent, WoundLickingActionEvent};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_no_subscribers_is_fine() {
        let mut bus = EventBus::new();
        bus.raise_local_event(EntityUid::new(1), &mut CarryDroppedEvent);
        assert_eq!(bus.subscriber_count::<CarryDroppedEvent>(), 0);
    }

    #[test]
    fn test_delivers_to_all_in_order() {
        let mut bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second"] {
            let seen = Arc::clone(&seen);
            bus.subscribe(move |uid, _: &mut CarryDroppedEvent| {
                seen.lock().unwrap().push((tag, uid));
            });
        }

        bus.raise_local_event(EntityUid::new(9), &mut CarryDroppedEvent);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![("first", EntityUid::new(9)), ("second", EntityUid::new(9))]
        );
    }

    #[test]
    fn test_by_reference_delivery() {
        let mut bus = EventBus::new();
        bus.subscribe(|_, ev: &mut WoundLickingActionEvent| ev.handled = true);

        let mut action = WoundLickingActionEvent::new(EntityUid::new(1), EntityUid::new(2));
        bus.raise_local_event(EntityUid::new(1), &mut action);

        assert!(action.handled);
    }

    #[test]
    fn test_types_are_isolated() {
        let mut bus = EventBus::new();
        let drops = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&drops);
        bus.subscribe(move |_, _: &mut CarryDroppedEvent| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut action = WoundLickingActionEvent::new(EntityUid::new(1), EntityUid::new(2));
        bus.raise_local_event(EntityUid::new(1), &mut action);
        assert_eq!(drops.load(Ordering::SeqCst), 0);

        bus.raise_local_event(EntityUid::new(1), &mut CarryDroppedEvent);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let mut bus = EventBus::new();
        let drops = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&drops);
        let id = bus.subscribe(move |_, _: &mut CarryDroppedEvent| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));

        bus.raise_local_event(EntityUid::new(1), &mut CarryDroppedEvent);
        assert_eq!(drops.load(Ordering::SeqCst), 0);
        assert_eq!(bus.subscriber_count::<CarryDroppedEvent>(), 0);
    }
}
