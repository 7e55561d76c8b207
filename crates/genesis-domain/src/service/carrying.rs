//! Carrying - starting and ending carry relationships
//!
//! Both sides of the relationship are kept in their own component tables.
//! Ending a carry raises `CarryDroppedEvent` on the released entity, once.

use crate::model::carrying::{BeingCarriedComponent, CarryingComponent};
use crate::model::entity::EntityUid;
use crate::repository::component_repository::{ComponentRepository, RepositoryError};
use crate::service::events::{CarryDroppedEvent, EventSink};

/// Errors when starting a carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarryError {
    /// An entity cannot carry itself
    SelfCarry { uid: EntityUid },
    /// The carrier already carries something
    AlreadyCarrying { carrier: EntityUid },
    /// The target is already being carried
    AlreadyCarried { carried: EntityUid },
    Repository(RepositoryError),
}

impl From<RepositoryError> for CarryError {
    fn from(e: RepositoryError) -> Self {
        CarryError::Repository(e)
    }
}

impl core::fmt::Display for CarryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CarryError::SelfCarry { uid } => write!(f, "Entity {} cannot carry itself", uid),
            CarryError::AlreadyCarrying { carrier } => {
                write!(f, "Entity {} is already carrying something", carrier)
            }
            CarryError::AlreadyCarried { carried } => {
                write!(f, "Entity {} is already being carried", carried)
            }
            CarryError::Repository(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CarryError {}

/// Start a carry between two entities
pub fn begin_carry<C, B>(
    carrying: &mut C,
    being_carried: &mut B,
    carrier: EntityUid,
    carried: EntityUid,
) -> Result<(), CarryError>
where
    C: ComponentRepository<CarryingComponent>,
    B: ComponentRepository<BeingCarriedComponent>,
{
    if carrier == carried {
        return Err(CarryError::SelfCarry { uid: carrier });
    }
    if carrying.contains(carrier)? {
        return Err(CarryError::AlreadyCarrying { carrier });
    }
    if being_carried.contains(carried)? {
        return Err(CarryError::AlreadyCarried { carried });
    }

    carrying.insert(carrier, CarryingComponent { carried })?;
    being_carried.insert(carried, BeingCarriedComponent { carrier })?;
    Ok(())
}

/// End the carry of `carried`, if any.
///
/// Returns whether a carry was ended. The drop event is raised only after
/// both sides are cleared, so subscribers observe a consistent state.
pub fn release_carried<C, B, S>(
    carrying: &mut C,
    being_carried: &mut B,
    events: &mut S,
    carried: EntityUid,
) -> Result<bool, RepositoryError>
where
    C: ComponentRepository<CarryingComponent>,
    B: ComponentRepository<BeingCarriedComponent>,
    S: EventSink,
{
    let Some(link) = being_carried.remove(carried)? else {
        return Ok(false);
    };

    // Only clear the carrier side if it still points at us.
    if let Some(side) = carrying.get(link.carrier)? {
        if side.carried == carried {
            carrying.remove(link.carrier)?;
        }
    }

    events.raise_local_event(carried, &mut CarryDroppedEvent);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::events::EntityEvent;
    use core::any::TypeId;
    use std::collections::BTreeMap;

    struct MapTable<T> {
        rows: BTreeMap<EntityUid, T>,
    }

    impl<T> Default for MapTable<T> {
        fn default() -> Self {
            Self {
                rows: BTreeMap::new(),
            }
        }
    }

    impl<T: Clone> ComponentRepository<T> for MapTable<T> {
        fn insert(&mut self, uid: EntityUid, component: T) -> Result<Option<T>, RepositoryError> {
            Ok(self.rows.insert(uid, component))
        }

        fn get(&self, uid: EntityUid) -> Result<Option<T>, RepositoryError> {
            Ok(self.rows.get(&uid).cloned())
        }

        fn update<R>(
            &mut self,
            uid: EntityUid,
            f: impl FnOnce(&mut T) -> R,
        ) -> Result<Option<R>, RepositoryError> {
            Ok(self.rows.get_mut(&uid).map(f))
        }

        fn remove(&mut self, uid: EntityUid) -> Result<Option<T>, RepositoryError> {
            Ok(self.rows.remove(&uid))
        }

        fn entities(&self) -> Result<Vec<EntityUid>, RepositoryError> {
            Ok(self.rows.keys().copied().collect())
        }
    }

    #[derive(Default)]
    struct Recorder {
        raised: Vec<(EntityUid, TypeId)>,
    }

    impl EventSink for Recorder {
        fn raise_local_event<E: EntityEvent>(&mut self, uid: EntityUid, _event: &mut E) {
            self.raised.push((uid, TypeId::of::<E>()));
        }
    }

    #[test]
    fn test_release_raises_once() {
        let mut carrying = MapTable::default();
        let mut being_carried = MapTable::default();
        let mut events = Recorder::default();
        let (carrier, carried) = (EntityUid::new(1), EntityUid::new(2));

        begin_carry(&mut carrying, &mut being_carried, carrier, carried).unwrap();

        assert!(release_carried(&mut carrying, &mut being_carried, &mut events, carried).unwrap());
        assert!(!release_carried(&mut carrying, &mut being_carried, &mut events, carried).unwrap());

        assert_eq!(events.raised, vec![(carried, TypeId::of::<CarryDroppedEvent>())]);
        assert!(!carrying.contains(carrier).unwrap());
        assert!(!being_carried.contains(carried).unwrap());
    }

    #[test]
    fn test_release_uncarried_is_silent() {
        let mut carrying: MapTable<CarryingComponent> = MapTable::default();
        let mut being_carried: MapTable<BeingCarriedComponent> = MapTable::default();
        let mut events = Recorder::default();

        let released =
            release_carried(&mut carrying, &mut being_carried, &mut events, EntityUid::new(5))
                .unwrap();

        assert!(!released);
        assert!(events.raised.is_empty());
    }

    #[test]
    fn test_begin_carry_rejections() {
        let mut carrying = MapTable::default();
        let mut being_carried = MapTable::default();
        let (a, b, c) = (EntityUid::new(1), EntityUid::new(2), EntityUid::new(3));

        assert_eq!(
            begin_carry(&mut carrying, &mut being_carried, a, a),
            Err(CarryError::SelfCarry { uid: a })
        );

        begin_carry(&mut carrying, &mut being_carried, a, b).unwrap();
        assert_eq!(
            begin_carry(&mut carrying, &mut being_carried, a, c),
            Err(CarryError::AlreadyCarrying { carrier: a })
        );
        assert_eq!(
            begin_carry(&mut carrying, &mut being_carried, c, b),
            Err(CarryError::AlreadyCarried { carried: b })
        );
    }
}
