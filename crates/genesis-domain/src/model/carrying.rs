//! Carry relationship components
//!
//! A carry is stored on both sides: the carrier holds `CarryingComponent`,
//! the carried entity holds `BeingCarriedComponent`.

use super::entity::EntityUid;

/// On the carrier: who is being carried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarryingComponent {
    pub carried: EntityUid,
}

/// On the carried entity: who is carrying it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeingCarriedComponent {
    pub carrier: EntityUid,
}
