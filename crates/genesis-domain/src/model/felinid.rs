//! FelinidComponent - the hairball ability trait
//!
//! Attached to an entity when it is created from a prototype that declares
//! the `felinid` component. The ability activation logic that mutates it
//! lives outside this crate.

use super::entity::{EntProtoId, EntityUid};
use super::sound::SoundSpecifier;

/// Prototype spawned when a hairball is coughed up
pub const DEFAULT_HAIRBALL_PROTOTYPE: &str = "Hairball";
/// Action prototype granted to the entity
pub const DEFAULT_HAIRBALL_ACTION: &str = "ActionHairball";
/// Sound collection played when eating
pub const DEFAULT_EAT_SOUND_COLLECTION: &str = "eating";

/// Per-entity hairball ability data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FelinidComponent {
    /// The hairball prototype to use.
    pub hairball_prototype: EntProtoId,
    /// The action prototype granted to the entity.
    pub hairball_action: EntProtoId,
    /// The spawned action instance, once granted.
    pub hairball_action_entity: Option<EntityUid>,
    pub potential_target: Option<EntityUid>,
    pub eat_mouse: Option<EntityUid>,
    pub eat_sound: SoundSpecifier,
}

impl Default for FelinidComponent {
    fn default() -> Self {
        Self {
            hairball_prototype: EntProtoId::new(DEFAULT_HAIRBALL_PROTOTYPE),
            hairball_action: EntProtoId::new(DEFAULT_HAIRBALL_ACTION),
            hairball_action_entity: None,
            potential_target: None,
            eat_mouse: None,
            eat_sound: SoundSpecifier::collection(DEFAULT_EAT_SOUND_COLLECTION),
        }
    }
}

impl FelinidComponent {
    /// Record the spawned action instance, returning the one it replaces
    pub fn bind_action(&mut self, action: EntityUid) -> Option<EntityUid> {
        self.hairball_action_entity.replace(action)
    }

    /// Forget the action instance (e.g. when the trait is removed)
    pub fn take_action(&mut self) -> Option<EntityUid> {
        self.hairball_action_entity.take()
    }

    pub fn clear_targets(&mut self) {
        self.potential_target = None;
        self.eat_mouse = None;
    }

    /// Drop any reference to an entity that no longer exists
    pub fn forget_entity(&mut self, uid: EntityUid) {
        if self.potential_target == Some(uid) {
            self.potential_target = None;
        }
        if self.eat_mouse == Some(uid) {
            self.eat_mouse = None;
        }
        if self.hairball_action_entity == Some(uid) {
            self.hairball_action_entity = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let felinid = FelinidComponent::default();
        assert_eq!(felinid.hairball_prototype.as_str(), "Hairball");
        assert_eq!(felinid.hairball_action.as_str(), "ActionHairball");
        assert_eq!(felinid.hairball_action_entity, None);
        assert_eq!(felinid.potential_target, None);
        assert_eq!(felinid.eat_mouse, None);
        assert_eq!(felinid.eat_sound, SoundSpecifier::collection("eating"));
    }

    #[test]
    fn test_bind_and_take_action() {
        let mut felinid = FelinidComponent::default();
        assert_eq!(felinid.bind_action(EntityUid::new(7)), None);
        assert_eq!(felinid.bind_action(EntityUid::new(8)), Some(EntityUid::new(7)));
        assert_eq!(felinid.take_action(), Some(EntityUid::new(8)));
        assert_eq!(felinid.take_action(), None);
    }

    #[test]
    fn test_forget_entity() {
        let mut felinid = FelinidComponent {
            potential_target: Some(EntityUid::new(3)),
            eat_mouse: Some(EntityUid::new(3)),
            ..Default::default()
        };
        felinid.forget_entity(EntityUid::new(4));
        assert_eq!(felinid.eat_mouse, Some(EntityUid::new(3)));

        felinid.forget_entity(EntityUid::new(3));
        assert_eq!(felinid.potential_target, None);
        assert_eq!(felinid.eat_mouse, None);
    }
}
