//! Entity identifiers
//!
//! `EntityUid` names a live entity in the simulation.
//! `EntProtoId` names a declarative entity definition (a prototype) that
//! new entities are spawned from.

/// Handle to a live entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityUid(u64);

impl EntityUid {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for EntityUid {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl core::fmt::Display for EntityUid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an entity prototype
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntProtoId(String);

impl EntProtoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntProtoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl core::fmt::Display for EntProtoId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_uid_roundtrip() {
        let uid = EntityUid::from(42);
        assert_eq!(uid.raw(), 42);
        assert_eq!(uid.to_string(), "42");
    }

    #[test]
    fn test_proto_id_equality() {
        assert_eq!(EntProtoId::from("Hairball"), EntProtoId::new("Hairball"));
        assert_ne!(EntProtoId::from("Hairball"), EntProtoId::new("hairball"));
    }
}
