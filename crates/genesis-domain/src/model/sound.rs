//! Sound specifiers
//!
//! A `SoundSpecifier` is data: it names either a single audio file or a
//! collection of files. It is resolved to a playable cue only at the moment
//! of use, through a `SoundResolver`.

/// Identifier of a sound collection prototype (e.g. "eating")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoundCollectionId(String);

impl SoundCollectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SoundCollectionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What to play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSpecifier {
    /// A single resource path
    Path(String),
    /// Any file from a named collection
    Collection(SoundCollectionId),
}

impl SoundSpecifier {
    pub fn path(path: impl Into<String>) -> Self {
        SoundSpecifier::Path(path.into())
    }

    pub fn collection(id: impl Into<String>) -> Self {
        SoundSpecifier::Collection(SoundCollectionId::new(id))
    }

    /// The collection this specifier refers to, if any
    pub fn collection_id(&self) -> Option<&SoundCollectionId> {
        match self {
            SoundSpecifier::Collection(id) => Some(id),
            SoundSpecifier::Path(_) => None,
        }
    }
}

/// A concrete cue ready to be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSound {
    pub path: String,
}

/// Resolves a specifier to a concrete cue.
///
/// Returns `None` when the specifier names an unknown or empty collection.
pub trait SoundResolver {
    fn resolve(&self, specifier: &SoundSpecifier) -> Option<ResolvedSound>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_id() {
        let spec = SoundSpecifier::collection("eating");
        assert_eq!(spec.collection_id().map(|c| c.as_str()), Some("eating"));
        assert_eq!(SoundSpecifier::path("/Audio/meow.ogg").collection_id(), None);
    }
}
