//! Prototype documents
//!
//! A prototype file is a YAML list of documents, each tagged by `type`:
//!
//! ```yaml
//! - type: job
//!   id: Captain
//!
//! - type: entity
//!   id: MobFelinid
//!   components:
//!   - type: Felinid
//!     hairballPrototype: Hairball
//! ```
//!
//! Types we don't model are kept as `Prototype::Other` so their ids still
//! take part in duplicate checks.

use genesis_domain::model::entity::EntProtoId;
use genesis_domain::model::felinid::FelinidComponent;
use genesis_domain::model::mind::JobId;
use genesis_domain::model::sound::SoundSpecifier;
use genesis_domain::service::mind_filter::BlacklistedJobsMindFilter;
use serde::{Deserialize, Serialize};

/// `type: job`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPrototype {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// `type: soundCollection`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundCollectionPrototype {
    pub id: String,
    #[serde(default)]
    pub files: Vec<String>,
}

/// `type: mindFilter`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindFilterPrototype {
    pub id: String,
    /// Jobs a mind must hold one of to be kept
    #[serde(default)]
    pub blacklist: Vec<String>,
}

impl MindFilterPrototype {
    pub fn to_filter(&self) -> BlacklistedJobsMindFilter {
        BlacklistedJobsMindFilter::new(self.blacklist.iter().map(|j| JobId::new(j.as_str())))
    }
}

/// A sound as written in YAML: `{ path: ... }` or `{ collection: ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SoundData {
    Path { path: String },
    Collection { collection: String },
}

impl SoundData {
    pub fn to_specifier(&self) -> SoundSpecifier {
        match self {
            SoundData::Path { path } => SoundSpecifier::path(path.as_str()),
            SoundData::Collection { collection } => SoundSpecifier::collection(collection.as_str()),
        }
    }
}

/// `- type: Felinid` component overrides; unset fields keep the defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FelinidData {
    #[serde(default)]
    pub hairball_prototype: Option<String>,
    #[serde(default)]
    pub hairball_action: Option<String>,
    #[serde(default)]
    pub eat_sound: Option<SoundData>,
}

impl FelinidData {
    /// Build the runtime component
    pub fn to_component(&self) -> FelinidComponent {
        let mut component = FelinidComponent::default();
        if let Some(proto) = &self.hairball_prototype {
            component.hairball_prototype = EntProtoId::new(proto.as_str());
        }
        if let Some(action) = &self.hairball_action {
            component.hairball_action = EntProtoId::new(action.as_str());
        }
        if let Some(sound) = &self.eat_sound {
            component.eat_sound = sound.to_specifier();
        }
        component
    }
}

/// Entry in an entity's `components` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ComponentData {
    Felinid(FelinidData),
    #[serde(other)]
    Unknown,
}

/// `parent:` as written: one id or a list of ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parents {
    One(String),
    Many(Vec<String>),
}

impl Parents {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Parents::One(id) => std::slice::from_ref(id),
            Parents::Many(ids) => ids,
        }
    }
}

/// `type: entity`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityPrototype {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub parent: Option<Parents>,
    #[serde(default)]
    pub components: Vec<ComponentData>,
}

impl EntityPrototype {
    pub fn felinid(&self) -> Option<&FelinidData> {
        self.components.iter().find_map(|c| match c {
            ComponentData::Felinid(data) => Some(data),
            ComponentData::Unknown => None,
        })
    }
}

/// Any prototype document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Prototype {
    Job(JobPrototype),
    SoundCollection(SoundCollectionPrototype),
    Entity(EntityPrototype),
    MindFilter(MindFilterPrototype),
    Other { kind: String, id: Option<String> },
}

impl Prototype {
    /// Decode one document. `kind` is the document's `type` field.
    pub fn from_value(kind: &str, value: serde_yaml::Value) -> Result<Self, serde_yaml::Error> {
        let prototype = match kind {
            "job" => Prototype::Job(serde_yaml::from_value(value)?),
            "soundCollection" => Prototype::SoundCollection(serde_yaml::from_value(value)?),
            "entity" => Prototype::Entity(serde_yaml::from_value(value)?),
            "mindFilter" => Prototype::MindFilter(serde_yaml::from_value(value)?),
            other => Prototype::untyped(other, &value),
        };
        Ok(prototype)
    }

    /// Keep only the kind and id of a document
    pub fn untyped(kind: &str, value: &serde_yaml::Value) -> Self {
        Prototype::Other {
            kind: kind.to_string(),
            id: value
                .get("id")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Prototype::Job(_) => "job",
            Prototype::SoundCollection(_) => "soundCollection",
            Prototype::Entity(_) => "entity",
            Prototype::MindFilter(_) => "mindFilter",
            Prototype::Other { kind, .. } => kind,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Prototype::Job(p) => Some(&p.id),
            Prototype::SoundCollection(p) => Some(&p.id),
            Prototype::Entity(p) => Some(&p.id),
            Prototype::MindFilter(p) => Some(&p.id),
            Prototype::Other { id, .. } => id.as_deref(),
        }
    }

    /// Ids of other prototypes this document points at
    pub fn references(&self) -> Vec<&str> {
        match self {
            Prototype::Entity(entity) => {
                let mut refs = Vec::new();
                if let Some(parents) = &entity.parent {
                    refs.extend(parents.as_slice().iter().map(|p| p.as_str()));
                }
                if let Some(felinid) = entity.felinid() {
                    if let Some(p) = &felinid.hairball_prototype {
                        refs.push(p.as_str());
                    }
                    if let Some(a) = &felinid.hairball_action {
                        refs.push(a.as_str());
                    }
                    if let Some(SoundData::Collection { collection }) = &felinid.eat_sound {
                        refs.push(collection.as_str());
                    }
                }
                refs
            }
            Prototype::MindFilter(filter) => filter.blacklist.iter().map(|j| j.as_str()).collect(),
            Prototype::Job(_) | Prototype::SoundCollection(_) | Prototype::Other { .. } => {
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Prototype {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        let kind = value.get("type").and_then(|v| v.as_str()).unwrap().to_string();
        Prototype::from_value(&kind, value).unwrap()
    }

    #[test]
    fn test_felinid_entity() {
        let proto = parse(
            r#"
type: entity
id: MobFelinid
parent: BaseMobSpecies
components:
- type: Sprite
  sprite: Mobs/felinid.rsi
- type: Felinid
  hairballAction: ActionHairballLarge
  eatSound:
    collection: felinidEating
"#,
        );

        let Prototype::Entity(entity) = &proto else {
            panic!("expected entity, got {:?}", proto);
        };
        let component = entity.felinid().unwrap().to_component();

        assert_eq!(component.hairball_prototype.as_str(), "Hairball");
        assert_eq!(component.hairball_action.as_str(), "ActionHairballLarge");
        assert_eq!(component.eat_sound, SoundSpecifier::collection("felinidEating"));
        assert_eq!(
            proto.references(),
            vec!["BaseMobSpecies", "ActionHairballLarge", "felinidEating"]
        );
    }

    #[test]
    fn test_mind_filter() {
        let proto = parse(
            r#"
type: mindFilter
id: CommandOnly
blacklist: [Captain, HeadOfSecurity]
"#,
        );

        let Prototype::MindFilter(filter) = &proto else {
            panic!("expected mindFilter");
        };
        assert_eq!(
            filter.to_filter().blacklist(),
            &[JobId::from("Captain"), JobId::from("HeadOfSecurity")]
        );
        assert_eq!(proto.references(), vec!["Captain", "HeadOfSecurity"]);
    }

    #[test]
    fn test_unknown_type_keeps_id() {
        let proto = parse("type: reagent\nid: Water\n");
        assert_eq!(proto.kind(), "reagent");
        assert_eq!(proto.id(), Some("Water"));
        assert!(proto.references().is_empty());
    }

    #[test]
    fn test_parent_list() {
        let proto = parse(
            r#"
type: entity
id: MobFelinidDummy
parent: [BaseMobFelinid, MobHumanoidDummy]
"#,
        );

        assert_eq!(proto.references(), vec!["BaseMobFelinid", "MobHumanoidDummy"]);
    }

    #[test]
    fn test_sound_path() {
        let data: SoundData = serde_yaml::from_str("path: /Audio/meow.ogg").unwrap();
        assert_eq!(data.to_specifier(), SoundSpecifier::path("/Audio/meow.ogg"));
    }
}
