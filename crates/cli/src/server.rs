//! Server - Dependency injection and wiring
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Server::bootstrap                                              │
//! │    ├── Loads: prototypes (PrototypeLoader)                      │
//! │    ├── Creates: JoinQueueGate (process-wide, shared via Arc)    │
//! │    ├── Creates: component tables, mind store, EventBus          │
//! │    └── Registers: sound collections, mind filters               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use genesis_adapter::{
    EventBus, InMemoryComponentTable, InMemoryMindRepository, JoinQueueGate,
    SoundCollectionRegistry,
};
use genesis_domain::model::carrying::{BeingCarriedComponent, CarryingComponent};
use genesis_domain::model::entity::EntityUid;
use genesis_domain::model::felinid::FelinidComponent;
use genesis_domain::model::mind::MindId;
use genesis_domain::repository::component_repository::ComponentRepository;
use genesis_domain::service::carrying::{begin_carry, release_carried};
use genesis_domain::service::join_queue::{JoinQueueStatus, ServerJoinQueueManager};
use genesis_domain::service::mind_filter::{retain_allowed, BlacklistedJobsMindFilter, MindFilter};
use prototypes::PrototypeLoader;
use shared::{GenesisError, Result, ServerConfig};
use tracing::{debug, info, warn};

/// The running content host
#[derive(Debug)]
pub struct Server {
    config: ServerConfig,
    gate: Arc<JoinQueueGate>,
    felinid_templates: HashMap<String, FelinidComponent>,
    mind_filters: HashMap<String, BlacklistedJobsMindFilter>,
    sounds: SoundCollectionRegistry,
    felinids: InMemoryComponentTable<FelinidComponent>,
    carrying: InMemoryComponentTable<CarryingComponent>,
    being_carried: InMemoryComponentTable<BeingCarriedComponent>,
    minds: InMemoryMindRepository,
    events: EventBus,
    next_uid: u64,
}

impl Server {
    /// Load prototypes, build every adapter and initialize the join queue
    pub fn bootstrap(config: ServerConfig) -> Result<Self> {
        let mut loader = PrototypeLoader::new();
        loader
            .load_from_directory(&config.prototypes_dir)
            .map_err(|e| {
                GenesisError::Config(format!(
                    "loading prototypes from {}: {}",
                    config.prototypes_dir.display(),
                    e
                ))
            })?;
        for error in loader.errors() {
            warn!(error = %error, "prototype file skipped");
        }

        let mut sounds = SoundCollectionRegistry::new();
        for collection in loader.sound_collections() {
            sounds.register(collection.id.clone(), collection.files.iter().cloned());
        }

        let mind_filters: HashMap<_, _> = loader
            .mind_filters()
            .map(|f| (f.id.clone(), f.to_filter()))
            .collect();

        let felinid_templates: HashMap<_, _> = loader
            .prototypes()
            .iter()
            .filter_map(|p| match &p.prototype {
                prototypes::Prototype::Entity(entity) => entity
                    .felinid()
                    .map(|data| (entity.id.clone(), data.to_component())),
                _ => None,
            })
            .collect();

        let gate = Arc::new(JoinQueueGate::from_config(&config.join_queue));
        gate.initialize()?;

        info!(
            prototypes = loader.prototypes().len(),
            sound_collections = sounds.len(),
            mind_filters = mind_filters.len(),
            felinid_species = felinid_templates.len(),
            "server bootstrapped"
        );

        Ok(Self {
            config,
            gate,
            felinid_templates,
            mind_filters,
            sounds,
            felinids: InMemoryComponentTable::new(),
            carrying: InMemoryComponentTable::new(),
            being_carried: InMemoryComponentTable::new(),
            minds: InMemoryMindRepository::new(),
            events: EventBus::new(),
            next_uid: 1,
        })
    }

    /// Second startup phase, once everything else is wired
    pub fn start(&self) -> Result<()> {
        self.gate.post_initialize()?;
        Ok(())
    }

    // ========== Getters ==========

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Shared handle for connection handling
    pub fn gate(&self) -> Arc<JoinQueueGate> {
        Arc::clone(&self.gate)
    }

    pub fn status(&self) -> JoinQueueStatus {
        self.gate.status()
    }

    pub fn sounds(&self) -> &SoundCollectionRegistry {
        &self.sounds
    }

    pub fn felinids(&self) -> &InMemoryComponentTable<FelinidComponent> {
        &self.felinids
    }

    pub fn minds(&self) -> &InMemoryMindRepository {
        &self.minds
    }

    pub fn minds_mut(&mut self) -> &mut InMemoryMindRepository {
        &mut self.minds
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    // ========== Entities ==========

    /// Create an entity from a prototype id, attaching the components it
    /// declares
    pub fn spawn(&mut self, prototype: &str) -> Result<EntityUid> {
        let uid = EntityUid::new(self.next_uid);
        self.next_uid += 1;

        if let Some(template) = self.felinid_templates.get(prototype) {
            self.felinids.insert(uid, template.clone())?;
        }

        debug!(%uid, prototype, "entity spawned");
        Ok(uid)
    }

    pub fn pick_up(&mut self, carrier: EntityUid, carried: EntityUid) -> Result<()> {
        begin_carry(&mut self.carrying, &mut self.being_carried, carrier, carried)?;
        Ok(())
    }

    /// Drop whatever carry `carried` is part of. Returns whether one ended.
    pub fn drop_carried(&mut self, carried: EntityUid) -> Result<bool> {
        let released = release_carried(
            &mut self.carrying,
            &mut self.being_carried,
            &mut self.events,
            carried,
        )?;
        Ok(released)
    }

    /// Remove an entity and every reference other components hold to it
    pub fn despawn(&mut self, uid: EntityUid) -> Result<()> {
        self.drop_carried(uid)?;
        if let Some(side) = self.carrying.get(uid)? {
            self.drop_carried(side.carried)?;
        }

        self.felinids.remove(uid)?;
        for other in self.felinids.entities()? {
            self.felinids
                .update(other, |felinid| felinid.forget_entity(uid))?;
        }

        debug!(%uid, "entity despawned");
        Ok(())
    }

    // ========== Minds ==========

    /// Keep only the minds the named filter allows
    pub fn eligible_minds(&self, filter_id: &str, minds: Vec<MindId>) -> Result<Vec<MindId>> {
        let filter = self
            .mind_filters
            .get(filter_id)
            .ok_or_else(|| GenesisError::Other(format!("unknown mind filter '{}'", filter_id)))?;

        let mut minds = minds;
        let filters: [&dyn MindFilter; 1] = [filter];
        retain_allowed(&mut minds, &filters, &self.minds);
        Ok(minds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genesis_domain::model::mind::Mind;
    use genesis_domain::repository::mind_repository::MindRepository;
    use genesis_domain::service::events::CarryDroppedEvent;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    const CONTENT: &str = r#"
- type: soundCollection
  id: eating
  files: [/Audio/Items/eatfood.ogg]
- type: entity
  id: MobFelinid
  components:
  - type: Felinid
- type: entity
  id: MobMouse
- type: job
  id: Captain
- type: mindFilter
  id: Command
  blacklist: [Captain]
"#;

    fn server() -> (TempDir, Server) {
        let temp = TempDir::new().unwrap();
        let protos = temp.path().join("Resources").join("Prototypes");
        fs::create_dir_all(&protos).unwrap();
        fs::write(protos.join("content.yml"), CONTENT).unwrap();

        let config = ServerConfig::default().rebase(temp.path());
        let server = Server::bootstrap(config).unwrap();
        (temp, server)
    }

    #[test]
    fn test_bootstrap_and_start() {
        let (_temp, server) = server();
        assert!(server.sounds().contains("eating"));
        assert!(!server.status().enabled);

        server.start().unwrap();
        assert!(matches!(server.start(), Err(GenesisError::JoinQueue(_))));
    }

    #[test]
    fn test_unscannable_prototypes_dir_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let protos = temp.path().join("Proto[types");
        fs::create_dir_all(&protos).unwrap();

        let config = ServerConfig {
            prototypes_dir: protos,
            ..Default::default()
        };
        assert!(matches!(Server::bootstrap(config), Err(GenesisError::Config(_))));
    }

    #[test]
    fn test_self_carry_is_a_carry_error() {
        let (_temp, mut server) = server();
        let cat = server.spawn("MobFelinid").unwrap();
        assert!(matches!(server.pick_up(cat, cat), Err(GenesisError::Carry(_))));
    }

    #[test]
    fn test_spawn_attaches_felinid() {
        let (_temp, mut server) = server();
        let cat = server.spawn("MobFelinid").unwrap();
        let mouse = server.spawn("MobMouse").unwrap();

        assert_ne!(cat, mouse);
        assert!(server.felinids().contains(cat).unwrap());
        assert!(!server.felinids().contains(mouse).unwrap());
    }

    #[test]
    fn test_despawn_drops_carry_and_forgets_target() {
        let (_temp, mut server) = server();
        let cat = server.spawn("MobFelinid").unwrap();
        let mouse = server.spawn("MobMouse").unwrap();

        let drops = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&drops);
        server
            .events_mut()
            .subscribe(move |uid, _: &mut CarryDroppedEvent| {
                assert_eq!(uid, EntityUid::new(2));
                counter.fetch_add(1, Ordering::SeqCst);
            });

        server.pick_up(cat, mouse).unwrap();
        server
            .felinids
            .update(cat, |f| f.eat_mouse = Some(mouse))
            .unwrap();

        server.despawn(mouse).unwrap();

        assert_eq!(drops.load(Ordering::SeqCst), 1);
        assert!(!server.drop_carried(mouse).unwrap());
        assert_eq!(server.felinids().require(cat).unwrap().eat_mouse, None);
    }

    #[test]
    fn test_eligible_minds() {
        let (_temp, mut server) = server();
        server
            .minds_mut()
            .save(&Mind::new(MindId::new("alice"), "Alice").with_job("Captain"))
            .unwrap();
        server
            .minds_mut()
            .save(&Mind::new(MindId::new("bob"), "Bob").with_job("Chef"))
            .unwrap();

        let eligible = server
            .eligible_minds("Command", vec![MindId::new("alice"), MindId::new("bob")])
            .unwrap();
        assert_eq!(eligible, vec![MindId::new("alice")]);

        assert!(matches!(
            server.eligible_minds("Nope", Vec::new()),
            Err(GenesisError::Other(_))
        ));
    }
}
