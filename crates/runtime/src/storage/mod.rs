//! Roster storage: entity registry, location state machine and id allocator.
//!
//! [`Storage`] owns every Lutemon, knows which location each one is in, hands
//! out ids, keeps the statistics recorder, and is the only component that
//! talks to the [`RosterRepository`]. Persistence failures are logged and
//! reported but never roll back in-memory changes.
mod allocator;
mod error;
mod locations;

use std::collections::BTreeMap;

use lutemon_core::{
    Color, GameConfig, GlobalStats, Location, Lutemon, LutemonId, PcgRng, RngOracle, Shape,
};

pub use allocator::IdAllocator;
pub use error::StorageError;
use locations::LocationTable;

use crate::repository::{
    InMemoryRepository, LocationMap, LutemonRecord, RepositoryError, RosterRepository,
};

pub type Result<T> = std::result::Result<T, StorageError>;

/// How record ids are treated when a roster is rebuilt from records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IdPolicy {
    /// Persisted snapshot: ids are authoritative.
    Keep,
    /// Imported file: every record gets a new id from the allocator.
    Fresh,
}

/// A fully validated roster, installed only after every record converted.
struct Roster {
    entities: BTreeMap<LutemonId, Lutemon>,
    locations: LocationTable,
    ids: IdAllocator,
}

pub struct Storage {
    repository: Box<dyn RosterRepository>,
    rng: Box<dyn RngOracle>,
    shape_seed: u64,
    ids: IdAllocator,
    entities: BTreeMap<LutemonId, Lutemon>,
    locations: LocationTable,
    stats: GlobalStats,
}

impl Storage {
    /// Load the roster and statistics from `repository`.
    ///
    /// Unreadable snapshots degrade to empty data (with a warning) instead of
    /// failing. Shapes for new entities come from [`PcgRng`] with a random
    /// seed.
    pub fn load(repository: Box<dyn RosterRepository>) -> Self {
        Self::load_with(repository, Box::new(PcgRng), rand::random())
    }

    /// Load with an explicit randomness source for shape generation.
    pub fn load_with(
        repository: Box<dyn RosterRepository>,
        rng: Box<dyn RngOracle>,
        shape_seed: u64,
    ) -> Self {
        let records = repository.load_entities().unwrap_or_else(|e| {
            tracing::warn!("Failed to load lutemons, starting empty: {}", e);
            LocationMap::new()
        });
        let stats = repository.load_stats().unwrap_or_else(|e| {
            tracing::warn!("Failed to load stats, starting fresh: {}", e);
            GlobalStats::new()
        });

        let mut storage = Self {
            repository,
            rng,
            shape_seed,
            ids: IdAllocator::default(),
            entities: BTreeMap::new(),
            locations: LocationTable::default(),
            stats,
        };

        match storage.build_roster(&records, IdPolicy::Keep) {
            Ok(roster) => storage.install(roster),
            Err(e) => tracing::warn!("Discarding unreadable roster: {}", e),
        }

        // Ids of removed entities live on in the stats table.
        let known: Vec<LutemonId> = storage.stats.all().map(|s| s.lutemon_id()).collect();
        for id in known {
            storage.ids.observe(id);
        }

        storage.initialize_stats();
        storage.persist_stats();

        tracing::info!(
            "Storage loaded: {} lutemons, next id {}",
            storage.entities.len(),
            storage.ids.last() + 1
        );
        storage
    }

    /// Empty storage backed by an [`InMemoryRepository`].
    pub fn in_memory() -> Self {
        Self::load(Box::new(InMemoryRepository::new()))
    }

    // ========================================================================
    // Registry
    // ========================================================================

    /// Reserve the next entity id.
    pub fn allocate_id(&mut self) -> LutemonId {
        self.ids.allocate()
    }

    /// Entity factory: build a fresh Lutemon and place it at Home.
    pub fn create_entity(&mut self, name: impl Into<String>, color: Color) -> LutemonId {
        let id = self.ids.allocate();
        let shape = Shape::generate(self.rng.as_ref(), self.shape_seed, id.get());
        self.insert_home(Lutemon::new(id, name, color, shape))
    }

    /// Add an already constructed entity at Home.
    pub fn add_entity(&mut self, lutemon: Lutemon) -> Result<LutemonId> {
        if self.entities.contains_key(&lutemon.id()) {
            return Err(StorageError::DuplicateId(lutemon.id()));
        }
        self.ids.observe(lutemon.id());
        Ok(self.insert_home(lutemon))
    }

    fn insert_home(&mut self, lutemon: Lutemon) -> LutemonId {
        let id = lutemon.id();
        self.locations.push(Location::Home, id);
        self.stats.record_stats(&lutemon);

        tracing::info!("Added {} {} at home", id, lutemon.name());

        self.entities.insert(id, lutemon);
        self.persist_entities();
        self.persist_stats();
        id
    }

    /// Administrative removal. Statistics are kept for history.
    pub fn remove_entity(&mut self, id: LutemonId) -> Option<Lutemon> {
        self.locations.remove(id)?;
        let removed = self.entities.remove(&id);
        tracing::info!("Removed lutemon {}", id);
        self.persist_entities();
        removed
    }

    pub fn entity(&self, id: LutemonId) -> Option<&Lutemon> {
        self.entities.get(&id)
    }

    pub(crate) fn entity_mut(&mut self, id: LutemonId) -> Option<&mut Lutemon> {
        self.entities.get_mut(&id)
    }

    pub fn entity_location(&self, id: LutemonId) -> Option<Location> {
        self.locations.locate(id)
    }

    pub fn entity_count(&self) -> usize {
        self.locations.len()
    }

    // ========================================================================
    // Locations
    // ========================================================================

    /// Ids at `location`, in insertion order.
    pub fn members(&self, location: Location) -> &[LutemonId] {
        self.locations.members(location)
    }

    /// Entities at `location`, in insertion order.
    pub fn entities_by_location(&self, location: Location) -> Vec<&Lutemon> {
        self.locations
            .members(location)
            .iter()
            .filter_map(|id| self.entities.get(id))
            .collect()
    }

    /// Move an entity to the end of `target`'s member list.
    ///
    /// Fails without mutation when `target` is full or `id` is unknown.
    pub fn move_entity(&mut self, id: LutemonId, target: Location) -> Result<()> {
        if self.locations.is_full(target) {
            tracing::debug!("Cannot move {} to {}: full", id, target);
            return Err(StorageError::BattleFull {
                capacity: GameConfig::BATTLE_CAPACITY,
            });
        }
        if !self.entities.contains_key(&id) {
            return Err(StorageError::NotFound(id));
        }

        self.relocate(id, target);
        tracing::debug!("Moved {} to {}", id, target);
        self.persist_entities();
        Ok(())
    }

    /// Unchecked move used inside transactions that persist once at the end.
    pub(crate) fn relocate(&mut self, id: LutemonId, target: Location) {
        self.locations.remove(id);
        self.locations.push(target, id);
    }

    /// Snapshot of every location as plain records.
    pub fn location_map(&self) -> LocationMap {
        let mut map = LocationMap::new();
        for location in Location::ALL {
            *map.get_mut(location) = self
                .entities_by_location(location)
                .into_iter()
                .map(LutemonRecord::from_lutemon)
                .collect();
        }
        map
    }

    // ========================================================================
    // Actions and statistics
    // ========================================================================

    pub fn stats(&self) -> &GlobalStats {
        &self.stats
    }

    /// Count a finished battle and persist the statistics.
    pub fn record_battle_outcome(&mut self, winner: LutemonId, loser: LutemonId) {
        self.record_battle(winner, loser);
        self.persist_stats();
    }

    pub(crate) fn record_battle(&mut self, winner: LutemonId, loser: LutemonId) {
        self.stats.record_battle(winner, loser);
    }

    /// Count a training session and append a history point for the entity.
    pub fn record_training(&mut self, id: LutemonId) -> Result<()> {
        let lutemon = self.entities.get(&id).ok_or(StorageError::NotFound(id))?;
        self.stats.record_training(lutemon);
        Ok(())
    }

    /// Append a history point for the entity, if it exists.
    pub(crate) fn record_stats(&mut self, id: LutemonId) {
        if let Some(lutemon) = self.entities.get(&id) {
            self.stats.record_stats(lutemon);
        }
    }

    /// One training session: train, record it, persist both tables.
    pub fn train_entity(&mut self, id: LutemonId) -> Result<()> {
        let lutemon = self.entities.get_mut(&id).ok_or(StorageError::NotFound(id))?;
        lutemon.train();
        tracing::info!(
            "{} trained: attack {}, experience {}",
            lutemon.name(),
            lutemon.total_attack(),
            lutemon.experience()
        );

        self.record_training(id)?;
        self.persist_all();
        Ok(())
    }

    /// Restore an entity to full health.
    pub fn heal_entity(&mut self, id: LutemonId) -> Result<()> {
        self.entities
            .get_mut(&id)
            .ok_or(StorageError::NotFound(id))?
            .heal();
        self.persist_entities();
        Ok(())
    }

    // ========================================================================
    // Import / export / clear
    // ========================================================================

    /// Replace the whole roster with the repository's import file.
    ///
    /// Imported entities get fresh ids. On any error the current roster is
    /// left untouched. Returns the number of imported entities.
    pub fn import_entities(&mut self) -> Result<usize> {
        let records = self.repository.import_entities()?;
        let roster = self.build_roster(&records, IdPolicy::Fresh)?;
        let count = roster.entities.len();

        self.install(roster);
        self.initialize_stats();
        self.persist_all();

        tracing::info!("Imported {} lutemons", count);
        Ok(count)
    }

    /// Write the current roster to the repository's export file.
    pub fn export_entities(&self) -> Result<()> {
        self.repository.export_entities(&self.location_map())?;
        Ok(())
    }

    /// Delete persisted data and reset to an empty roster.
    pub fn clear_all(&mut self) -> Result<()> {
        self.repository.clear_all()?;
        self.entities.clear();
        self.locations = LocationTable::default();
        self.stats = GlobalStats::new();
        self.ids = IdAllocator::default();
        tracing::info!("Storage cleared");
        Ok(())
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Save the entity table. Returns `false` (and logs) on failure.
    pub fn persist_entities(&self) -> bool {
        match self.repository.save_entities(&self.location_map()) {
            Ok(()) => {
                tracing::debug!("Successfully saved lutemons");
                true
            }
            Err(e) => {
                tracing::error!("Failed to save lutemons: {}", e);
                false
            }
        }
    }

    /// Save the statistics table. Returns `false` (and logs) on failure.
    pub fn persist_stats(&self) -> bool {
        match self.repository.save_stats(&self.stats) {
            Ok(()) => {
                tracing::debug!("Successfully saved stats");
                true
            }
            Err(e) => {
                tracing::error!("Failed to save stats: {}", e);
                false
            }
        }
    }

    pub fn persist_all(&self) -> bool {
        let entities = self.persist_entities();
        let stats = self.persist_stats();
        entities && stats
    }

    // ========================================================================
    // Roster rebuild
    // ========================================================================

    fn build_roster(
        &self,
        records: &LocationMap,
        policy: IdPolicy,
    ) -> std::result::Result<Roster, RepositoryError> {
        let mut ids = match policy {
            IdPolicy::Keep => IdAllocator::starting_after(records.max_id()),
            IdPolicy::Fresh => self.ids,
        };
        let mut entities = BTreeMap::new();
        let mut locations = LocationTable::default();

        for (location, record) in records.iter() {
            let color = record
                .color()
                .map_err(|e| RepositoryError::CorruptedData(e.to_string()))?;
            if record.attack.checked_add(record.experience).is_none() {
                return Err(RepositoryError::CorruptedData(format!(
                    "lutemon '{}' has attack {} and experience {} beyond range",
                    record.name, record.attack, record.experience
                )));
            }
            if record.health > record.max_health {
                return Err(RepositoryError::CorruptedData(format!(
                    "lutemon '{}' has health {} above max {}",
                    record.name, record.health, record.max_health
                )));
            }
            let id = match policy {
                IdPolicy::Keep => LutemonId(record.id),
                IdPolicy::Fresh => ids.allocate(),
            };

            if entities.contains_key(&id) {
                return Err(RepositoryError::CorruptedData(format!(
                    "lutemon {} appears more than once",
                    id
                )));
            }
            if locations.is_full(location) {
                return Err(RepositoryError::CorruptedData(format!(
                    "{} holds more than {} lutemons",
                    location,
                    GameConfig::BATTLE_CAPACITY
                )));
            }

            let shape = record
                .shape()
                .unwrap_or_else(|| Shape::generate(self.rng.as_ref(), self.shape_seed, id.get()));
            let lutemon =
                Lutemon::with_stats(id, record.name.clone(), color, shape, record.combat_stats());

            entities.insert(id, lutemon);
            locations.push(location, id);
        }

        Ok(Roster {
            entities,
            locations,
            ids,
        })
    }

    fn install(&mut self, roster: Roster) {
        self.entities = roster.entities;
        self.locations = roster.locations;
        self.ids = roster.ids;
    }

    /// Create statistics (with an initial history point) for entities that
    /// have none yet.
    fn initialize_stats(&mut self) {
        for lutemon in self.entities.values() {
            if !self.stats.contains(lutemon.id()) {
                self.stats.record_stats(lutemon);
            }
        }
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("ids", &self.ids)
            .field("entities", &self.entities.len())
            .field("locations", &self.locations)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutemon_core::FixedRng;

    fn storage() -> Storage {
        Storage::load_with(Box::new(InMemoryRepository::new()), Box::new(FixedRng(3)), 1)
    }

    #[test]
    fn add_places_entity_at_home() {
        let mut storage = storage();
        let id = storage.create_entity("White1", Color::White);

        assert_eq!(storage.entity_count(), 1);
        assert_eq!(storage.entity(id).unwrap().name(), "White1");
        assert_eq!(storage.entity_location(id), Some(Location::Home));
        assert_eq!(storage.stats().lutemon_stats(id).unwrap().attack_history(), &[5]);
    }

    #[test]
    fn ids_are_monotonic() {
        let mut storage = storage();
        let a = storage.create_entity("A", Color::White);
        let b = storage.create_entity("B", Color::Black);
        storage.remove_entity(b);
        let c = storage.create_entity("C", Color::Green);

        assert_eq!(a, LutemonId(1));
        assert_eq!(b, LutemonId(2));
        assert_eq!(c, LutemonId(3));
    }

    #[test]
    fn move_between_locations() {
        let mut storage = storage();
        let id = storage.create_entity("White1", Color::White);

        storage.move_entity(id, Location::Training).unwrap();
        assert_eq!(storage.entity_location(id), Some(Location::Training));

        storage.move_entity(id, Location::Battle).unwrap();
        assert_eq!(storage.entity_location(id), Some(Location::Battle));
        assert!(storage.members(Location::Training).is_empty());
    }

    #[test]
    fn battle_capacity_is_enforced() {
        let mut storage = storage();
        let ids: Vec<_> = (0..3)
            .map(|i| storage.create_entity(format!("L{i}"), Color::Pink))
            .collect();
        storage.move_entity(ids[0], Location::Battle).unwrap();
        storage.move_entity(ids[1], Location::Battle).unwrap();

        let before_home = storage.members(Location::Home).to_vec();
        let before_battle = storage.members(Location::Battle).to_vec();

        let err = storage.move_entity(ids[2], Location::Battle).unwrap_err();
        assert!(matches!(err, StorageError::BattleFull { capacity: 2 }));
        assert_eq!(storage.members(Location::Home), before_home.as_slice());
        assert_eq!(storage.members(Location::Battle), before_battle.as_slice());
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut storage = storage();
        let err = storage.move_entity(LutemonId(9999), Location::Training).unwrap_err();

        assert!(matches!(err, StorageError::NotFound(LutemonId(9999))));
        assert!(storage.entity(LutemonId(9999)).is_none());
        assert!(storage.entity_location(LutemonId(9999)).is_none());
    }

    fn assert_partitioned(storage: &Storage, ids: &[LutemonId]) {
        let total: usize = Location::ALL
            .into_iter()
            .map(|location| storage.members(location).len())
            .sum();
        assert_eq!(total, storage.entity_count());

        for &id in ids {
            let holders: Vec<_> = Location::ALL
                .into_iter()
                .filter(|&location| storage.members(location).contains(&id))
                .collect();
            assert_eq!(holders, vec![storage.entity_location(id).unwrap()], "{id}");
        }
    }

    #[test]
    fn moves_preserve_count_and_partition() {
        let mut storage = storage();
        let ids: Vec<_> = (0..4)
            .map(|i| storage.create_entity(format!("L{i}"), Color::Orange))
            .collect();

        let steps = [
            (ids[0], Location::Training, true),
            (ids[1], Location::Battle, true),
            (ids[2], Location::Battle, true),
            (ids[3], Location::Battle, false),
            (LutemonId(9999), Location::Home, false),
            (ids[0], Location::Training, true),
            (ids[1], Location::Home, true),
            (ids[3], Location::Battle, true),
            (ids[2], Location::Training, true),
        ];

        for (id, target, succeeds) in steps {
            assert_eq!(storage.move_entity(id, target).is_ok(), succeeds, "{id} -> {target}");
            assert_eq!(storage.entity_count(), ids.len());
            assert_partitioned(&storage, &ids);
        }

        assert_eq!(storage.members(Location::Battle), &[ids[3]]);
        assert_eq!(storage.members(Location::Training), &[ids[0], ids[2]]);
        assert_eq!(storage.members(Location::Home), &[ids[1]]);
    }

    #[test]
    fn members_keep_insertion_order() {
        let mut storage = storage();
        let a = storage.create_entity("A", Color::White);
        let b = storage.create_entity("B", Color::Green);
        let c = storage.create_entity("C", Color::Orange);

        storage.move_entity(a, Location::Training).unwrap();
        storage.move_entity(a, Location::Home).unwrap();

        assert_eq!(storage.members(Location::Home), &[b, c, a]);
        let names: Vec<_> = storage
            .entities_by_location(Location::Home)
            .iter()
            .map(|l| l.name().to_string())
            .collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn train_entity_records_history() {
        let mut storage = storage();
        let id = storage.create_entity("G", Color::Green);
        storage.train_entity(id).unwrap();
        storage.train_entity(id).unwrap();

        let lutemon = storage.entity(id).unwrap();
        assert_eq!(lutemon.experience(), 2);
        assert_eq!(lutemon.base_attack(), 12);

        let stats = storage.stats();
        assert_eq!(stats.total_trainings(), 2);
        let own = stats.lutemon_stats(id).unwrap();
        assert_eq!(own.training_count(), 2);
        assert_eq!(own.attack_history(), &[6, 10, 14]);
        assert_eq!(own.experience_history(), &[0, 1, 2]);
    }

    #[test]
    fn remove_keeps_stats() {
        let mut storage = storage();
        let id = storage.create_entity("W", Color::White);

        let removed = storage.remove_entity(id).unwrap();
        assert_eq!(removed.id(), id);
        assert_eq!(storage.entity_count(), 0);
        assert!(storage.entity_location(id).is_none());
        assert!(storage.stats().lutemon_stats(id).is_some());
        assert!(storage.remove_entity(id).is_none());
    }

    fn record(id: u32, name: &str, color: &str) -> LutemonRecord {
        LutemonRecord {
            id,
            name: name.to_string(),
            color: color.to_string(),
            attack: 9,
            defense: 0,
            experience: 0,
            max_health: 16,
            health: 16,
            shape: vec![],
        }
    }

    #[test]
    fn load_seeds_allocator_and_missing_stats() {
        let map = LocationMap {
            home: vec![record(5, "Five", "black")],
            training: vec![],
            battle: vec![record(2, "Two", "Black")],
        };
        let repo = InMemoryRepository::with_snapshots(map, GlobalStats::new());
        let mut storage = Storage::load_with(Box::new(repo), Box::new(FixedRng(3)), 1);

        assert_eq!(storage.entity_count(), 2);
        assert_eq!(storage.entity_location(LutemonId(2)), Some(Location::Battle));
        assert!(storage.stats().contains(LutemonId(5)));
        assert_eq!(storage.entity(LutemonId(5)).unwrap().shape().point_count(), 3);
        assert_eq!(storage.create_entity("Six", Color::White), LutemonId(6));
    }

    #[test]
    fn overfull_battle_snapshot_is_discarded() {
        let map = LocationMap {
            battle: vec![
                record(1, "A", "black"),
                record(2, "B", "black"),
                record(3, "C", "black"),
            ],
            ..LocationMap::default()
        };
        let repo = InMemoryRepository::with_snapshots(map, GlobalStats::new());
        let storage = Storage::load(Box::new(repo));

        assert_eq!(storage.entity_count(), 0);
    }

    #[test]
    fn import_replaces_roster_through_memory() {
        let map = LocationMap {
            training: vec![record(77, "Imported", "BLACK")],
            ..LocationMap::default()
        };
        let repo = InMemoryRepository::with_import(map);
        let mut storage = Storage::load_with(Box::new(repo), Box::new(FixedRng(3)), 1);
        let old = storage.create_entity("Old", Color::Pink);

        assert_eq!(storage.import_entities().unwrap(), 1);
        assert!(storage.entity(old).is_none());
        let imported = storage.entities_by_location(Location::Training);
        assert_eq!(imported[0].id(), LutemonId(2));
        assert_eq!(imported[0].color(), Color::Black);
    }

    #[test]
    fn import_without_source_fails() {
        let mut storage = storage();
        storage.create_entity("Stay", Color::Green);

        assert!(matches!(
            storage.import_entities(),
            Err(StorageError::Repository(RepositoryError::NothingToImport))
        ));
        assert_eq!(storage.entity_count(), 1);
    }

    #[test]
    fn location_map_mirrors_locations() {
        let mut storage = storage();
        let a = storage.create_entity("A", Color::White);
        let b = storage.create_entity("B", Color::Orange);
        storage.move_entity(b, Location::Battle).unwrap();

        let map = storage.location_map();
        assert_eq!(map.home.len(), 1);
        assert_eq!(map.home[0].id, a.get());
        assert_eq!(map.battle[0].name, "B");
        assert!(map.training.is_empty());
    }

    #[test]
    fn heal_restores_health() {
        let mut storage = storage();
        let id = storage.create_entity("Hurt", Color::Orange);
        storage.entity_mut(id).unwrap().take_damage(10);
        assert_eq!(storage.entity(id).unwrap().health(), 7);

        storage.heal_entity(id).unwrap();
        assert_eq!(storage.entity(id).unwrap().health(), 17);
        assert!(storage.heal_entity(LutemonId(42)).is_err());
    }

    #[test]
    fn battle_outcome_updates_counters() {
        let mut storage = storage();
        let a = storage.create_entity("A", Color::Black);
        let b = storage.create_entity("B", Color::White);

        storage.record_battle_outcome(a, b);
        storage.record_battle_outcome(a, b);

        let stats = storage.stats();
        assert_eq!(stats.total_battles(), 2);
        assert_eq!(stats.lutemon_stats(a).unwrap().battles_won(), 2);
        assert_eq!(stats.lutemon_stats(b).unwrap().battles_lost(), 2);
        assert_eq!(stats.lutemon_stats(b).unwrap().win_rate(), Some(0.0));
    }

    #[test]
    fn reserved_ids_are_skipped() {
        let mut storage = storage();
        let reserved = storage.allocate_id();
        let created = storage.create_entity("Next", Color::Pink);

        assert_eq!(reserved, LutemonId(1));
        assert_eq!(created, LutemonId(2));
        assert!(storage.entity(reserved).is_none());

        let manual = Lutemon::new(reserved, "Manual", Color::Green, Shape::default());
        assert_eq!(storage.add_entity(manual).unwrap(), reserved);
        assert_eq!(storage.members(Location::Home), &[created, reserved]);
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let mut storage = storage();
        let id = storage.create_entity("W", Color::White);
        let copy = storage.entity(id).unwrap().clone();

        assert!(matches!(
            storage.add_entity(copy),
            Err(StorageError::DuplicateId(dup)) if dup == id
        ));
        assert_eq!(storage.entity_count(), 1);
    }
}
