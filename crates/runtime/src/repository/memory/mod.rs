//! In-memory repository implementation for tests and non-persistent runs.

use std::sync::RwLock;

use lutemon_core::GlobalStats;

use crate::repository::{LocationMap, RepositoryError, Result, RosterRepository};

/// In-memory implementation of [`RosterRepository`].
///
/// The export slot doubles as the import source, so exporting and importing
/// round-trips through memory.
#[derive(Default)]
pub struct InMemoryRepository {
    entities: RwLock<Option<LocationMap>>,
    stats: RwLock<Option<GlobalStats>>,
    exported: RwLock<Option<LocationMap>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a pending import file.
    pub fn with_import(locations: LocationMap) -> Self {
        Self {
            exported: RwLock::new(Some(locations)),
            ..Self::default()
        }
    }

    /// Create with previously saved snapshots.
    pub fn with_snapshots(locations: LocationMap, stats: GlobalStats) -> Self {
        Self {
            entities: RwLock::new(Some(locations)),
            stats: RwLock::new(Some(stats)),
            ..Self::default()
        }
    }

    /// Last saved entity table, if any.
    pub fn saved_entities(&self) -> Option<LocationMap> {
        self.entities.read().ok()?.clone()
    }

    /// Last saved statistics, if any.
    pub fn saved_stats(&self) -> Option<GlobalStats> {
        self.stats.read().ok()?.clone()
    }

    /// Last exported entity table, if any.
    pub fn exported(&self) -> Option<LocationMap> {
        self.exported.read().ok()?.clone()
    }
}

impl RosterRepository for InMemoryRepository {
    fn save_entities(&self, locations: &LocationMap) -> Result<()> {
        let mut entities = self
            .entities
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *entities = Some(locations.clone());
        Ok(())
    }

    fn load_entities(&self) -> Result<LocationMap> {
        let entities = self
            .entities
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(entities.clone().unwrap_or_default())
    }

    fn save_stats(&self, stats: &GlobalStats) -> Result<()> {
        let mut saved = self
            .stats
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *saved = Some(stats.clone());
        Ok(())
    }

    fn load_stats(&self) -> Result<GlobalStats> {
        let stats = self
            .stats
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(stats.clone().unwrap_or_default())
    }

    fn import_entities(&self) -> Result<LocationMap> {
        let exported = self
            .exported
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        exported.clone().ok_or(RepositoryError::NothingToImport)
    }

    fn export_entities(&self, locations: &LocationMap) -> Result<()> {
        let mut exported = self
            .exported
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *exported = Some(locations.clone());
        Ok(())
    }

    fn clear_all(&self) -> Result<()> {
        *self
            .entities
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)? = None;
        *self
            .stats
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)? = None;
        Ok(())
    }
}
