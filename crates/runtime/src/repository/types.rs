//! Snapshot records shared by all repositories.
//!
//! These are plain serde records, independent of the in-memory entity types,
//! so the on-disk layout only changes when these structs change.

use lutemon_core::{Color, CombatStats, CoreError, GlobalStats, Location, Lutemon, Shape};
use serde::{Deserialize, Serialize};

/// Current snapshot layout version, written into every saved table.
pub const SCHEMA_VERSION: u32 = 1;

/// One Lutemon as stored in the entity table and the export file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LutemonRecord {
    pub id: u32,
    pub name: String,
    /// Color name, matched case-insensitively on load.
    pub color: String,
    pub attack: u32,
    pub defense: u32,
    pub experience: u32,
    pub max_health: u32,
    pub health: u32,
    /// Cosmetic shape point indices; absent in hand-written import files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shape: Vec<u8>,
}

impl LutemonRecord {
    pub fn from_lutemon(lutemon: &Lutemon) -> Self {
        let stats = lutemon.combat_stats();
        Self {
            id: lutemon.id().get(),
            name: lutemon.name().to_string(),
            color: lutemon.color().to_string(),
            attack: stats.attack,
            defense: stats.defense,
            experience: stats.experience,
            max_health: stats.max_health,
            health: stats.health,
            shape: lutemon.shape().points().to_vec(),
        }
    }

    pub fn color(&self) -> Result<Color, CoreError> {
        Color::parse(&self.color)
    }

    pub fn combat_stats(&self) -> CombatStats {
        CombatStats {
            attack: self.attack,
            defense: self.defense,
            experience: self.experience,
            max_health: self.max_health,
            health: self.health,
        }
    }

    /// Stored shape, if the record carries one.
    pub fn shape(&self) -> Option<Shape> {
        (!self.shape.is_empty()).then(|| Shape::from_points(self.shape.iter().copied()))
    }
}

/// Ordered members of every location.
///
/// Serialized as `{"home": [...], "training": [...], "battle": [...]}`;
/// missing locations read as empty lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationMap {
    #[serde(default)]
    pub home: Vec<LutemonRecord>,
    #[serde(default)]
    pub training: Vec<LutemonRecord>,
    #[serde(default)]
    pub battle: Vec<LutemonRecord>,
}

impl LocationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, location: Location) -> &[LutemonRecord] {
        match location {
            Location::Home => &self.home,
            Location::Training => &self.training,
            Location::Battle => &self.battle,
        }
    }

    pub fn get_mut(&mut self, location: Location) -> &mut Vec<LutemonRecord> {
        match location {
            Location::Home => &mut self.home,
            Location::Training => &mut self.training,
            Location::Battle => &mut self.battle,
        }
    }

    /// Every record with its location, in location then member order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &LutemonRecord)> {
        Location::ALL
            .into_iter()
            .flat_map(move |location| self.get(location).iter().map(move |r| (location, r)))
    }

    pub fn len(&self) -> usize {
        self.home.len() + self.training.len() + self.battle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest record id, or 0 for an empty map.
    pub fn max_id(&self) -> u32 {
        self.iter().map(|(_, r)| r.id).max().unwrap_or(0)
    }
}

/// Versioned envelope for the persisted entity table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub schema: u32,
    #[serde(flatten)]
    pub locations: LocationMap,
}

impl EntitySnapshot {
    pub fn new(locations: LocationMap) -> Self {
        Self {
            schema: SCHEMA_VERSION,
            locations,
        }
    }
}

/// Versioned envelope for the persisted statistics table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub schema: u32,
    pub stats: GlobalStats,
}

impl StatsSnapshot {
    pub fn new(stats: GlobalStats) -> Self {
        Self {
            schema: SCHEMA_VERSION,
            stats,
        }
    }
}
