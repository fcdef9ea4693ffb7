use std::collections::BTreeMap;

use crate::entity::{Color, Lutemon, LutemonId};

use super::LutemonStats;

/// Roster-wide counters plus every entity's [`LutemonStats`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalStats {
    total_battles: u32,
    total_trainings: u32,
    lutemons: BTreeMap<LutemonId, LutemonStats>,
}

impl GlobalStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_battles(&self) -> u32 {
        self.total_battles
    }

    pub fn total_trainings(&self) -> u32 {
        self.total_trainings
    }

    pub fn lutemon_stats(&self, id: LutemonId) -> Option<&LutemonStats> {
        self.lutemons.get(&id)
    }

    pub fn contains(&self, id: LutemonId) -> bool {
        self.lutemons.contains_key(&id)
    }

    /// Stats of every entity ever observed, ordered by id.
    pub fn all(&self) -> impl Iterator<Item = &LutemonStats> {
        self.lutemons.values()
    }

    /// Returns the entity's stats, creating them on first sight.
    pub fn ensure(&mut self, lutemon: &Lutemon) -> &mut LutemonStats {
        self.lutemons
            .entry(lutemon.id())
            .or_insert_with(|| LutemonStats::new(lutemon.id(), lutemon.color()))
    }

    /// Appends a history point for the entity, creating its stats if needed.
    pub fn record_stats(&mut self, lutemon: &Lutemon) {
        self.ensure(lutemon).record_stats(lutemon);
    }

    /// Counts a finished battle. Unknown ids still bump the global counter.
    pub fn record_battle(&mut self, winner: LutemonId, loser: LutemonId) {
        self.total_battles += 1;
        if let Some(stats) = self.lutemons.get_mut(&winner) {
            stats.record_win();
        }
        if let Some(stats) = self.lutemons.get_mut(&loser) {
            stats.record_loss();
        }
    }

    /// Counts a training session and records the entity's new stats.
    pub fn record_training(&mut self, lutemon: &Lutemon) {
        self.total_trainings += 1;
        let stats = self.ensure(lutemon);
        stats.record_training();
        stats.record_stats(lutemon);
    }

    /// Number of known entities per color, recomputed on every call.
    pub fn color_distribution(&self) -> BTreeMap<Color, u32> {
        let mut distribution = BTreeMap::new();
        for stats in self.lutemons.values() {
            *distribution.entry(stats.color_type()).or_insert(0) += 1;
        }
        distribution
    }
}
