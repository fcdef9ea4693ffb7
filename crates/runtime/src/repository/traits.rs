//! Persistence gateway contract.

use lutemon_core::GlobalStats;

use super::{LocationMap, Result};

/// Snapshot persistence for the roster and its statistics.
///
/// Loads never fail just because nothing was saved yet: they return an empty
/// [`LocationMap`] or a zeroed [`GlobalStats`]. An `Err` means the data
/// exists but could not be read.
pub trait RosterRepository: Send + Sync {
    /// Overwrite the persisted entity table.
    fn save_entities(&self, locations: &LocationMap) -> Result<()>;

    /// Load the entity table, or an empty map when none was saved.
    fn load_entities(&self) -> Result<LocationMap>;

    /// Overwrite the persisted statistics.
    fn save_stats(&self, stats: &GlobalStats) -> Result<()>;

    /// Load statistics, or zeroed statistics when none were saved.
    fn load_stats(&self) -> Result<GlobalStats>;

    /// Read a complete entity table from the external import source.
    ///
    /// Either the whole map is returned or an error; never a partial map.
    fn import_entities(&self) -> Result<LocationMap>;

    /// Write the entity table to the external export target.
    fn export_entities(&self, locations: &LocationMap) -> Result<()>;

    /// Delete every persisted snapshot. Subsequent loads see no prior data.
    fn clear_all(&self) -> Result<()>;
}
