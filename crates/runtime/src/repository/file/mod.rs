//! File-based repository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use lutemon_core::GlobalStats;

use crate::repository::{
    EntitySnapshot, LocationMap, RepositoryError, Result, RosterRepository, SCHEMA_VERSION,
    StatsSnapshot,
};

/// File-based implementation of [`RosterRepository`].
///
/// # File Format
///
/// - `roster.json`: entity table, pretty JSON with a `schema` field
/// - `stats.bin`: statistics in bincode format
/// - export file (default `export/lutemons.json`): plain location map in JSON
///
/// Snapshots are written to a temp file and atomically renamed, so a failed
/// save leaves the previous snapshot intact.
pub struct FileRepository {
    base_dir: PathBuf,
    export_path: PathBuf,
}

impl FileRepository {
    const ROSTER_FILE: &'static str = "roster.json";
    const STATS_FILE: &'static str = "stats.bin";
    const EXPORT_FILE: &'static str = "lutemons.json";

    /// Create a repository rooted at `base_dir`, exporting next to it.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let export_path = base_dir.join("export").join(Self::EXPORT_FILE);
        Self::with_export_path(base_dir, export_path)
    }

    /// Create a repository with an explicit import/export file.
    pub fn with_export_path(
        base_dir: impl AsRef<Path>,
        export_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            base_dir,
            export_path: export_path.as_ref().to_path_buf(),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    fn roster_path(&self) -> PathBuf {
        self.base_dir.join(Self::ROSTER_FILE)
    }

    fn stats_path(&self) -> PathBuf {
        self.base_dir.join(Self::STATS_FILE)
    }

    /// Write to `<path>.tmp`, then rename over `path`.
    fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }
        let mut temp = path.as_os_str().to_owned();
        temp.push(".tmp");
        let temp_path = PathBuf::from(temp);

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, path).map_err(RepositoryError::Io)?;
        Ok(())
    }

    fn check_schema(schema: u32, what: &str) -> Result<()> {
        if schema > SCHEMA_VERSION {
            return Err(RepositoryError::CorruptedData(format!(
                "{what} schema {schema} is newer than supported {SCHEMA_VERSION}"
            )));
        }
        Ok(())
    }
}

impl RosterRepository for FileRepository {
    fn save_entities(&self, locations: &LocationMap) -> Result<()> {
        let path = self.roster_path();
        let snapshot = EntitySnapshot::new(locations.clone());
        let json = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        Self::write_atomic(&path, &json)?;

        tracing::debug!(
            "Saved {} lutemons to {}",
            locations.len(),
            path.display()
        );
        Ok(())
    }

    fn load_entities(&self) -> Result<LocationMap> {
        let path = self.roster_path();

        if !path.exists() {
            tracing::debug!("No roster at {}, starting empty", path.display());
            return Ok(LocationMap::new());
        }

        let json = fs::read(&path).map_err(RepositoryError::Io)?;
        let snapshot: EntitySnapshot =
            serde_json::from_slice(&json).map_err(|e| RepositoryError::Json(e.to_string()))?;
        Self::check_schema(snapshot.schema, "roster")?;

        tracing::debug!(
            "Loaded {} lutemons from {}",
            snapshot.locations.len(),
            path.display()
        );
        Ok(snapshot.locations)
    }

    fn save_stats(&self, stats: &GlobalStats) -> Result<()> {
        let path = self.stats_path();
        let bytes = bincode::serialize(&StatsSnapshot::new(stats.clone()))
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        Self::write_atomic(&path, &bytes)?;

        tracing::debug!("Saved stats to {}", path.display());
        Ok(())
    }

    fn load_stats(&self) -> Result<GlobalStats> {
        let path = self.stats_path();

        if !path.exists() {
            tracing::debug!("No stats at {}, starting fresh", path.display());
            return Ok(GlobalStats::new());
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let snapshot: StatsSnapshot = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        Self::check_schema(snapshot.schema, "stats")?;

        tracing::debug!("Loaded stats from {}", path.display());
        Ok(snapshot.stats)
    }

    fn import_entities(&self) -> Result<LocationMap> {
        let path = &self.export_path;

        if !path.exists() {
            return Err(RepositoryError::NothingToImport);
        }

        let json = fs::read(path).map_err(RepositoryError::Io)?;
        let locations: LocationMap =
            serde_json::from_slice(&json).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::info!(
            "Imported {} lutemons from {}",
            locations.len(),
            path.display()
        );
        Ok(locations)
    }

    fn export_entities(&self, locations: &LocationMap) -> Result<()> {
        let json = serde_json::to_vec_pretty(locations)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        Self::write_atomic(&self.export_path, &json)?;

        tracing::info!(
            "Exported {} lutemons to {}",
            locations.len(),
            self.export_path.display()
        );
        Ok(())
    }

    fn clear_all(&self) -> Result<()> {
        for path in [self.roster_path(), self.stats_path()] {
            if path.exists() {
                fs::remove_file(&path).map_err(RepositoryError::Io)?;
                tracing::debug!("Deleted {}", path.display());
            }
        }
        tracing::info!("All saved data cleared");
        Ok(())
    }
}
