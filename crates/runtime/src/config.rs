//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use lutemon_core::GameConfig;

use crate::repository::{FileRepository, InMemoryRepository, RepositoryError, RosterRepository};
use crate::storage::Storage;

/// Settings needed to open storage and run battles.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub enable_persistence: bool,
    pub save_data_dir: Option<PathBuf>,
    pub export_path: Option<PathBuf>,
    pub battle_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            enable_persistence: true,
            save_data_dir: None,
            export_path: None,
            battle_seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ENABLE_PERSISTENCE` - Save to disk (default: true)
    /// - `SAVE_DATA_DIR` - Directory for save data (default: platform-specific)
    /// - `LUTEMON_EXPORT_PATH` - Import/export file (default: `<data>/export/lutemons.json`)
    /// - `BATTLE_SEED` - Fixed seed for critical rolls (default: random per battle)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(enable) = read_env::<bool>("ENABLE_PERSISTENCE") {
            config.enable_persistence = enable;
        }

        config.save_data_dir = env::var("SAVE_DATA_DIR").ok().map(PathBuf::from);
        config.export_path = env::var("LUTEMON_EXPORT_PATH").ok().map(PathBuf::from);
        config.battle_seed = read_env::<u64>("BATTLE_SEED");

        config
    }

    /// Save directory: explicit setting, else the platform data directory.
    ///
    /// - Linux: `~/.local/share/lutemon`
    /// - macOS: `~/Library/Application Support/lutemon`
    /// - Fallback: `./save_data`
    pub fn data_dir(&self) -> PathBuf {
        self.save_data_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "lutemon")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("./save_data"))
        })
    }

    /// Repository selected by `enable_persistence`.
    pub fn open_repository(&self) -> Result<Box<dyn RosterRepository>, RepositoryError> {
        if !self.enable_persistence {
            tracing::info!("Persistence disabled, using in-memory repository");
            return Ok(Box::new(InMemoryRepository::new()));
        }

        let data_dir = self.data_dir();
        let repository = match &self.export_path {
            Some(export) => FileRepository::with_export_path(&data_dir, export)?,
            None => FileRepository::new(&data_dir)?,
        };
        tracing::info!("Using save directory {}", data_dir.display());
        Ok(Box::new(repository))
    }

    pub fn open_storage(&self) -> Result<Storage, RepositoryError> {
        Ok(Storage::load(self.open_repository()?))
    }

    /// Configured battle seed, or a fresh random one.
    pub fn battle_seed(&self) -> u64 {
        self.battle_seed.unwrap_or_else(rand::random)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = RuntimeConfig {
            save_data_dir: Some(PathBuf::from("/tmp/lutemon-test")),
            ..RuntimeConfig::default()
        };
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/lutemon-test"));
    }

    #[test]
    fn fixed_seed_is_reused() {
        let config = RuntimeConfig {
            battle_seed: Some(42),
            ..RuntimeConfig::default()
        };
        assert_eq!(config.battle_seed(), 42);
        assert_eq!(config.battle_seed(), 42);
    }

    #[test]
    fn disabled_persistence_opens_empty_storage() {
        let config = RuntimeConfig {
            enable_persistence: false,
            ..RuntimeConfig::default()
        };
        let storage = config.open_storage().unwrap();
        assert_eq!(storage.entity_count(), 0);
    }

    #[test]
    fn file_storage_round_trips_through_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = RuntimeConfig {
            save_data_dir: Some(dir.path().to_path_buf()),
            ..RuntimeConfig::default()
        };

        let mut storage = config.open_storage().unwrap();
        storage.create_entity("Pinky", lutemon_core::Color::Pink);
        drop(storage);

        let storage = config.open_storage().unwrap();
        assert_eq!(storage.entity_count(), 1);
    }
}
