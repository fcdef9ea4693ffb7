//! Storage persistence against the file repository.

use std::fs;

use lutemon_core::{Color, GlobalStats, Location, LutemonId};
use lutemon_runtime::repository::{LocationMap, RepositoryError, RosterRepository};
use lutemon_runtime::{FileRepository, Storage, StorageError};
use tempfile::TempDir;

fn open(dir: &TempDir) -> Storage {
    let repo = FileRepository::new(dir.path().join("save")).unwrap();
    Storage::load(Box::new(repo))
}

#[test]
fn roster_survives_reload() {
    let dir = TempDir::new().unwrap();

    let (white, black) = {
        let mut storage = open(&dir);
        let white = storage.create_entity("White1", Color::White);
        let black = storage.create_entity("Black1", Color::Black);
        storage.move_entity(black, Location::Training).unwrap();
        storage.train_entity(black).unwrap();
        (white, black)
    };

    let storage = open(&dir);
    assert_eq!(storage.entity_count(), 2);
    assert_eq!(storage.entity_location(white), Some(Location::Home));
    assert_eq!(storage.entity_location(black), Some(Location::Training));

    let trained = storage.entity(black).unwrap();
    assert_eq!(trained.experience(), 1);
    assert_eq!(trained.base_attack(), 15);

    let stats = storage.stats();
    assert_eq!(stats.total_trainings(), 1);
    assert_eq!(stats.lutemon_stats(black).unwrap().attack_history(), &[9, 16]);
    assert_eq!(
        storage.entity(white).unwrap().shape(),
        open(&dir).entity(white).unwrap().shape()
    );
}

#[test]
fn ids_continue_after_reload_and_removal() {
    let dir = TempDir::new().unwrap();
    {
        let mut storage = open(&dir);
        storage.create_entity("A", Color::White);
        let b = storage.create_entity("B", Color::Green);
        storage.remove_entity(b);
    }

    let mut storage = open(&dir);
    assert_eq!(storage.create_entity("C", Color::Pink), LutemonId(3));
}

#[test]
fn corrupted_snapshots_degrade_to_empty() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save");
    fs::create_dir_all(&save).unwrap();
    fs::write(save.join("roster.json"), b"not json at all").unwrap();
    fs::write(save.join("stats.bin"), b"\x01").unwrap();

    let mut storage = open(&dir);
    assert_eq!(storage.entity_count(), 0);
    assert_eq!(storage.stats().total_battles(), 0);

    let id = storage.create_entity("Fresh", Color::Orange);
    assert_eq!(id, LutemonId(1));
}

#[test]
fn export_then_import_assigns_fresh_ids() {
    let dir = TempDir::new().unwrap();
    let mut storage = open(&dir);
    let white = storage.create_entity("White1", Color::White);
    let pink = storage.create_entity("Pink1", Color::Pink);
    storage.move_entity(pink, Location::Battle).unwrap();
    storage.train_entity(white).unwrap();
    storage.export_entities().unwrap();

    let imported = storage.import_entities().unwrap();
    assert_eq!(imported, 2);
    assert_eq!(storage.entity_count(), 2);
    assert!(storage.entity(white).is_none());

    let home = storage.entities_by_location(Location::Home);
    assert_eq!(home.len(), 1);
    assert_eq!(home[0].id(), LutemonId(3));
    assert_eq!(home[0].name(), "White1");
    assert_eq!(home[0].experience(), 1);
    assert_eq!(home[0].base_attack(), 7);

    let battle = storage.entities_by_location(Location::Battle);
    assert_eq!(battle[0].id(), LutemonId(4));
    assert!(storage.stats().contains(LutemonId(4)));
}

#[test]
fn failed_import_leaves_roster_untouched() {
    let dir = TempDir::new().unwrap();
    let export = dir.path().join("import.json");
    fs::write(
        &export,
        r#"{
            "home": [
                {"id": 1, "name": "Ok", "color": "GREEN", "attack": 6, "defense": 3,
                 "experience": 0, "maxHealth": 19, "health": 19},
                {"id": 2, "name": "Bad", "color": "purple", "attack": 1, "defense": 1,
                 "experience": 0, "maxHealth": 1, "health": 1}
            ]
        }"#,
    )
    .unwrap();

    let repo = FileRepository::with_export_path(dir.path().join("save"), &export).unwrap();
    let mut storage = Storage::load(Box::new(repo));
    let keep = storage.create_entity("Keeper", Color::Black);

    let err = storage.import_entities().unwrap_err();
    assert!(matches!(
        err,
        StorageError::Repository(RepositoryError::CorruptedData(_))
    ));
    assert_eq!(storage.entity_count(), 1);
    assert_eq!(storage.entity_location(keep), Some(Location::Home));
}

#[test]
fn out_of_range_import_is_rejected_whole() {
    let dir = TempDir::new().unwrap();
    let export = dir.path().join("import.json");
    let repo = FileRepository::with_export_path(dir.path().join("save"), &export).unwrap();
    let mut storage = Storage::load(Box::new(repo));
    let keep = storage.create_entity("Keeper", Color::White);

    for record in [
        r#"{"id": 1, "name": "Huge", "color": "black", "attack": 4294967295,
            "defense": 0, "experience": 1, "maxHealth": 16, "health": 16}"#,
        r#"{"id": 1, "name": "Overfull", "color": "black", "attack": 9,
            "defense": 0, "experience": 0, "maxHealth": 16, "health": 17}"#,
    ] {
        fs::write(&export, format!(r#"{{"home": [{record}]}}"#)).unwrap();

        let err = storage.import_entities().unwrap_err();
        assert!(matches!(
            err,
            StorageError::Repository(RepositoryError::CorruptedData(_))
        ));
        assert_eq!(storage.entity_count(), 1);
        assert_eq!(storage.entity(keep).unwrap().name(), "Keeper");
        assert_eq!(storage.stats().all().count(), 1);
    }
}

#[test]
fn out_of_range_snapshot_loads_empty() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save");
    fs::create_dir_all(&save).unwrap();
    fs::write(
        save.join("roster.json"),
        r#"{"schema": 1, "home": [{"id": 3, "name": "Huge", "color": "black",
            "attack": 4294967295, "defense": 0, "experience": 1,
            "maxHealth": 16, "health": 16}]}"#,
    )
    .unwrap();

    let storage = open(&dir);
    assert_eq!(storage.entity_count(), 0);
}

#[test]
fn import_accepts_case_insensitive_colors_without_shapes() {
    let dir = TempDir::new().unwrap();
    let export = dir.path().join("import.json");
    fs::write(
        &export,
        r#"{"training": [{"id": 40, "name": "Leafy", "color": "Green", "attack": 12,
            "defense": 3, "experience": 2, "maxHealth": 19, "health": 7}]}"#,
    )
    .unwrap();

    let repo = FileRepository::with_export_path(dir.path().join("save"), &export).unwrap();
    let mut storage = Storage::load(Box::new(repo));
    assert_eq!(storage.import_entities().unwrap(), 1);

    let leafy = storage.entities_by_location(Location::Training)[0];
    assert_eq!(leafy.id(), LutemonId(1));
    assert_eq!(leafy.color(), Color::Green);
    assert_eq!(leafy.total_attack(), 14);
    assert_eq!(leafy.health(), 7);
    assert!((3..=5).contains(&leafy.shape().point_count()));
}

#[test]
fn clear_all_starts_over() {
    let dir = TempDir::new().unwrap();
    let mut storage = open(&dir);
    storage.create_entity("A", Color::White);
    storage.create_entity("B", Color::White);

    storage.clear_all().unwrap();
    assert_eq!(storage.entity_count(), 0);
    assert_eq!(storage.stats().all().count(), 0);
    assert_eq!(storage.create_entity("C", Color::White), LutemonId(1));
    drop(storage);

    let storage = open(&dir);
    assert_eq!(storage.entity_count(), 1);
}

/// Repository whose writes always fail.
struct ReadOnlyRepository;

impl RosterRepository for ReadOnlyRepository {
    fn save_entities(&self, _: &LocationMap) -> lutemon_runtime::repository::Result<()> {
        Err(RepositoryError::CorruptedData("read-only".into()))
    }

    fn load_entities(&self) -> lutemon_runtime::repository::Result<LocationMap> {
        Ok(LocationMap::new())
    }

    fn save_stats(&self, _: &GlobalStats) -> lutemon_runtime::repository::Result<()> {
        Err(RepositoryError::CorruptedData("read-only".into()))
    }

    fn load_stats(&self) -> lutemon_runtime::repository::Result<GlobalStats> {
        Ok(GlobalStats::new())
    }

    fn import_entities(&self) -> lutemon_runtime::repository::Result<LocationMap> {
        Err(RepositoryError::NothingToImport)
    }

    fn export_entities(&self, _: &LocationMap) -> lutemon_runtime::repository::Result<()> {
        Err(RepositoryError::CorruptedData("read-only".into()))
    }

    fn clear_all(&self) -> lutemon_runtime::repository::Result<()> {
        Ok(())
    }
}

#[test]
fn failed_saves_keep_memory_state() {
    let mut storage = Storage::load(Box::new(ReadOnlyRepository));
    let id = storage.create_entity("Stubborn", Color::Pink);

    assert!(!storage.persist_entities());
    assert!(!storage.persist_stats());

    storage.move_entity(id, Location::Training).unwrap();
    storage.train_entity(id).unwrap();
    assert_eq!(storage.entity_location(id), Some(Location::Training));
    assert_eq!(storage.entity(id).unwrap().experience(), 1);
    assert!(storage.export_entities().is_err());
}
