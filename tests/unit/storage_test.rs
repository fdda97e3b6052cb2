//! Unit tests for local storage backends and the database layer beneath them.

use std::sync::Arc;

use rstest::rstest;
use tempfile::TempDir;
use weekend_traveller::database::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
use weekend_traveller::database::Database;
use weekend_traveller::storage::{LocalStorage, MemoryStorage, SqliteStorage, THEME_KEY, TRIPS_KEY};

fn sqlite_in_memory() -> SqliteStorage {
    SqliteStorage::new(Arc::new(Database::open_in_memory().expect("open_in_memory failed")))
}

#[test]
fn test_migrations_create_local_storage_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    let exists: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='local_storage'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(exists, "local_storage table should exist after migrations");
    assert_eq!(get_schema_version(conn), CURRENT_SCHEMA_VERSION);
}

#[rstest]
#[case::memory(Box::new(MemoryStorage::new()) as Box<dyn LocalStorage>)]
#[case::sqlite(Box::new(sqlite_in_memory()) as Box<dyn LocalStorage>)]
fn test_backends_share_local_storage_semantics(#[case] mut storage: Box<dyn LocalStorage>) {
    assert_eq!(storage.get_item(TRIPS_KEY).unwrap(), None);

    storage.set_item(TRIPS_KEY, "[]").unwrap();
    storage.set_item(TRIPS_KEY, "[1]").unwrap();
    storage.set_item(THEME_KEY, "light").unwrap();
    assert_eq!(storage.get_item(TRIPS_KEY).unwrap().as_deref(), Some("[1]"));

    storage.remove_item(TRIPS_KEY).unwrap();
    assert_eq!(storage.get_item(TRIPS_KEY).unwrap(), None);
    assert_eq!(storage.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));

    // Removing a missing key is not an error
    storage.remove_item(TRIPS_KEY).unwrap();
}

#[test]
fn test_sqlite_storage_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("trips.db");

    {
        let db = Database::open(&path).expect("open should create parent dirs");
        let mut storage = SqliteStorage::new(Arc::new(db));
        storage.set_item(THEME_KEY, "light").unwrap();
        storage.set_item(TRIPS_KEY, "[]").unwrap();
    }

    let storage = SqliteStorage::new(Arc::new(Database::open(&path).unwrap()));
    assert_eq!(storage.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(storage.keys().unwrap(), vec![THEME_KEY.to_string(), TRIPS_KEY.to_string()]);
}

#[test]
fn test_open_under_a_file_fails_instead_of_panicking() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").unwrap();

    assert!(Database::open(blocker.join("trips.db")).is_err());
}

#[test]
fn test_reopen_does_not_rerun_migrations() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trips.db");

    Database::open(&path).unwrap();
    let db = Database::open(&path).unwrap();
    let versions: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(versions, 1);
}

#[test]
fn test_unavailable_memory_storage_errors() {
    let mut storage = MemoryStorage::unavailable();
    assert!(storage.set_item(TRIPS_KEY, "[]").is_err());
    assert!(storage.get_item(TRIPS_KEY).is_err());
}
