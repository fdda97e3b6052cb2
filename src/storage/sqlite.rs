//! SQLite-backed local storage, persistent across runs.

use std::sync::Arc;

use log::trace;
use rusqlite::{params, OptionalExtension};

use super::LocalStorage;
use crate::database::connection::Database;
use crate::types::errors::StorageError;

/// Local storage persisted in the `local_storage` table.
pub struct SqliteStorage {
    db: Arc<Database>,
}

impl SqliteStorage {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Lists stored keys in lexical order.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let conn = self.db.connection();
        let mut stmt = conn.prepare("SELECT key FROM local_storage ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

impl LocalStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        trace!("local_storage get {}", key);
        let value = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        trace!("local_storage set {} ({} bytes)", key, value.len());
        let now = chrono::Utc::now().timestamp_millis();
        self.db.connection().execute(
            "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        trace!("local_storage remove {}", key);
        self.db
            .connection()
            .execute("DELETE FROM local_storage WHERE key = ?1", params![key])?;
        Ok(())
    }
}
