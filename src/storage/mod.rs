//! Local storage: the synchronous string key/value store the client persists into.
//!
//! Mirrors browser `localStorage` semantics. Callers own error handling; the
//! trip cache and session context treat every [`StorageError`] as soft.

use std::collections::HashMap;

use crate::types::errors::StorageError;

pub mod sqlite;

pub use sqlite::SqliteStorage;

/// Key holding the JSON array of saved trips.
pub const TRIPS_KEY: &str = "weekend_trips_history";
/// Key holding the theme preference.
pub const THEME_KEY: &str = "vite-ui-theme";

/// Trait defining local storage operations.
pub trait LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and throwaway sessions.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    available: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            available: true,
        }
    }

    /// Storage that rejects every call, like a browser with storage disabled.
    pub fn unavailable() -> Self {
        Self {
            items: HashMap::new(),
            available: false,
        }
    }

    /// Pre-populates a key, bypassing availability.
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.available {
            Ok(())
        } else {
            Err(StorageError::Unavailable("storage is disabled".to_string()))
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.items.remove(key);
        Ok(())
    }
}

impl<S: LocalStorage + ?Sized> LocalStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
