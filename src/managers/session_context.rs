//! Session context: the injected home of everything a session would
//! otherwise reach for globally (persistent storage, theme preference).

use log::warn;

use crate::managers::trip_cache::{Clock, TripCache};
use crate::storage::{LocalStorage, MemoryStorage, THEME_KEY};
use crate::types::settings::ThemeMode;

pub struct SessionContext {
    storage: Box<dyn LocalStorage>,
}

impl SessionContext {
    pub fn new(storage: Box<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    /// Context over fresh in-memory storage.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }

    pub fn storage(&self) -> &dyn LocalStorage {
        self.storage.as_ref()
    }

    pub fn storage_mut(&mut self) -> &mut dyn LocalStorage {
        self.storage.as_mut()
    }

    /// Trip cache over this context's storage.
    pub fn trips(&mut self) -> TripCache<'_> {
        TripCache::new(self.storage.as_mut())
    }

    /// Trip cache with a fixed clock, for reproducible ids.
    pub fn trips_with_clock<'a>(&'a mut self, clock: Clock<'a>) -> TripCache<'a> {
        TripCache::with_clock(self.storage.as_mut(), clock)
    }

    /// Stored theme, dark when unset, unreadable or unrecognised.
    pub fn theme(&self) -> ThemeMode {
        match self.storage.get_item(THEME_KEY) {
            Ok(Some(raw)) => ThemeMode::parse(&raw).unwrap_or_default(),
            Ok(None) => ThemeMode::default(),
            Err(e) => {
                warn!("failed to read theme preference: {}", e);
                ThemeMode::default()
            }
        }
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        if let Err(e) = self.storage.set_item(THEME_KEY, mode.as_str()) {
            warn!("failed to store theme preference: {}", e);
        }
    }
}
