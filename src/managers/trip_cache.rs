//! Trip Cache for Weekend Traveller.
//!
//! Keeps the user's saved trips as one JSON array under a single local
//! storage key, newest first, capped at [`MAX_SAVED_TRIPS`]. Every operation
//! fails soft: storage or decoding problems are logged and the cache behaves
//! as if empty (reads) or does nothing (writes).

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::storage::{LocalStorage, TRIPS_KEY};
use crate::types::errors::StorageError;
use crate::types::saved_trip::SavedTrip;
use crate::types::trip::TripPlan;

/// Oldest trips beyond this count are evicted on save.
pub const MAX_SAVED_TRIPS: usize = 50;

/// Source of "now" for ids and timestamps.
pub type Clock<'a> = Box<dyn Fn() -> DateTime<Utc> + 'a>;

/// Trait defining saved-trip operations.
pub trait TripCacheTrait {
    fn list(&self) -> Vec<SavedTrip>;
    fn save(&mut self, plan: TripPlan) -> SavedTrip;
    fn remove(&mut self, id: &str);
    fn get(&self, id: &str) -> Option<SavedTrip>;
    fn clear(&mut self);
}

/// Trip cache over a borrowed local storage.
pub struct TripCache<'a> {
    storage: &'a mut dyn LocalStorage,
    clock: Clock<'a>,
}

impl<'a> TripCache<'a> {
    /// Creates a cache using the system clock.
    pub fn new(storage: &'a mut dyn LocalStorage) -> Self {
        Self::with_clock(storage, Box::new(Utc::now))
    }

    /// Creates a cache with an injected clock.
    pub fn with_clock(storage: &'a mut dyn LocalStorage, clock: Clock<'a>) -> Self {
        Self { storage, clock }
    }

    /// Reads the stored collection as-is.
    fn load(&self) -> Result<Vec<SavedTrip>, StorageError> {
        let Some(raw) = self.storage.get_item(TRIPS_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: TRIPS_KEY.to_string(),
            source,
        })
    }

    /// Like `load`, but logs and returns empty on failure.
    fn load_or_empty(&self) -> Vec<SavedTrip> {
        match self.load() {
            Ok(trips) => trips,
            Err(e) => {
                warn!("failed to load saved trips, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn persist(&mut self, trips: &[SavedTrip]) -> Result<(), StorageError> {
        let json = serde_json::to_string(trips).map_err(|source| StorageError::Corrupt {
            key: TRIPS_KEY.to_string(),
            source,
        })?;
        self.storage.set_item(TRIPS_KEY, &json)
    }

    /// Millisecond timestamp id, bumped until it collides with nothing stored.
    fn next_id(now: DateTime<Utc>, existing: &[SavedTrip]) -> String {
        let mut candidate = now.timestamp_millis();
        while existing.iter().any(|t| t.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}

impl<'a> TripCacheTrait for TripCache<'a> {
    /// Returns saved trips, newest first.
    ///
    /// Sorting is stable, so trips saved within the same millisecond keep
    /// their stored order.
    fn list(&self) -> Vec<SavedTrip> {
        let mut trips = self.load_or_empty();
        trips.sort_by(|a, b| b.date.cmp(&a.date));
        trips
    }

    /// Saves a plan and returns the new record.
    ///
    /// Recency is the trip `date`, as in `list`: the collection is stored
    /// newest first and eviction drops the oldest-dated trips, not the
    /// earliest inserted. If the clock went backwards the new record can
    /// itself be evicted. The record is returned even when it could not be
    /// persisted.
    fn save(&mut self, plan: TripPlan) -> SavedTrip {
        let mut trips = self.load_or_empty();
        let now = (self.clock)();
        let trip = SavedTrip {
            id: Self::next_id(now, &trips),
            plan,
            date: now,
        };

        // Ties keep the new trip in front
        trips.insert(0, trip.clone());
        trips.sort_by(|a, b| b.date.cmp(&a.date));
        if trips.len() > MAX_SAVED_TRIPS {
            let evicted = trips.len() - MAX_SAVED_TRIPS;
            trips.truncate(MAX_SAVED_TRIPS);
            debug!("evicted {} oldest saved trip(s)", evicted);
        }

        match self.persist(&trips) {
            Ok(()) => debug!("saved trip {} ({})", trip.id, trip.plan.destination),
            Err(e) => warn!("failed to persist saved trip {}: {}", trip.id, e),
        }
        trip
    }

    /// Removes the trip with `id`. Unknown ids leave storage untouched.
    fn remove(&mut self, id: &str) {
        let mut trips = self.load_or_empty();
        let before = trips.len();
        trips.retain(|t| t.id != id);
        if trips.len() == before {
            debug!("remove: no saved trip with id {}", id);
            return;
        }

        if let Err(e) = self.persist(&trips) {
            warn!("failed to persist removal of trip {}: {}", id, e);
        }
    }

    fn get(&self, id: &str) -> Option<SavedTrip> {
        self.load_or_empty().into_iter().find(|t| t.id == id)
    }

    /// Drops every saved trip.
    fn clear(&mut self) {
        if let Err(e) = self.storage.remove_item(TRIPS_KEY) {
            warn!("failed to clear saved trips: {}", e);
        }
    }
}
