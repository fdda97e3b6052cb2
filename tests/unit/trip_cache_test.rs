//! Unit tests for the saved-trip cache.

#[path = "../common/mod.rs"]
mod common;

use std::cell::Cell;

use common::{at_millis, bare_plan, jaipur_plan};
use weekend_traveller::managers::trip_cache::{TripCache, TripCacheTrait, MAX_SAVED_TRIPS};
use weekend_traveller::storage::{LocalStorage, MemoryStorage, TRIPS_KEY};
use weekend_traveller::types::saved_trip::SavedTrip;

/// Cache whose clock advances one millisecond per save, starting at `start`.
fn ticking_cache(storage: &mut dyn LocalStorage, start: i64) -> TripCache<'_> {
    let tick = Cell::new(start);
    TripCache::with_clock(
        storage,
        Box::new(move || {
            let now = tick.get();
            tick.set(now + 1);
            at_millis(now)
        }),
    )
}

#[test]
fn test_save_list_remove_scenario() {
    let mut storage = MemoryStorage::new();
    let mut cache = TripCache::with_clock(&mut storage, Box::new(|| at_millis(1_700_000_000_000)));
    let plan = jaipur_plan();

    let saved = cache.save(plan.clone());
    assert_eq!(saved.id, "1700000000000");
    assert_eq!(saved.date, at_millis(1_700_000_000_000));

    let listed = cache.list();
    assert_eq!(listed, vec![SavedTrip { id: saved.id.clone(), plan, date: saved.date }]);

    cache.remove(&saved.id);
    assert!(cache.list().is_empty());
}

#[test]
fn test_stored_format_is_json_array_with_iso_dates() {
    let mut storage = MemoryStorage::new();
    TripCache::with_clock(&mut storage, Box::new(|| at_millis(1_700_000_000_000))).save(bare_plan("Goa"));

    let raw = storage.get_item(TRIPS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert_eq!(first["id"], "1700000000000");
    assert_eq!(first["date"], "2023-11-14T22:13:20.000Z");
    assert_eq!(first["plan"]["destination"], "Goa");
}

#[test]
fn test_list_is_newest_first() {
    let mut storage = MemoryStorage::new();
    let mut cache = ticking_cache(&mut storage, 1_000);
    for name in ["Goa", "Jaipur", "Ooty"] {
        cache.save(bare_plan(name));
    }

    let names: Vec<String> = cache.list().into_iter().map(|t| t.plan.destination).collect();
    assert_eq!(names, vec!["Ooty", "Jaipur", "Goa"]);
}

#[test]
fn test_list_sorts_out_of_order_storage() {
    let older = SavedTrip { id: "1".to_string(), plan: bare_plan("Old"), date: at_millis(1) };
    let newer = SavedTrip { id: "2".to_string(), plan: bare_plan("New"), date: at_millis(2) };
    let raw = serde_json::to_string(&vec![older, newer]).unwrap();
    let mut storage = MemoryStorage::new().with_item(TRIPS_KEY, &raw);

    let ids: Vec<String> = TripCache::new(&mut storage).list().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["2", "1"]);
}

#[test]
fn test_cap_evicts_oldest() {
    let mut storage = MemoryStorage::new();
    let mut cache = ticking_cache(&mut storage, 10_000);
    for i in 0..(MAX_SAVED_TRIPS + 5) {
        cache.save(bare_plan(&format!("Trip {}", i)));
    }

    let trips = cache.list();
    assert_eq!(trips.len(), MAX_SAVED_TRIPS);
    assert_eq!(trips[0].plan.destination, format!("Trip {}", MAX_SAVED_TRIPS + 4));
    assert_eq!(trips[MAX_SAVED_TRIPS - 1].plan.destination, "Trip 5");
}

#[test]
fn test_same_millisecond_ids_stay_unique() {
    let mut storage = MemoryStorage::new();
    let mut cache = TripCache::with_clock(&mut storage, Box::new(|| at_millis(5_000)));

    let a = cache.save(bare_plan("A"));
    let b = cache.save(bare_plan("B"));
    assert_eq!(a.id, "5000");
    assert_eq!(b.id, "5001");
    assert_eq!(cache.list().len(), 2);
}

#[test]
fn test_remove_unknown_id_leaves_storage_untouched() {
    let mut storage = MemoryStorage::new();
    TripCache::new(&mut storage).save(bare_plan("Goa"));
    let before = storage.get_item(TRIPS_KEY).unwrap();

    TripCache::new(&mut storage).remove("does-not-exist");
    assert_eq!(storage.get_item(TRIPS_KEY).unwrap(), before);
}

#[test]
fn test_get_finds_by_id() {
    let mut storage = MemoryStorage::new();
    let mut cache = ticking_cache(&mut storage, 42);
    let goa = cache.save(bare_plan("Goa"));
    cache.save(bare_plan("Ooty"));

    assert_eq!(cache.get(&goa.id).map(|t| t.plan.destination), Some("Goa".to_string()));
    assert!(cache.get("nope").is_none());
}

#[test]
fn test_corrupt_storage_reads_as_empty() {
    let mut storage = MemoryStorage::new().with_item(TRIPS_KEY, "{not json");
    let mut cache = TripCache::new(&mut storage);

    assert!(cache.list().is_empty());
    assert!(cache.get("1").is_none());

    // The next save starts a fresh collection
    cache.save(bare_plan("Goa"));
    assert_eq!(cache.list().len(), 1);
}

#[test]
fn test_unavailable_storage_still_returns_record() {
    let mut storage = MemoryStorage::unavailable();
    let mut cache = TripCache::with_clock(&mut storage, Box::new(|| at_millis(1_700_000_000_000)));

    let saved = cache.save(bare_plan("Goa"));
    assert_eq!(saved.id, "1700000000000");
    assert!(cache.list().is_empty());
    cache.remove(&saved.id);
    cache.clear();
}

#[test]
fn test_clear_drops_everything() {
    let mut storage = MemoryStorage::new();
    let mut cache = ticking_cache(&mut storage, 1);
    cache.save(bare_plan("Goa"));
    cache.save(bare_plan("Ooty"));

    cache.clear();
    assert!(cache.list().is_empty());
    drop(cache);
    assert_eq!(storage.get_item(TRIPS_KEY).unwrap(), None);
}

#[test]
fn test_eviction_follows_date_when_clock_goes_backwards() {
    let stored: Vec<SavedTrip> = (0..MAX_SAVED_TRIPS as i64)
        .map(|i| SavedTrip {
            id: (1_000 + i).to_string(),
            plan: bare_plan(&format!("Trip {}", i)),
            date: at_millis(1_000 + i),
        })
        .rev()
        .collect();
    let raw = serde_json::to_string(&stored).unwrap();
    let mut storage = MemoryStorage::new().with_item(TRIPS_KEY, &raw);
    let mut cache = TripCache::with_clock(&mut storage, Box::new(|| at_millis(1_020)));

    let saved = cache.save(bare_plan("Late arrival"));
    let trips = cache.list();

    assert_eq!(trips.len(), MAX_SAVED_TRIPS);
    assert!(trips.iter().any(|t| t.id == saved.id));
    // The oldest-dated trip goes, whatever the insertion order
    assert!(trips.iter().all(|t| t.id != "1000"));
    assert_eq!(trips.last().map(|t| t.date), Some(at_millis(1_001)));
}

#[test]
fn test_backwards_save_into_full_cache_of_newer_trips_is_evicted() {
    let stored: Vec<SavedTrip> = (0..MAX_SAVED_TRIPS as i64)
        .map(|i| SavedTrip {
            id: (1_000 + i).to_string(),
            plan: bare_plan("Newer"),
            date: at_millis(1_000 + i),
        })
        .rev()
        .collect();
    let raw = serde_json::to_string(&stored).unwrap();
    let mut storage = MemoryStorage::new().with_item(TRIPS_KEY, &raw);
    let mut cache = TripCache::with_clock(&mut storage, Box::new(|| at_millis(10)));

    let saved = cache.save(bare_plan("Stale clock"));
    assert_eq!(saved.id, "10");
    assert!(cache.get(&saved.id).is_none());
    assert_eq!(cache.list().len(), MAX_SAVED_TRIPS);
}
