use std::error::Error;

use weekend_traveller::types::errors::*;

// === StorageError Tests ===

#[test]
fn storage_error_unavailable_display() {
    let err = StorageError::Unavailable("storage is disabled".to_string());
    assert_eq!(err.to_string(), "Local storage unavailable: storage is disabled");
    assert!(err.source().is_none());
}

#[test]
fn storage_error_corrupt_keeps_json_source() {
    let source = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
    let err = StorageError::Corrupt {
        key: "weekend_trips_history".to_string(),
        source,
    };
    assert!(err
        .to_string()
        .starts_with("Corrupt local storage entry 'weekend_trips_history': "));
    assert!(err.source().is_some());
}

#[test]
fn storage_error_from_rusqlite() {
    let err: StorageError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, StorageError::Database(_)));
}

// === SearchError Tests ===

#[test]
fn search_error_status_display_and_code() {
    let err = SearchError::Status { status: 502 };
    assert_eq!(err.to_string(), "Search backend returned status 502");
    assert_eq!(err.status(), Some(502));
}

#[test]
fn search_error_without_status() {
    assert_eq!(SearchError::Decode("missing field".to_string()).status(), None);
    assert_eq!(
        SearchError::InvalidBaseUrl("nope".to_string()).to_string(),
        "Invalid API base URL: nope"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("api.nope".to_string()).to_string(),
        "Invalid settings key: api.nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("days".to_string()).to_string(),
        "Invalid settings value: days"
    );
}

// === AppError Tests ===

#[test]
fn app_error_is_transparent() {
    let err: AppError = SearchError::InvalidBaseUrl("x".to_string()).into();
    assert_eq!(err.to_string(), "Invalid API base URL: x");

    let err: AppError = SettingsError::IoError("denied".to_string()).into();
    assert_eq!(err.to_string(), "Settings I/O error: denied");
}
