//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence, overrides and reset behavior.

use serde_json::json;
use tempfile::TempDir;
use weekend_traveller::services::settings_engine::{parse_value, SettingsEngine, SettingsEngineTrait};
use weekend_traveller::types::errors::SettingsError;
use weekend_traveller::types::settings::{AppSettings, StalePolicy, DEFAULT_API_BASE};

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();
    assert_eq!(settings, AppSettings::default());
    assert_eq!(settings.api.base_url, DEFAULT_API_BASE);
    assert_eq!(settings.api.default_origin, "Delhi");
    assert_eq!(settings.api.default_days, 2);
    assert_eq!(settings.session.stale_policy, StalePolicy::Apply);
}

/// A change made through `set_value` must be visible to a fresh engine.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_value("api.default_origin", json!("Mumbai")).unwrap();
        engine.set_value("session.stale_policy", json!("Discard")).unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.api.default_origin, "Mumbai");
    assert_eq!(settings.session.stale_policy, StalePolicy::Discard);
}

#[test]
fn test_set_value_rejects_unknown_key_and_bad_type() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    assert!(matches!(
        engine.set_value("api.nope", json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("", json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("api.default_days", json!("two")),
        Err(SettingsError::InvalidValue(_))
    ));
    assert_eq!(engine.get_settings().api.default_days, 2);
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in_temp(&dir);
    std::fs::write(engine.get_config_path(), r#"{"api": {"base_url": "https://trips.example/api"}}"#)
        .unwrap();

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.api.base_url, "https://trips.example/api");
    assert_eq!(settings.api.default_days, 2);
    assert!(settings.storage.database_path.is_none());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    std::fs::write(engine.get_config_path(), "{ nope").unwrap();

    assert!(matches!(engine.load(), Err(SettingsError::SerializationError(_))));
}

#[test]
fn test_override_is_not_persisted() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine.override_api_base(Some("https://staging.example/api"));
    assert_eq!(engine.get_settings().api.base_url, "https://staging.example/api");
    assert!(!std::path::Path::new(engine.get_config_path()).exists());
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine.set_value("api.default_days", json!(4)).unwrap();

    engine.reset().unwrap();
    assert_eq!(engine.get_settings(), &AppSettings::default());

    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), AppSettings::default());
}

/// Raw command-line values go through `parse_value` before `set_value`.
#[test]
fn test_command_line_values_set_typed_settings() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine.set_value("api.default_days", parse_value("3")).unwrap();
    engine.set_value("api.default_origin", parse_value("Mumbai")).unwrap();
    assert!(matches!(
        engine.set_value("api.default_days", parse_value("three")),
        Err(SettingsError::InvalidValue(_))
    ));

    let mut reloaded = engine_in_temp(&dir);
    let settings = reloaded.load().unwrap();
    assert_eq!(settings.api.default_days, 3);
    assert_eq!(settings.api.default_origin, "Mumbai");
}

#[test]
fn test_reset_recovers_from_malformed_file() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    std::fs::write(engine.get_config_path(), "{ not json").unwrap();

    engine.reset().unwrap();

    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), AppSettings::default());
}
