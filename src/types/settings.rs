use serde::{Deserialize, Serialize};

/// Backend used when neither the config file nor the environment names one.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
pub const DEFAULT_ORIGIN: &str = "Delhi";
pub const DEFAULT_DAYS: u32 = 2;

/// Top-level client settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Where and how itinerary searches are sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub default_origin: String,
    pub default_days: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            default_origin: DEFAULT_ORIGIN.to_string(),
            default_days: DEFAULT_DAYS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionSettings {
    pub stale_policy: StalePolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Overrides the platform data dir database location.
    pub database_path: Option<String>,
}

/// What to do with a search response that is not the latest one issued.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum StalePolicy {
    /// Apply every response in arrival order; the last one to land wins.
    #[default]
    Apply,
    /// Drop responses superseded by a newer search.
    Discard,
}

/// Colour scheme preference, persisted in local storage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }
}
