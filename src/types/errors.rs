use thiserror::Error;

// === StorageError ===

/// Errors raised by a local storage backend.
///
/// The trip cache and session context never surface these to the user; they
/// are logged and the operation degrades to empty or no-op.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is disabled or cannot be reached.
    #[error("Local storage unavailable: {0}")]
    Unavailable(String),
    /// The SQLite backing store failed.
    #[error("Local storage database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// A stored value could not be (de)serialized.
    #[error("Corrupt local storage entry '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

// === SearchError ===

/// Errors from the itinerary backend.
///
/// The session collapses every variant into one fallback chat message; the
/// variants exist for logging.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request never produced a response.
    #[error("Search network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status.
    #[error("Search backend returned status {status}")]
    Status { status: u16 },
    /// The response body was not a valid trip plan.
    #[error("Search response could not be decoded: {0}")]
    Decode(String),
    /// The configured base URL is not a valid URL.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl SearchError {
    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::Status { status } => Some(*status),
            SearchError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === AppError ===

/// Startup failures of the client core.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Search(#[from] SearchError),
}
