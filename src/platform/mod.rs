// Weekend Traveller platform abstraction
// Platform-specific locations for the settings file and the trip database.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Database file name inside the data directory.
pub const DATABASE_FILE: &str = "trips.db";

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/weekend-traveller` (or `$XDG_CONFIG_HOME/weekend-traveller`)
/// - **macOS**: `~/Library/Application Support/WeekendTraveller`
/// - **Windows**: `%APPDATA%/WeekendTraveller`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory.
///
/// - **Linux**: `~/.local/share/weekend-traveller` (or `$XDG_DATA_HOME/weekend-traveller`)
/// - **macOS**: `~/Library/Application Support/WeekendTraveller`
/// - **Windows**: `%APPDATA%/WeekendTraveller`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Default location of the local storage database.
pub fn default_database_path() -> PathBuf {
    get_data_dir().join(DATABASE_FILE)
}
