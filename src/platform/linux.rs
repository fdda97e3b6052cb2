// Weekend Traveller platform paths for Linux
// Config: ~/.config/weekend-traveller
// Data:   ~/.local/share/weekend-traveller

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "weekend-traveller";

fn home() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// `$XDG_CONFIG_HOME/weekend-traveller`, else `~/.config/weekend-traveller`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR),
        _ => home().join(".config").join(APP_DIR),
    }
}

/// `$XDG_DATA_HOME/weekend-traveller`, else `~/.local/share/weekend-traveller`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR),
        _ => home().join(".local").join("share").join(APP_DIR),
    }
}
