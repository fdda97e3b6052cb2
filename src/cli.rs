//! CLI argument parsing for the `wt` binary

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::services::settings_engine::API_URL_ENV;
use crate::types::settings::ThemeMode;

#[derive(Parser, Debug)]
#[command(name = "wt")]
#[command(author, version, about = "Plan weekend trips from the terminal", long_about = None)]
pub struct Cli {
    /// Path to settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Itinerary backend base URL (e.g. http://localhost:8000/api)
    #[arg(long, global = true, env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// Path to the saved-trips database
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask for a trip plan
    Search {
        /// Free-text request, e.g. "Beach trip near Mumbai for 5k"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Save the resulting plan
        #[arg(short, long)]
        save: bool,
    },

    /// Resolve a launch URL (`?id=` or `?query=`)
    Open {
        #[arg(required = true)]
        url: String,
    },

    /// Manage saved trips
    Trips {
        #[command(subcommand)]
        command: TripsCommand,
    },

    /// Show landing destinations and the background video
    Explore {
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
    },

    /// Show or change the stored theme
    Theme {
        mode: Option<ThemeArg>,
    },

    /// Inspect or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective settings file
    Show,

    /// Print where settings are stored
    Path,

    /// Set one value by dotted key, e.g. `api.default_days 3`
    Set {
        #[arg(required = true)]
        key: String,

        /// JSON value; bare words are taken as strings
        #[arg(required = true, allow_hyphen_values = true)]
        value: String,
    },

    /// Restore every setting to its default
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum TripsCommand {
    /// List saved trips, newest first
    List,

    /// Print a saved trip
    Show {
        #[arg(required = true)]
        id: String,
    },

    /// Print share text for a saved trip
    Share {
        #[arg(required = true)]
        id: String,

        /// Site the share link points at
        #[arg(long, default_value = "http://localhost:3000/")]
        base: String,
    },

    /// Delete a saved trip
    Delete {
        #[arg(required = true)]
        id: String,
    },

    /// Delete every saved trip
    Clear,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::Light => ThemeMode::Light,
        }
    }
}
