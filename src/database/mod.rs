//! Weekend Traveller database layer.
//!
//! Provides the SQLite connection that backs persistent local storage.
//!
//! # Usage
//!
//! ```no_run
//! use weekend_traveller::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("trips.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
