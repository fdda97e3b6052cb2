//! Weekend Traveller: client core for an AI weekend trip planner.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod cli;
pub mod database;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
