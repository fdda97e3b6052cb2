// Weekend Traveller shared type definitions
// Each submodule defines types used across the client.

pub mod errors;
pub mod landing;
pub mod map;
pub mod message;
pub mod saved_trip;
pub mod settings;
pub mod trip;
