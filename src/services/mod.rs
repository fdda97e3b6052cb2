pub mod entry_point;
pub mod landing_feed;
pub mod map_synchronizer;
pub mod search_client;
pub mod settings_engine;
pub mod share;
