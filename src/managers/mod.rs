pub mod session_context;
pub mod session_manager;
pub mod trip_cache;
