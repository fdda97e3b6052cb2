//! App Core for Weekend Traveller.
//!
//! Central struct holding settings, the session context, the search client,
//! the chat session and the map, and driving the launch sequence.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};

use crate::database::connection::Database;
use crate::managers::session_context::SessionContext;
use crate::managers::session_manager::{SearchDefaults, SearchOutcome, Session};
use crate::managers::trip_cache::TripCacheTrait;
use crate::platform;
use crate::services::entry_point::LaunchIntent;
use crate::services::landing_feed;
use crate::services::map_synchronizer::{MapSynchronizer, MapSynchronizerTrait};
use crate::services::search_client::{LandingApi, SearchClient, TripSearch};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::{LocalStorage, MemoryStorage, SqliteStorage};
use crate::types::errors::AppError;
use crate::types::landing::{BackgroundVideo, DestinationCard, GeoLocation};
use crate::types::map::MapUpdate;
use crate::types::saved_trip::SavedTrip;
use crate::types::settings::AppSettings;

/// Startup overrides, typically from the command line.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub config_path: Option<String>,
    pub api_url: Option<String>,
    pub database_path: Option<PathBuf>,
}

/// How the launch intent was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Nothing to do; the landing greeting is shown.
    Landing,
    /// A saved trip was reopened.
    Restored,
    /// The initial query was searched.
    Searched(SearchOutcome),
}

/// Opens the SQLite-backed store, falling back to memory when the database
/// cannot be opened.
pub fn open_storage(path: &Path) -> Box<dyn LocalStorage> {
    match Database::open(path) {
        Ok(db) => Box::new(SqliteStorage::new(Arc::new(db))),
        Err(e) => {
            warn!(
                "trip database at {} unavailable ({}), saved trips will not persist",
                path.display(),
                e
            );
            Box::new(MemoryStorage::new())
        }
    }
}

/// The client core: one tab's worth of state.
pub struct App<C = SearchClient> {
    pub settings: AppSettings,
    pub context: SessionContext,
    pub client: C,
    pub session: Session,
    pub map: MapSynchronizer,
}

impl App<SearchClient> {
    /// Loads settings, opens local storage and builds the HTTP client.
    pub fn new(options: AppOptions) -> Result<Self, AppError> {
        let mut engine = SettingsEngine::new(options.config_path.clone());
        engine.load()?;
        engine.apply_env_overrides();
        engine.override_api_base(options.api_url.as_deref());
        let settings = engine.get_settings().clone();

        let database_path = options
            .database_path
            .or_else(|| settings.storage.database_path.as_ref().map(PathBuf::from))
            .unwrap_or_else(platform::default_database_path);
        let storage = open_storage(&database_path);

        let client = SearchClient::new(&settings.api.base_url)?;
        info!("using backend {}", client.base_url());

        Ok(Self::with_parts(settings, SessionContext::new(storage), client))
    }
}

impl<C> App<C>
where
    C: TripSearch + LandingApi,
{
    /// Assembles an app from already-built parts.
    pub fn with_parts(settings: AppSettings, context: SessionContext, client: C) -> Self {
        let defaults = SearchDefaults {
            origin: settings.api.default_origin.clone(),
            days: settings.api.default_days,
        };
        let session = Session::with_policy(settings.session.stale_policy, defaults);
        Self {
            settings,
            context,
            client,
            session,
            map: MapSynchronizer::new(),
        }
    }

    /// Resolves a launch intent: restore first, then the initial query.
    pub async fn launch(&mut self, intent: &LaunchIntent) -> LaunchOutcome {
        if let Some(id) = &intent.trip_id {
            let restored = {
                let cache = self.context.trips();
                self.session.restore(id, &cache)
            };
            if restored {
                self.sync_map();
                return LaunchOutcome::Restored;
            }
        }

        if let Some(query) = &intent.initial_query {
            if let Some(outcome) = self.submit(query).await {
                return LaunchOutcome::Searched(outcome);
            }
        }

        LaunchOutcome::Landing
    }

    /// Sends a chat query and refreshes the map.
    pub async fn submit(&mut self, query: &str) -> Option<SearchOutcome> {
        let outcome = self.session.search(&self.client, query).await;
        self.sync_map();
        outcome
    }

    pub fn sync_map(&mut self) -> MapUpdate {
        self.map.sync(self.session.current_plan())
    }

    /// Saves the plan currently on screen.
    pub fn save_current_plan(&mut self) -> Option<SavedTrip> {
        let plan = self.session.current_plan()?.as_ref().clone();
        Some(self.context.trips().save(plan))
    }

    pub fn saved_trips(&mut self) -> Vec<SavedTrip> {
        self.context.trips().list()
    }

    pub fn delete_trip(&mut self, id: &str) {
        self.context.trips().remove(id)
    }

    pub async fn landing_destinations(&self, location: Option<GeoLocation>) -> Vec<DestinationCard> {
        landing_feed::destinations(&self.client, location).await
    }

    pub async fn landing_video(&self) -> BackgroundVideo {
        landing_feed::background_video(&self.client).await
    }
}
