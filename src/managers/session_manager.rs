//! Session Manager for Weekend Traveller.
//!
//! Holds one tab's chat session: the landing→chat transition, the message
//! log, the loading flag and the plan currently driving the map.
//!
//! ```text
//! Landing ──search──▶ Loading ──ok──▶ Viewing ──search──▶ Loading ...
//!    │                   └──err──▶ Error ────search──▶ Loading ...
//!    └──restore(found)──▶ Viewing
//! ```
//!
//! Searches are split into [`Session::begin_search`] and
//! [`Session::complete_search`] so overlapping requests can be tracked by
//! ticket; [`Session::search`] runs both around a [`TripSearch`] call.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::managers::trip_cache::TripCacheTrait;
use crate::services::search_client::TripSearch;
use crate::types::errors::SearchError;
use crate::types::message::Message;
use crate::types::settings::{StalePolicy, DEFAULT_DAYS, DEFAULT_ORIGIN};
use crate::types::trip::TripPlan;

pub const GREETING: &str = "Hi! I'm your Weekend Travel Assistant. Tell me where you want to go, or ask for suggestions like 'Beach trip near Mumbai for 5k'.";
pub const SEARCH_FAILED: &str =
    "Sorry, I couldn't find a plan for that. Please try specifying a city like 'Jaipur' or 'Goa'.";
pub const WELCOME_BACK: &str = "Welcome back! Here is the trip you saved.";

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Greeting only, nothing searched yet.
    Landing,
    /// Waiting on the backend.
    Loading,
    /// Chat populated with at least one AI reply.
    Viewing,
    /// The last search failed; still in chat view.
    Error,
}

/// Handle for one in-flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

/// What happened to a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A plan arrived and became the current plan.
    Planned,
    /// The search failed; the fallback message was posted.
    Failed,
    /// A newer search superseded this one and the response was dropped.
    Discarded,
}

/// Per-search parameters that are not the user's query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDefaults {
    pub origin: String,
    pub days: u32,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            days: DEFAULT_DAYS,
        }
    }
}

/// In-memory chat session for one tab. Never persisted.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    messages: Vec<Message>,
    current_plan: Option<Arc<TripPlan>>,
    last_error: Option<String>,
    stale_policy: StalePolicy,
    defaults: SearchDefaults,
    last_issued: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::with_policy(StalePolicy::default(), SearchDefaults::default())
    }

    pub fn with_policy(stale_policy: StalePolicy, defaults: SearchDefaults) -> Self {
        Self {
            state: SessionState::Landing,
            messages: vec![Message::ai(GREETING)],
            current_plan: None,
            last_error: None,
            stale_policy,
            defaults,
            last_issued: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn current_plan(&self) -> Option<&Arc<TripPlan>> {
        self.current_plan.as_ref()
    }

    /// Detail of the last failed search, for logs only.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }

    pub fn defaults(&self) -> &SearchDefaults {
        &self.defaults
    }

    /// Returns to the landing greeting, forgetting the chat and current plan.
    pub fn reset(&mut self) {
        *self = Self::with_policy(self.stale_policy, self.defaults.clone());
    }

    /// Starts a search for `query`.
    ///
    /// Returns `None` without touching state when the query is blank.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchTicket> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.last_issued += 1;
        self.messages.push(Message::user(query));
        self.last_error = None;
        self.state = SessionState::Loading;
        debug!("search #{} started: {:?}", self.last_issued, query);

        Some(SearchTicket {
            seq: self.last_issued,
            query: query.to_string(),
        })
    }

    /// Applies the backend result for `ticket`.
    ///
    /// Only the latest ticket moves the state. Under [`StalePolicy::Apply`] a
    /// stale success that lands after the latest search failed still appends
    /// its plan and becomes the current plan, while the state stays `Error`.
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        result: Result<TripPlan, SearchError>,
    ) -> SearchOutcome {
        let is_latest = ticket.seq == self.last_issued;
        if !is_latest && self.stale_policy == StalePolicy::Discard {
            debug!(
                "discarding response for search #{} (latest is #{})",
                ticket.seq, self.last_issued
            );
            return SearchOutcome::Discarded;
        }

        let outcome = match result {
            Ok(plan) => {
                let plan = Arc::new(plan);
                info!("search #{} planned {}", ticket.seq, plan.destination);
                self.messages.push(Message::ai_with_plan(
                    format!("Here is a plan for {}!", plan.destination),
                    plan.clone(),
                ));
                self.current_plan = Some(plan);
                SearchOutcome::Planned
            }
            Err(e) => {
                warn!("search #{} for {:?} failed: {}", ticket.seq, ticket.query, e);
                self.messages.push(Message::ai(SEARCH_FAILED));
                self.last_error = Some(e.to_string());
                SearchOutcome::Failed
            }
        };

        if is_latest {
            self.state = match outcome {
                SearchOutcome::Planned => SessionState::Viewing,
                _ => SessionState::Error,
            };
        }
        outcome
    }

    /// Runs a full search against `client` using the session defaults.
    pub async fn search<C>(&mut self, client: &C, query: &str) -> Option<SearchOutcome>
    where
        C: TripSearch + ?Sized,
    {
        let ticket = self.begin_search(query)?;
        let result = client
            .search(&ticket.query, &self.defaults.origin, self.defaults.days)
            .await;
        Some(self.complete_search(&ticket, result))
    }

    /// Reopens a saved trip without calling the backend.
    ///
    /// Only applies to a fresh session. Returns `false`, leaving the
    /// greeting in place, when the id is unknown.
    pub fn restore<T>(&mut self, trip_id: &str, cache: &T) -> bool
    where
        T: TripCacheTrait + ?Sized,
    {
        if self.state != SessionState::Landing {
            debug!("restore ignored outside landing state");
            return false;
        }

        let Some(saved) = cache.get(trip_id) else {
            info!("saved trip {} not found, staying on landing", trip_id);
            return false;
        };

        let plan = Arc::new(saved.plan);
        self.messages = vec![
            Message::ai(WELCOME_BACK),
            Message::ai_with_plan(
                format!("Here is your saved plan for {}!", plan.destination),
                plan.clone(),
            ),
        ];
        self.current_plan = Some(plan);
        self.last_error = None;
        self.state = SessionState::Viewing;
        info!("restored saved trip {}", trip_id);
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
