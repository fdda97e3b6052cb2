//! URL entry points: `?id=` reopens a saved trip, `?query=` auto-runs a search.

use log::debug;
use reqwest::Url;

/// What the client should do right after launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchIntent {
    /// Saved trip to restore.
    pub trip_id: Option<String>,
    /// Free-text search to run on load.
    pub initial_query: Option<String>,
}

impl LaunchIntent {
    /// Reads the intent from an absolute or path-relative URL
    /// (`/trip?id=1700000000000`). Unparseable input yields an empty intent.
    pub fn from_url(raw: &str) -> Self {
        let parsed = Url::parse(raw).or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(raw)));
        let Ok(url) = parsed else {
            debug!("launch url {:?} not parseable, ignoring", raw);
            return Self::default();
        };

        let mut intent = Self::default();
        for (key, value) in url.query_pairs() {
            let value = value.trim();
            match key.as_ref() {
                // "new" is the explicit "start a fresh chat" id
                "id" if !value.is_empty() && value != "new" => intent.trip_id = Some(value.to_string()),
                "query" if !value.is_empty() => intent.initial_query = Some(value.to_string()),
                _ => {}
            }
        }
        intent
    }

    pub fn is_empty(&self) -> bool {
        self.trip_id.is_none() && self.initial_query.is_none()
    }
}

/// Link that reopens saved trip `id` under `base`.
pub fn trip_url(base: &str, id: &str) -> String {
    match Url::parse(base).and_then(|b| b.join("trip")) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("id", id);
            url.to_string()
        }
        Err(_) => format!("{}/trip?id={}", base.trim_end_matches('/'), id),
    }
}
