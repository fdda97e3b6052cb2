use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::trip::TripPlan;

/// A trip plan persisted in local storage.
///
/// Serialized as `{ "id", "plan", "date" }`, the layout the saved-trips page
/// reads back. `date` is an ISO-8601 UTC timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedTrip {
    pub id: String,
    pub plan: TripPlan,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
}

/// Writes timestamps the way `Date.prototype.toISOString` does
/// (`2023-11-14T22:13:20.000Z`) and accepts any RFC 3339 string on read.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|d| d.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
