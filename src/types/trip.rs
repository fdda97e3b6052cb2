use serde::{Deserialize, Serialize};

/// Currency symbol shown next to the budget when the backend omits one.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The full AI-generated itinerary for one destination.
///
/// Plans are immutable once received from the backend and are shared as
/// `Arc<TripPlan>` between the chat log, the session and the map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripPlan {
    pub destination: String,
    pub best_time_to_visit: String,
    pub estimated_budget: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    pub route_info: RouteInfo,
    pub itinerary: Vec<DayPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotels: Option<Vec<Hotel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_info: Option<PlaceInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_info: Option<PlaceInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_credit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_coordinates: Option<Coordinates>,
}

impl TripPlan {
    /// Budget as displayed in the chat card, e.g. `₹ 12,000`.
    pub fn budget_label(&self) -> String {
        format!("{} {}", self.currency_symbol, self.estimated_budget)
    }

    /// Number of days in the itinerary.
    pub fn day_count(&self) -> usize {
        self.itinerary.len()
    }

    /// All activities in itinerary order, paired with their day number.
    pub fn activities(&self) -> impl Iterator<Item = (u32, &Sightseeing)> {
        self.itinerary
            .iter()
            .flat_map(|day| day.activities.iter().map(move |a| (day.day, a)))
    }
}

/// Distance and travel time between origin and destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteInfo {
    pub distance: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

/// One day of the itinerary. `day` is 1-based.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub activities: Vec<Sightseeing>,
}

/// A single itinerary activity. `time` is a free-text label ("Morning", "10:00 AM").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sightseeing {
    pub time: String,
    pub activity: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_credit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearby_attractions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    pub name: String,
    pub description: String,
    pub price_range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attraction {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_credit: Option<String>,
}

/// Descriptive info about the origin or destination city.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaceInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_attractions: Option<Vec<Attraction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotels: Option<Vec<Hotel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_credit: Option<String>,
}

/// Body of `POST /search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub origin: String,
    pub days: u32,
}
