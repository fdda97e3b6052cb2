use serde::{Deserialize, Serialize};

/// A destination suggestion from `GET /recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub media_credit: Option<String>,
}

/// Response body of `GET /recommendations`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub destinations: Vec<Recommendation>,
}

/// A destination card on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DestinationCard {
    pub name: String,
    pub image: String,
    pub desc: String,
}

/// Landing page background clip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackgroundVideo {
    pub url: String,
    #[serde(default)]
    pub credit: String,
    #[serde(default)]
    pub source: String,
}

/// `GET /background-videos` may list bare URLs or full objects.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum VideoEntry {
    Url(String),
    Full(BackgroundVideo),
}

impl From<VideoEntry> for BackgroundVideo {
    fn from(entry: VideoEntry) -> Self {
        match entry {
            VideoEntry::Url(url) => BackgroundVideo {
                url,
                credit: String::new(),
                source: String::new(),
            },
            VideoEntry::Full(video) => video,
        }
    }
}

/// User position used to ask for nearby recommendations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}
