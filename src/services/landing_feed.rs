//! Landing page feeds: destination cards and the background video.
//!
//! Both backend endpoints are optional. Any failure keeps the built-in
//! defaults so the landing page always has something to show.

use log::{debug, warn};
use rand::Rng;

use crate::services::search_client::LandingApi;
use crate::types::landing::{BackgroundVideo, DestinationCard, GeoLocation};

/// Image used for a recommendation that arrives without one.
pub const FALLBACK_CARD_IMAGE: &str = "https://images.pexels.com/photos/346885/pexels-photo-346885.jpeg";

const DEFAULT_DESTINATIONS: [(&str, &str, &str); 5] = [
    (
        "Paris",
        "https://images.pexels.com/photos/338515/pexels-photo-338515.jpeg?auto=compress&cs=tinysrgb&h=400",
        "City of Light",
    ),
    (
        "New York",
        "https://images.pexels.com/photos/2224861/pexels-photo-2224861.jpeg?auto=compress&cs=tinysrgb&h=400",
        "The Big Apple",
    ),
    (
        "Tokyo",
        "https://images.pexels.com/photos/3532553/pexels-photo-3532553.jpeg?auto=compress&cs=tinysrgb&h=400",
        "Neon & Tradition",
    ),
    (
        "Dubai",
        "https://images.pexels.com/photos/162031/dubai-tower-arab-khalifa-162031.jpeg?auto=compress&cs=tinysrgb&h=400",
        "Desert Luxury",
    ),
    (
        "London",
        "https://images.pexels.com/photos/460672/pexels-photo-460672.jpeg?auto=compress&cs=tinysrgb&h=400",
        "Historic Charm",
    ),
];

/// Built-in destination cards.
pub fn default_destinations() -> Vec<DestinationCard> {
    DEFAULT_DESTINATIONS
        .iter()
        .map(|(name, image, desc)| DestinationCard {
            name: name.to_string(),
            image: image.to_string(),
            desc: desc.to_string(),
        })
        .collect()
}

/// Clip played when the backend has none to offer.
pub fn default_video() -> BackgroundVideo {
    BackgroundVideo {
        url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4".to_string(),
        credit: "Google Sample".to_string(),
        source: "Google".to_string(),
    }
}

/// Destination cards near `location`, or the defaults.
pub async fn destinations<A>(api: &A, location: Option<GeoLocation>) -> Vec<DestinationCard>
where
    A: LandingApi + ?Sized,
{
    let Some(location) = location else {
        return default_destinations();
    };

    match api.recommendations(location.latitude, location.longitude).await {
        Ok(recs) if !recs.is_empty() => recs
            .into_iter()
            .map(|r| DestinationCard {
                name: r.name,
                image: r.image_url.unwrap_or_else(|| FALLBACK_CARD_IMAGE.to_string()),
                desc: r.description,
            })
            .collect(),
        Ok(_) => {
            debug!("no recommendations returned, keeping defaults");
            default_destinations()
        }
        Err(e) => {
            warn!("failed to fetch recommendations: {}", e);
            default_destinations()
        }
    }
}

/// A random clip from the backend, or the default clip.
pub async fn background_video<A>(api: &A) -> BackgroundVideo
where
    A: LandingApi + ?Sized,
{
    match api.background_videos().await {
        Ok(mut videos) if !videos.is_empty() => {
            let pick = rand::rng().random_range(0..videos.len());
            videos.swap_remove(pick)
        }
        Ok(_) => default_video(),
        Err(e) => {
            warn!("failed to fetch background videos: {}", e);
            default_video()
        }
    }
}
