use serde::{Deserialize, Serialize};

use super::trip::Coordinates;

/// Center of India; the map's resting view before any plan is shown.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 20.5937,
    lng: 78.9629,
};
pub const DEFAULT_ZOOM: u8 = 5;
/// Zoom used when only the destination is known.
pub const DESTINATION_ZOOM: u8 = 13;
/// Symmetric padding, in pixels, applied when fitting origin and destination.
pub const FIT_PADDING_PX: u32 = 50;

/// What the map is asked to show.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum Viewport {
    /// Centered view at a fixed zoom level.
    Center { center: Coordinates, zoom: u8 },
    /// Fit a bounding box; the renderer picks the zoom.
    Bounds {
        south_west: Coordinates,
        north_east: Coordinates,
        padding_px: u32,
    },
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::Center {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    /// Smallest box covering both points, padded by `FIT_PADDING_PX`.
    pub fn covering(a: Coordinates, b: Coordinates) -> Self {
        Viewport::Bounds {
            south_west: Coordinates::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: Coordinates::new(a.lat.max(b.lat), a.lng.max(b.lng)),
            padding_px: FIT_PADDING_PX,
        }
    }

    /// Whether `point` lies inside the visible area. `Center` views only
    /// report their exact center.
    pub fn contains(&self, point: Coordinates) -> bool {
        match self {
            Viewport::Center { center, .. } => *center == point,
            Viewport::Bounds {
                south_west,
                north_east,
                ..
            } => {
                point.lat >= south_west.lat
                    && point.lat <= north_east.lat
                    && point.lng >= south_west.lng
                    && point.lng <= north_east.lng
            }
        }
    }
}

/// Identifies a marker across plan changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MarkerKey {
    Destination,
    Origin,
    /// Activity marker, keyed by the day's position in the itinerary and the
    /// activity's position within that day. Backend day numbers may repeat.
    Activity { day: usize, index: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub key: MarkerKey,
    pub position: Coordinates,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub nearby: Vec<String>,
}

/// Dashed line drawn from origin to destination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteLine {
    pub from: Coordinates,
    pub to: Coordinates,
    pub dashed: bool,
}

/// Result of one synchronization pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapUpdate {
    /// New viewport, if the map should move.
    pub viewport: Option<Viewport>,
    pub added: Vec<MarkerKey>,
    pub removed: Vec<MarkerKey>,
    /// True when the route line was drawn, replaced or cleared.
    pub route_changed: bool,
}

impl MapUpdate {
    pub fn is_empty(&self) -> bool {
        self.viewport.is_none() && self.added.is_empty() && self.removed.is_empty() && !self.route_changed
    }
}
