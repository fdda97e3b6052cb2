//! Map Synchronizer: derives viewport, markers and route line from the
//! session's current plan.
//!
//! The marker set is recomputed from scratch whenever the plan reference
//! changes and diffed against the previous set, so markers from an earlier
//! plan never linger.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use crate::types::map::{MapUpdate, Marker, MarkerKey, RouteLine, Viewport, DESTINATION_ZOOM};
use crate::types::trip::TripPlan;

/// Trait defining the map synchronization interface.
pub trait MapSynchronizerTrait {
    fn sync(&mut self, plan: Option<&Arc<TripPlan>>) -> MapUpdate;
    fn viewport(&self) -> Viewport;
    fn markers(&self) -> Vec<&Marker>;
    fn route(&self) -> Option<RouteLine>;
}

/// Viewport the plan asks for, or `None` to keep the current view.
pub fn viewport_for(plan: &TripPlan) -> Option<Viewport> {
    match (plan.coordinates, plan.origin_coordinates) {
        (Some(destination), Some(origin)) => Some(Viewport::covering(origin, destination)),
        (Some(destination), None) => Some(Viewport::Center {
            center: destination,
            zoom: DESTINATION_ZOOM,
        }),
        _ => None,
    }
}

/// Full marker set for a plan.
pub fn markers_for(plan: &TripPlan) -> BTreeMap<MarkerKey, Marker> {
    let mut markers = BTreeMap::new();

    if let Some(position) = plan.coordinates {
        let info = plan.destination_info.as_ref();
        markers.insert(
            MarkerKey::Destination,
            Marker {
                key: MarkerKey::Destination,
                position,
                title: plan.destination.clone(),
                description: info.and_then(|i| i.description.clone()),
                image_url: info.and_then(|i| i.image_url.clone()).or_else(|| plan.hero_image.clone()),
                nearby: Vec::new(),
            },
        );
    }

    if let Some(position) = plan.origin_coordinates {
        let info = plan.origin_info.as_ref();
        markers.insert(
            MarkerKey::Origin,
            Marker {
                key: MarkerKey::Origin,
                position,
                title: info
                    .and_then(|i| i.city_name.clone())
                    .unwrap_or_else(|| "Origin City".to_string()),
                description: info.and_then(|i| i.description.clone()),
                image_url: info.and_then(|i| i.image_url.clone()),
                // Popup shows the first three highlights
                nearby: info
                    .and_then(|i| i.top_attractions.as_ref())
                    .map(|attrs| attrs.iter().take(3).map(|a| a.name.clone()).collect())
                    .unwrap_or_default(),
            },
        );
    }

    for (day_pos, day) in plan.itinerary.iter().enumerate() {
        for (index, activity) in day.activities.iter().enumerate() {
            let Some(position) = activity.coordinates else {
                continue;
            };
            let key = MarkerKey::Activity { day: day_pos, index };
            markers.insert(
                key.clone(),
                Marker {
                    key,
                    position,
                    title: activity.activity.clone(),
                    description: Some(activity.description.clone()),
                    image_url: activity.image_url.clone(),
                    nearby: activity.nearby_attractions.clone().unwrap_or_default(),
                },
            );
        }
    }

    markers
}

/// Dashed origin→destination line, when both ends are known.
pub fn route_for(plan: &TripPlan) -> Option<RouteLine> {
    match (plan.origin_coordinates, plan.coordinates) {
        (Some(from), Some(to)) => Some(RouteLine { from, to, dashed: true }),
        _ => None,
    }
}

/// Map state mirrored from the current plan.
#[derive(Debug, Default)]
pub struct MapSynchronizer {
    viewport: Viewport,
    markers: BTreeMap<MarkerKey, Marker>,
    route: Option<RouteLine>,
    plan: Option<Arc<TripPlan>>,
}

impl MapSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn same_plan(&self, plan: Option<&Arc<TripPlan>>) -> bool {
        match (&self.plan, plan) {
            (Some(old), Some(new)) => Arc::ptr_eq(old, new),
            (None, None) => true,
            _ => false,
        }
    }
}

impl MapSynchronizerTrait for MapSynchronizer {
    /// Brings the map in line with `plan`.
    ///
    /// Calling again with the same `Arc` is a no-op.
    fn sync(&mut self, plan: Option<&Arc<TripPlan>>) -> MapUpdate {
        if self.same_plan(plan) {
            return MapUpdate::default();
        }

        let next_markers = plan.map(|p| markers_for(p)).unwrap_or_default();
        let next_route = plan.and_then(|p| route_for(p));

        let removed: Vec<MarkerKey> = self
            .markers
            .keys()
            .filter(|k| !next_markers.contains_key(*k))
            .cloned()
            .collect();
        // Same key with a different payload is re-added.
        let added: Vec<MarkerKey> = next_markers
            .iter()
            .filter(|(k, m)| self.markers.get(*k) != Some(*m))
            .map(|(k, _)| k.clone())
            .collect();

        let viewport = plan.and_then(|p| viewport_for(p));
        if let Some(v) = viewport {
            self.viewport = v;
        }

        let route_changed = self.route != next_route;

        debug!(
            "map sync: +{} -{} markers, viewport {}",
            added.len(),
            removed.len(),
            if viewport.is_some() { "moved" } else { "kept" }
        );

        self.markers = next_markers;
        self.route = next_route;
        self.plan = plan.cloned();

        MapUpdate {
            viewport,
            added,
            removed,
            route_changed,
        }
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn markers(&self) -> Vec<&Marker> {
        self.markers.values().collect()
    }

    fn route(&self) -> Option<RouteLine> {
        self.route
    }
}
