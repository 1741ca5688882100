//! The static itinerary shown on the globe and the scene built from it.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeoError;
use crate::haversine::route_distance_km;
use crate::projection::{check_radius, project_point, ProjectedPoint};
use crate::route::{build_route, RouteOptions};
use crate::traits::GeoPoint;
use crate::waypoint::Waypoint;

/// Draw radius of the globe mesh.
pub const DEFAULT_GLOBE_RADIUS: f64 = 2.0;

/// Markers float just above the surface so they don't z-fight with it.
pub const DEFAULT_MARKER_RADIUS: f64 = 2.02;

/// The Italy tour, in visiting order.
pub const ITALY_ITINERARY: &[Waypoint] = &[
    Waypoint::new("Rome", 41.9028, 12.4964, "3 nights"),
    Waypoint::new("Florence", 43.7696, 11.2558, "2 nights"),
    Waypoint::new("Siena", 43.3188, 11.3308, "Day trip"),
    Waypoint::new("Cinque Terre", 44.1461, 9.6439, "1 night"),
    Waypoint::new("Portofino", 44.3033, 9.2106, "Day trip"),
    Waypoint::new("Positano", 40.6280, 14.4850, "3 nights"),
    Waypoint::new("Capri", 40.5531, 14.2223, "Day trip"),
    Waypoint::new("Ravello", 40.6493, 14.6115, "Day trip"),
];

/// Radii and route tuning for one globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeLayout {
    pub globe_radius: f64,
    pub marker_radius: f64,
    pub route: RouteOptions,
}

impl Default for GlobeLayout {
    fn default() -> Self {
        Self {
            globe_radius: DEFAULT_GLOBE_RADIUS,
            marker_radius: DEFAULT_MARKER_RADIUS,
            route: RouteOptions::default(),
        }
    }
}

impl GlobeLayout {
    /// Checks radii only: markers and the route's endpoint radius must not be
    /// below the globe. A [`Chord`](crate::route::ArcProfile::Chord) route can
    /// still dip inside the globe on long legs.
    pub fn validate(&self) -> Result<(), GeoError> {
        check_radius(self.globe_radius)?;
        self.route.validate()?;
        if self.marker_radius.is_nan() || self.marker_radius < self.globe_radius {
            return Err(GeoError::parameter(
                "marker_radius",
                self.marker_radius,
                "must not be below the globe radius",
            ));
        }
        if self.route.radius < self.globe_radius {
            return Err(GeoError::parameter(
                "route.radius",
                self.route.radius,
                "must not be below the globe radius",
            ));
        }
        Ok(())
    }
}

/// A projected stop, carrying its captions for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub name: Cow<'static, str>,
    pub label: Cow<'static, str>,
    pub position: ProjectedPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItinerarySummary {
    pub destinations: usize,
    /// Great-circle distance along the visiting order.
    pub total_km: f64,
}

/// Everything a renderer needs to draw the globe section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobeScene {
    pub globe_radius: f64,
    pub markers: Vec<Marker>,
    pub route: Vec<ProjectedPoint>,
    pub summary: ItinerarySummary,
}

/// An ordered, validated list of waypoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    waypoints: Vec<Waypoint>,
}

impl Itinerary {
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, GeoError> {
        for waypoint in &waypoints {
            waypoint.validate()?;
        }
        Ok(Self { waypoints })
    }

    /// The built-in tour. The table is not re-validated here.
    pub fn italy() -> Self {
        debug_assert!(ITALY_ITINERARY.iter().all(|waypoint| waypoint.validate().is_ok()));
        Self {
            waypoints: ITALY_ITINERARY.to_vec(),
        }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// One marker per stop, in visiting order.
    pub fn markers(&self, radius: f64) -> Result<Vec<Marker>, GeoError> {
        self.waypoints
            .iter()
            .map(|waypoint| {
                project_point(waypoint, radius).map(|position| Marker {
                    name: waypoint.name.clone(),
                    label: waypoint.label.clone(),
                    position,
                })
            })
            .collect()
    }

    pub fn route(&self, options: &RouteOptions) -> Result<Vec<ProjectedPoint>, GeoError> {
        build_route(&self.waypoints, options)
    }

    pub fn summary(&self) -> ItinerarySummary {
        ItinerarySummary {
            destinations: self.waypoints.len(),
            total_km: route_distance_km(&self.waypoints),
        }
    }

    pub fn render(&self, layout: &GlobeLayout) -> Result<GlobeScene, GeoError> {
        layout.validate()?;
        let scene = GlobeScene {
            globe_radius: layout.globe_radius,
            markers: self.markers(layout.marker_radius)?,
            route: self.route(&layout.route)?,
            summary: self.summary(),
        };

        debug!(
            markers = scene.markers.len(),
            route_points = scene.route.len(),
            total_km = scene.summary.total_km,
            "rendered globe scene"
        );

        Ok(scene)
    }
}
