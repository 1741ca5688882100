//! Named locations for projection and routing fixtures.

#![allow(dead_code)]

use wanderlux_globe::{GeoPoint, Waypoint};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn waypoint(&self) -> Waypoint {
        Waypoint::new(self.name, self.lat, self.lng, "")
    }
}

impl GeoPoint for Location {
    fn latitude(&self) -> f64 {
        self.lat
    }

    fn longitude(&self) -> f64 {
        self.lng
    }
}

// ============================================================================
// Capitals on every continent
// ============================================================================

pub const CAPITALS: &[Location] = &[
    Location::new("Reykjavik", 64.1466, -21.9426),
    Location::new("Lisbon", 38.7223, -9.1393),
    Location::new("Nairobi", -1.2921, 36.8219),
    Location::new("Tokyo", 35.6762, 139.6503),
    Location::new("Canberra", -35.2809, 149.1300),
    Location::new("Lima", -12.0464, -77.0428),
    Location::new("Ottawa", 45.4215, -75.6972),
];

// ============================================================================
// Extremes of the coordinate range
// ============================================================================

pub const EXTREMES: &[Location] = &[
    Location::new("North Pole", 90.0, 0.0),
    Location::new("South Pole", -90.0, 0.0),
    Location::new("Null Island", 0.0, 0.0),
    Location::new("Antimeridian East", 0.0, 180.0),
    Location::new("Antimeridian West", 0.0, -180.0),
];
