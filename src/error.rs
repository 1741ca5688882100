//! Error type shared by projection, routing and itinerary code.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// A tuning parameter (radius, sample count, bulge) is out of range.
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    InvalidCoordinate { latitude: f64, longitude: f64 },
    /// Segment `index` joins two antipodal points, so its arc has no direction.
    DegenerateSegment { index: usize },
}

impl GeoError {
    pub(crate) fn parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        GeoError::InvalidParameter { name, value, reason }
    }
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidParameter { name, value, reason } => {
                write!(f, "invalid parameter {}={}: {}", name, value, reason)
            }
            GeoError::InvalidCoordinate { latitude, longitude } => {
                write!(f, "invalid coordinate ({}, {})", latitude, longitude)
            }
            GeoError::DegenerateSegment { index } => {
                write!(f, "route segment {} joins antipodal points", index)
            }
        }
    }
}

impl std::error::Error for GeoError {}
