//! Core geographic traits.
//!
//! These are intentionally minimal. Apps with their own location types can
//! implement them instead of converting to [`Waypoint`](crate::waypoint::Waypoint).

use crate::error::GeoError;

/// Anything with a position on the globe, in degrees.
pub trait GeoPoint {
    /// Latitude in degrees, north positive.
    fn latitude(&self) -> f64;

    /// Longitude in degrees, east positive.
    fn longitude(&self) -> f64;

    /// Location as a (lat, lng) tuple.
    fn location(&self) -> (f64, f64) {
        (self.latitude(), self.longitude())
    }

    /// Rejects coordinates outside the geographic range, NaN included.
    fn validate(&self) -> Result<(), GeoError> {
        check_coordinate(self.latitude(), self.longitude())
    }
}

/// Plain (lat, lng) tuples.
impl GeoPoint for (f64, f64) {
    fn latitude(&self) -> f64 {
        self.0
    }

    fn longitude(&self) -> f64 {
        self.1
    }
}

impl<T: GeoPoint + ?Sized> GeoPoint for &T {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}

pub(crate) fn check_coordinate(latitude: f64, longitude: f64) -> Result<(), GeoError> {
    // RangeInclusive::contains is false for NaN.
    if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
        Ok(())
    } else {
        Err(GeoError::InvalidCoordinate { latitude, longitude })
    }
}
