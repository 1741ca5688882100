//! Named itinerary stops.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::traits::GeoPoint;

/// One stop on an itinerary.
///
/// Names and labels are `Cow` so static tables can be built with
/// [`Waypoint::new`] in `const` context while deserialized waypoints own
/// their strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: Cow<'static, str>,
    pub latitude: f64,
    pub longitude: f64,
    /// Free-form caption, e.g. "3 nights".
    pub label: Cow<'static, str>,
}

impl Waypoint {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64, label: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            latitude,
            longitude,
            label: Cow::Borrowed(label),
        }
    }

    pub fn owned(name: impl Into<String>, latitude: f64, longitude: f64, label: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            latitude,
            longitude,
            label: Cow::Owned(label.into()),
        }
    }
}

impl GeoPoint for Waypoint {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}
