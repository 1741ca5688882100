//! Geographic to Cartesian projection onto a sphere.
//!
//! The frame is the renderer's: +Y points at the north pole and the prime
//! meridian on the equator lands on +X.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::traits::{check_coordinate, GeoPoint};

/// A point in renderer space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ProjectedPoint {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance from the origin.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Linear interpolation, exact at `t = 0` and `t = 1`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let s = 1.0 - t;
        Self::new(
            self.x * s + other.x * t,
            self.y * s + other.y * t,
            self.z * s + other.z * t,
        )
    }

    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<ProjectedPoint> for [f64; 3] {
    fn from(point: ProjectedPoint) -> Self {
        point.to_array()
    }
}

/// Projects a latitude/longitude (degrees) onto a sphere of `radius`.
///
/// Out-of-range coordinates are rejected, never clamped.
pub fn project_to_sphere(latitude: f64, longitude: f64, radius: f64) -> Result<ProjectedPoint, GeoError> {
    check_radius(radius)?;
    check_coordinate(latitude, longitude)?;
    Ok(project_unchecked(latitude, longitude, radius))
}

/// Same as [`project_to_sphere`] for anything implementing [`GeoPoint`].
pub fn project_point<P: GeoPoint + ?Sized>(point: &P, radius: f64) -> Result<ProjectedPoint, GeoError> {
    project_to_sphere(point.latitude(), point.longitude(), radius)
}

pub(crate) fn project_unchecked(latitude: f64, longitude: f64, radius: f64) -> ProjectedPoint {
    let phi = (90.0 - latitude) * (PI / 180.0);
    let theta = (longitude + 180.0) * (PI / 180.0);

    ProjectedPoint::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

pub(crate) fn check_radius(radius: f64) -> Result<(), GeoError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(GeoError::parameter("radius", radius, "must be finite and positive"))
    }
}
