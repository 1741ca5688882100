//! Great-circle distances between waypoints.
//!
//! Straight-line over the globe, so it ignores roads and ferries. Good
//! enough for the itinerary's "km traveled" figure.

use crate::traits::GeoPoint;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
pub fn haversine_km<A: GeoPoint + ?Sized, B: GeoPoint + ?Sized>(from: &A, to: &B) -> f64 {
    let (lat1, lng1) = from.location();
    let (lat2, lng2) = to.location();

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Sum of the legs between consecutive waypoints, in visiting order.
pub fn route_distance_km<W: GeoPoint>(waypoints: &[W]) -> f64 {
    waypoints
        .windows(2)
        .map(|pair| haversine_km(&pair[0], &pair[1]))
        .sum()
}
