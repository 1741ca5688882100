//! wanderlux-globe core
//!
//! Projects itinerary waypoints onto a sphere and builds the arced route
//! polyline a globe renderer draws between them.

pub mod error;
pub mod traits;
pub mod waypoint;
pub mod projection;
pub mod route;
pub mod haversine;
pub mod itinerary;

pub use error::GeoError;
pub use itinerary::{GlobeLayout, GlobeScene, Itinerary, ItinerarySummary, Marker};
pub use projection::{project_point, project_to_sphere, ProjectedPoint};
pub use route::{build_route, build_segment, ArcProfile, RouteOptions};
pub use traits::GeoPoint;
pub use waypoint::Waypoint;
