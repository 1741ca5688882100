//! Arced route polylines between consecutive waypoints.

use std::f64::consts::PI;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::GeoError;
use crate::projection::{check_radius, project_point, ProjectedPoint};
use crate::traits::GeoPoint;

/// Route radius: slightly above the 2.0 globe so the line clears the surface.
pub const DEFAULT_ROUTE_RADIUS: f64 = 2.03;

/// Samples per segment, both endpoints included (t steps by 0.05).
pub const DEFAULT_SAMPLE_COUNT: usize = 21;

pub const DEFAULT_BULGE_AMPLITUDE: f64 = 0.08;

/// Upper bound on samples per segment.
pub const MAX_SAMPLE_COUNT: usize = 1 << 16;

/// Routes with fewer segments than this are sampled on the calling thread.
const PARALLEL_SEGMENT_THRESHOLD: usize = 64;

/// Below this fraction of the radius an interpolated point has no usable direction.
const DEGENERATE_NORM_RATIO: f64 = 1e-9;

/// How samples between two endpoints are placed before the arc lift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcProfile {
    /// Straight chord, then multiplied by the lift factor. Long hops sag
    /// below the sphere surface near their middle.
    Chord,
    /// Chord direction, rescaled so the magnitude is exactly
    /// `radius * lift`. The midpoint sits at `radius * (1 + bulge)`.
    #[default]
    Surface,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    /// Sphere radius the endpoints are projected onto.
    pub radius: f64,
    /// Samples per segment including both endpoints, in `2..=MAX_SAMPLE_COUNT`.
    pub sample_count: usize,
    /// Extra lift at the segment midpoint, as a fraction of the radius.
    pub bulge_amplitude: f64,
    pub profile: ArcProfile,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_ROUTE_RADIUS,
            sample_count: DEFAULT_SAMPLE_COUNT,
            bulge_amplitude: DEFAULT_BULGE_AMPLITUDE,
            profile: ArcProfile::default(),
        }
    }
}

impl RouteOptions {
    pub fn new(radius: f64, sample_count: usize, bulge_amplitude: f64) -> Self {
        Self {
            radius,
            sample_count,
            bulge_amplitude,
            profile: ArcProfile::default(),
        }
    }

    pub fn with_profile(mut self, profile: ArcProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn validate(&self) -> Result<(), GeoError> {
        check_radius(self.radius)?;
        if self.sample_count < 2 {
            return Err(GeoError::parameter(
                "sample_count",
                self.sample_count as f64,
                "must be at least 2",
            ));
        }
        if self.sample_count > MAX_SAMPLE_COUNT {
            return Err(GeoError::parameter(
                "sample_count",
                self.sample_count as f64,
                "exceeds MAX_SAMPLE_COUNT",
            ));
        }
        if !(self.bulge_amplitude.is_finite() && self.bulge_amplitude >= 0.0) {
            return Err(GeoError::parameter(
                "bulge_amplitude",
                self.bulge_amplitude,
                "must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Radial lift factor at parameter `t`: 1 at both ends, `1 + bulge` midway.
    pub fn lift(&self, t: f64) -> f64 {
        1.0 + self.bulge_amplitude * (t * PI).sin()
    }
}

/// Builds the arced polyline through `waypoints` in visiting order.
///
/// Each consecutive pair contributes exactly `sample_count` points, so
/// neighbouring segments repeat their shared endpoint. Fewer than two
/// waypoints yield an empty route, though every waypoint is still checked.
/// Long routes are sampled on the rayon pool; the output is identical either way.
pub fn build_route<W: GeoPoint>(waypoints: &[W], options: &RouteOptions) -> Result<Vec<ProjectedPoint>, GeoError> {
    options.validate()?;
    waypoints.iter().try_for_each(GeoPoint::validate)?;
    if waypoints.len() < 2 {
        return Ok(Vec::new());
    }

    let total = (waypoints.len() - 1)
        .checked_mul(options.sample_count)
        .ok_or_else(|| {
            GeoError::parameter(
                "sample_count",
                options.sample_count as f64,
                "route would exceed addressable length",
            )
        })?;

    let projected = waypoints
        .iter()
        .map(|waypoint| project_point(waypoint, options.radius))
        .collect::<Result<Vec<_>, _>>()?;

    // Gather every segment before checking errors so the reported failure
    // is always the earliest one, whatever order the pool ran in.
    let sample = |(index, pair): (usize, &[ProjectedPoint])| {
        sample_segment(index, &pair[0], &pair[1], options)
    };
    let segments: Vec<Result<Vec<ProjectedPoint>, GeoError>> =
        if projected.len() - 1 < PARALLEL_SEGMENT_THRESHOLD {
            projected.windows(2).enumerate().map(sample).collect()
        } else {
            projected.par_windows(2).enumerate().map(sample).collect()
        };

    let mut route = Vec::with_capacity(total);
    for segment in segments {
        route.extend(segment?);
    }

    debug!(
        waypoints = waypoints.len(),
        sample_count = options.sample_count,
        points = route.len(),
        "built route"
    );

    Ok(route)
}

/// Samples the single arc from `from` to `to`.
pub fn build_segment<A: GeoPoint, B: GeoPoint>(
    from: &A,
    to: &B,
    options: &RouteOptions,
) -> Result<Vec<ProjectedPoint>, GeoError> {
    options.validate()?;
    let start = project_point(from, options.radius)?;
    let end = project_point(to, options.radius)?;
    sample_segment(0, &start, &end, options)
}

fn sample_segment(
    index: usize,
    start: &ProjectedPoint,
    end: &ProjectedPoint,
    options: &RouteOptions,
) -> Result<Vec<ProjectedPoint>, GeoError> {
    let steps = (options.sample_count - 1) as f64;
    let mut samples = Vec::with_capacity(options.sample_count);

    for i in 0..options.sample_count {
        let t = i as f64 / steps;
        let point = start.lerp(end, t);
        let lift = options.lift(t);

        let sample = match options.profile {
            ArcProfile::Chord => point.scale(lift),
            ArcProfile::Surface => {
                let norm = point.norm();
                if norm < options.radius * DEGENERATE_NORM_RATIO {
                    return Err(GeoError::DegenerateSegment { index });
                }
                point.scale(options.radius * lift / norm)
            }
        };
        samples.push(sample);
    }

    trace!(segment = index, samples = samples.len(), "sampled segment");
    Ok(samples)
}
