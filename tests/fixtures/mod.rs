//! Test fixtures for wanderlux-globe.
//!
//! Provides named real-world locations spread across the globe, plus the
//! tolerance helpers the projection tests share.

pub mod world_locations;

pub use world_locations::*;

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}
