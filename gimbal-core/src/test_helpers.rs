//! Assertions shared by the unit and integration tests of the gimbal crates.
//!
//! All of them take a context string that is printed on failure, so a loop
//! over a grid of inputs can say which input broke.

use crate::angle::Angle;
use crate::matrix::Vector3;

/// Asserts `|actual - expected| <= tolerance`.
#[track_caller]
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, ctx: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {} got {} (diff {:e}, tolerance {:e})",
        ctx,
        expected,
        actual,
        (actual - expected).abs(),
        tolerance
    );
}

/// Asserts two angles are within `tolerance` radians of each other once
/// their difference is wrapped into `(-π, π]`, so `π` and `-π` match.
#[track_caller]
pub fn assert_angle_near(actual: Angle, expected: Angle, tolerance: f64, ctx: &str) {
    let diff = (actual - expected).normalized_pi_minus_pi().radians();
    assert!(
        diff.abs() <= tolerance,
        "{}: expected {} rad got {} rad (wrapped diff {:e}, tolerance {:e})",
        ctx,
        expected.radians(),
        actual.radians(),
        diff,
        tolerance
    );
}

/// Asserts every component of two vectors is within `tolerance`.
#[track_caller]
pub fn assert_vector3_near(actual: Vector3, expected: Vector3, tolerance: f64, ctx: &str) {
    let diff = actual - expected;
    assert!(
        diff.x.abs() <= tolerance && diff.y.abs() <= tolerance && diff.z.abs() <= tolerance,
        "{}: expected {} got {} (tolerance {:e})",
        ctx,
        expected,
        actual,
        tolerance
    );
}
