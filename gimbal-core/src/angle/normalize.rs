//! Periodic angle normalization on raw radian scalars.
//!
//! | Function | Range | Boundary snap |
//! |----------|-------|---------------|
//! | [`normalize_2pi`] | `[0, 2π)` | residues within tolerance of `2π` become `0` |
//! | [`normalize_pi_minus_pi`] | `(-π, π]` | values within tolerance of `±π` become `+π` |
//!
//! The snaps keep values that sit on a wrap boundary from flickering between
//! the two ends of the range after tiny rounding differences (for example a
//! heading of `-1e-17` would otherwise become `2π - 1e-17`).
//!
//! Reduction uses [`Real::fmod`] (backed by `libm`), which keeps the sign of the
//! dividend; the result is then shifted into the target range.
//!
//! ```
//! use gimbal_core::angle::{normalize_2pi, normalize_pi_minus_pi};
//! use std::f64::consts::PI;
//!
//! assert!((normalize_2pi(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
//! assert_eq!(normalize_2pi(-1e-17), 0.0);
//! assert_eq!(normalize_pi_minus_pi(-PI), PI);
//! ```

use crate::compare::approximately_equal;
use crate::real::Real;

/// Wraps `x` (radians) into `[0, 2π)`.
///
/// Non-finite input yields NaN.
#[inline]
pub fn normalize_2pi<T: Real>(x: T) -> T {
    let two_pi = T::two_pi();
    let mut w = x.fmod(two_pi);
    if w < T::zero() {
        w = w + two_pi;
    }
    if w >= two_pi || approximately_equal(w, two_pi) {
        return T::zero();
    }

    w
}

/// Wraps `x` (radians) into `(-π, π]`.
#[inline]
pub fn normalize_pi_minus_pi<T: Real>(x: T) -> T {
    let pi = T::PI();
    let two_pi = T::two_pi();
    let mut w = x.fmod(two_pi);
    if w > pi {
        w = w - two_pi;
    } else if w <= -pi {
        w = w + two_pi;
    }
    if approximately_equal(w, pi) || approximately_equal(w, -pi) {
        return pi;
    }

    w
}
