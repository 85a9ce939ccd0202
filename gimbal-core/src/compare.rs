//! Epsilon-aware scalar comparison.
//!
//! Every boundary snap and degeneracy test in the workspace goes through these
//! helpers, so the tolerance policy lives in one place ([`Real::TOLERANCE`]).

use crate::real::Real;

/// Returns `true` if `a` and `b` differ by at most [`Real::TOLERANCE`].
///
/// ```
/// use gimbal_core::compare::approximately_equal;
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-12));
/// assert!(!approximately_equal(1.0, 1.001));
/// ```
#[inline]
pub fn approximately_equal<T: Real>(a: T, b: T) -> bool {
    approximately_equal_within(a, b, T::TOLERANCE)
}

/// Returns `true` if `a` and `b` differ by at most `tolerance`.
#[inline]
pub fn approximately_equal_within<T: Real>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() <= tolerance
}

/// Returns `true` if `a` is within [`Real::TOLERANCE`] of zero.
#[inline]
pub fn approximately_zero<T: Real>(a: T) -> bool {
    a.abs() <= T::TOLERANCE
}
