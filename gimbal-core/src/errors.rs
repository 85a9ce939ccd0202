//! Error types for orientation and geometry calculations.
//!
//! Almost every geometric degeneracy in this workspace is handled fail-soft: a
//! zero-length axis or a zero-norm quaternion silently resolves to the identity
//! rotation, and vector normalization reports success as a `bool`. The cases
//! below are the ones that are surfaced as errors.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`AngleDomain`](GimbalError::AngleDomain) | `Angle::arcsin` / `Angle::arccos` outside `[-1-ε, 1+ε]` |
//! | [`MathError`](GimbalError::MathError) | Checked component access, matrix validation |
//!
//! ```
//! use gimbal_core::{Angle, GimbalError};
//!
//! let err = Angle::<f64>::arccos(1.5).unwrap_err();
//! assert!(matches!(err, GimbalError::AngleDomain { .. }));
//! ```

use thiserror::Error;

/// Classification of [`GimbalError::MathError`] failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Input value is invalid for the operation (bad index, not a rotation).
    InvalidInput,
    /// Input or result is NaN or infinity.
    NotFinite,
}

/// Unified error type for the gimbal crates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GimbalError {
    /// Inverse trigonometric function evaluated outside its domain.
    #[error("Angle domain error in {function}: {value} is outside [-1, 1]")]
    AngleDomain { function: String, value: f64 },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, GimbalError>`.
pub type GimbalResult<T> = Result<T, GimbalError>;

impl GimbalError {
    /// Creates an [`AngleDomain`](Self::AngleDomain) error.
    pub fn angle_domain(function: &str, value: f64) -> Self {
        Self::AngleDomain {
            function: function.to_string(),
            value,
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Returns `true` for the inverse-trig domain failure.
    pub fn is_angle_domain(&self) -> bool {
        matches!(self, Self::AngleDomain { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_domain_error() {
        let err = GimbalError::angle_domain("Angle::arccos", 1.5);
        assert_eq!(
            err.to_string(),
            "Angle domain error in Angle::arccos: 1.5 is outside [-1, 1]"
        );
        assert!(err.is_angle_domain());
    }

    #[test]
    fn test_math_error_with_kind() {
        let err = GimbalError::math_error(
            "Vector3::get",
            MathErrorKind::InvalidInput,
            "index 3 out of bounds",
        );
        assert!(err.to_string().contains("Math error in Vector3::get"));
        assert!(err.to_string().contains("InvalidInput"));
        assert!(!err.is_angle_domain());
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<GimbalError>();
        _assert_sync::<GimbalError>();
    }
}
