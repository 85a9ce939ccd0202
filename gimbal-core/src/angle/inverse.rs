//! Inverse trigonometric constructors for [`Angle`].
//!
//! `arcsin` and `arccos` are domain-checked. Inputs a little outside `[-1, 1]`
//! are common after floating-point arithmetic (a dot product of two unit
//! vectors can come out as `1.0000000000000002`), so the band
//! `[-1 - ε, -1] ∪ [1, 1 + ε]` is clamped to the boundary angle. Anything
//! further out, and NaN, is a [`GimbalError::AngleDomain`].
//!
//! | Input | `arcsin` | `arccos` |
//! |-------|----------|----------|
//! | `(1, 1 + ε]` | `π/2` | `0` |
//! | `[-1 - ε, -1)` | `-π/2` | `π` |
//! | otherwise outside `[-1, 1]` | error | error |

use tracing::trace;

use super::core::Angle;
use crate::errors::{GimbalError, GimbalResult};
use crate::real::Real;

impl<T: Real> Angle<T> {
    /// Returns the angle whose sine is `value`, in `[-π/2, π/2]`.
    ///
    /// ```
    /// use gimbal_core::Angle;
    ///
    /// let a = Angle::<f64>::arcsin(0.5).unwrap();
    /// assert!((a.degrees() - 30.0).abs() < 1e-10);
    ///
    /// assert!(Angle::arcsin(1.0 + 1e-12).is_ok());
    /// assert!(Angle::arcsin(-1.5).is_err());
    /// ```
    pub fn arcsin(value: T) -> GimbalResult<Self> {
        check_domain("Angle::arcsin", value)?;

        if value >= T::one() {
            return Ok(Self::half_pi());
        }
        if value <= -T::one() {
            return Ok(-Self::half_pi());
        }

        Ok(Self::from_radians(value.asin()))
    }

    /// Returns the angle whose cosine is `value`, in `[0, π]`.
    ///
    /// ```
    /// use gimbal_core::Angle;
    ///
    /// assert_eq!(Angle::arccos(1.0 + 5e-11).unwrap().radians(), 0.0);
    /// assert!(Angle::<f64>::arccos(1.5).is_err());
    /// ```
    pub fn arccos(value: T) -> GimbalResult<Self> {
        check_domain("Angle::arccos", value)?;

        if value >= T::one() {
            return Ok(Self::zero());
        }
        if value <= -T::one() {
            return Ok(Self::pi());
        }

        Ok(Self::from_radians(value.acos()))
    }

    /// Returns the angle whose tangent is `value`, in `(-π/2, π/2)`.
    #[inline]
    pub fn arctan(value: T) -> Self {
        Self::from_radians(value.atan())
    }

    /// Four-quadrant arctangent of `y / x`, in `(-π, π]`.
    #[inline]
    pub fn arctan2(y: T, x: T) -> Self {
        Self::from_radians(y.atan2(x))
    }
}

fn check_domain<T: Real>(function: &str, value: T) -> GimbalResult<()> {
    let magnitude = value.abs();
    if value.is_nan() || magnitude > T::one() + T::TOLERANCE {
        return Err(GimbalError::angle_domain(function, value.as_f64()));
    }
    if magnitude > T::one() {
        trace!(function, value = value.as_f64(), "clamping inverse trig overshoot");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_arcsin_in_range() {
        assert!((Angle::<f64>::arcsin(0.5).unwrap().degrees() - 30.0).abs() < 1e-12);
        assert_eq!(Angle::arcsin(0.0).unwrap().radians(), 0.0);
        assert_eq!(Angle::arcsin(1.0).unwrap().radians(), FRAC_PI_2);
        assert_eq!(Angle::arcsin(-1.0).unwrap().radians(), -FRAC_PI_2);
    }

    #[test]
    fn test_arcsin_overshoot_is_clamped() {
        let eps = <f64 as Real>::TOLERANCE;
        assert_eq!(Angle::arcsin(1.0 + 0.5 * eps).unwrap().radians(), FRAC_PI_2);
        assert_eq!(Angle::arcsin(-1.0 - 0.5 * eps).unwrap().radians(), -FRAC_PI_2);
    }

    #[test]
    fn test_arccos_overshoot_is_clamped() {
        let eps = <f64 as Real>::TOLERANCE;
        assert_eq!(Angle::arccos(1.0 + 0.5 * eps).unwrap().radians(), 0.0);
        assert_eq!(Angle::arccos(-1.0 - 0.5 * eps).unwrap().radians(), PI);
    }

    #[test]
    fn test_arccos_in_range() {
        assert!((Angle::<f64>::arccos(0.5).unwrap().degrees() - 60.0).abs() < 1e-12);
        assert!((Angle::arccos(0.0).unwrap().radians() - FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn test_domain_errors() {
        let err = Angle::<f64>::arccos(1.5).unwrap_err();
        assert_eq!(err, GimbalError::angle_domain("Angle::arccos", 1.5));

        let err = Angle::<f64>::arcsin(-2.0).unwrap_err();
        assert!(err.is_angle_domain());
        assert!(err.to_string().contains("Angle::arcsin"));

        assert!(Angle::<f64>::arcsin(f64::NAN).is_err());
        assert!(Angle::<f64>::arccos(1.0 + 1e-9).is_err());
    }

    #[test]
    fn test_f32_band_is_wider() {
        assert!(Angle::<f32>::arccos(1.000_004).is_ok());
        assert!(Angle::<f32>::arccos(1.001).is_err());
    }

    #[test]
    fn test_arctan() {
        assert!((Angle::<f64>::arctan(1.0).degrees() - 45.0).abs() < 1e-12);
        assert!((Angle::<f64>::arctan2(1.0, -1.0).degrees() - 135.0).abs() < 1e-12);
        assert!((Angle::<f64>::arctan2(-1.0, 0.0).degrees() + 90.0).abs() < 1e-12);
    }
}
