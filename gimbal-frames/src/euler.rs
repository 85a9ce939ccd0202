//! Heading / elevation / bank triples.
//!
//! The convention is intrinsic z-y'-x'': turn by `heading` about z, then by
//! `elevation` about the new y, then by `bank` about the new x.
//!
//! Every orientation has two raw representations, `(h, e, b)` and
//! `(h + π, π - e, b + π)`. [`EulerAngles::normalize`] picks the one with
//! `elevation` in `[-π/2, π/2]` and wraps heading and bank into `(-π, π]`.
//!
//! ```
//! use gimbal_frames::EulerAngles;
//!
//! let e = EulerAngles::<f64>::from_degrees(90.0, -110.0, 50.0).normalized();
//! assert!((e.heading.degrees() + 90.0).abs() < 1e-10);
//! assert!((e.elevation.degrees() + 70.0).abs() < 1e-10);
//! assert!((e.bank.degrees() + 130.0).abs() < 1e-10);
//! ```

use gimbal_core::compare::approximately_equal;
use gimbal_core::{Angle, Real};
use std::fmt;

/// Heading, elevation and bank angles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: Real + serde::Serialize",
        deserialize = "T: Real + serde::Deserialize<'de>"
    ))
)]
pub struct EulerAngles<T = f64> {
    pub heading: Angle<T>,
    pub elevation: Angle<T>,
    pub bank: Angle<T>,
}

impl<T: Real> EulerAngles<T> {
    pub fn new(heading: Angle<T>, elevation: Angle<T>, bank: Angle<T>) -> Self {
        Self {
            heading,
            elevation,
            bank,
        }
    }

    pub fn from_degrees(heading: T, elevation: T, bank: T) -> Self {
        Self::new(
            Angle::from_degrees(heading),
            Angle::from_degrees(elevation),
            Angle::from_degrees(bank),
        )
    }

    pub fn from_radians(heading: T, elevation: T, bank: T) -> Self {
        Self::new(
            Angle::from_radians(heading),
            Angle::from_radians(elevation),
            Angle::from_radians(bank),
        )
    }

    /// Canonicalizes in place: `elevation ∈ [-π/2, π/2]`, heading and bank
    /// in `(-π, π]`.
    pub fn normalize(&mut self) {
        self.heading.normalize_pi_minus_pi();
        self.elevation.normalize_pi_minus_pi();
        self.bank.normalize_pi_minus_pi();

        let half_pi = Angle::half_pi();
        let flipped = if self.elevation < -half_pi {
            self.elevation = -Angle::pi() - self.elevation;
            true
        } else if self.elevation > half_pi {
            self.elevation = Angle::pi() - self.elevation;
            true
        } else {
            false
        };

        if flipped {
            self.heading += Angle::pi();
            self.heading.normalize_pi_minus_pi();
            self.bank += Angle::pi();
            self.bank.normalize_pi_minus_pi();
        }
    }

    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// `true` when elevation is within tolerance of ±90°, where heading and
    /// bank turn about the same axis.
    pub fn is_gimbal_locked(&self) -> bool {
        approximately_equal(self.elevation.radians().abs(), T::FRAC_PI_2())
    }
}

impl<T: Real> fmt::Display for EulerAngles<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EulerAngles(heading: {:.6}°, elevation: {:.6}°, bank: {:.6}°)",
            self.heading.degrees(),
            self.elevation.degrees(),
            self.bank.degrees()
        )
    }
}
