//! Scalar abstraction shared by every value type in the workspace.
//!
//! All geometry is written once against [`Real`] and instantiated for `f32`
//! and `f64`. The trait bundles the `num-traits` float surface with the
//! tolerance used for boundary snapping and degeneracy checks, so a type like
//! `Rotation<f32>` automatically picks a looser threshold than `Rotation<f64>`.
//!
//! | Precision | `TOLERANCE` | Zero-norm threshold (`TOLERANCE²`) |
//! |-----------|-------------|------------------------------------|
//! | `f64`     | `1e-10`     | `1e-20`                            |
//! | `f32`     | `1e-5`      | `1e-10`                            |

use core::fmt;

use num_traits::{Float, FloatConst};

/// Floating-point scalar usable by the angle, vector and rotation types.
pub trait Real:
    Float + FloatConst + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Absolute tolerance for approximate comparisons.
    const TOLERANCE: Self;

    /// Converts an `f64` literal into this precision.
    fn cast(value: f64) -> Self;

    /// Floating-point remainder with the sign of `self` (C `fmod`).
    fn fmod(self, divisor: Self) -> Self;

    /// The squared tolerance, used as the threshold for squared norms.
    #[inline]
    fn squared_tolerance() -> Self {
        Self::TOLERANCE * Self::TOLERANCE
    }

    /// One full turn, 2π.
    #[inline]
    fn two_pi() -> Self {
        Self::PI() + Self::PI()
    }

    /// Lossy conversion to `f64` for diagnostics and error payloads.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Real for f64 {
    const TOLERANCE: f64 = 1e-10;

    #[inline]
    fn cast(value: f64) -> Self {
        value
    }

    #[inline]
    fn fmod(self, divisor: Self) -> Self {
        libm::fmod(self, divisor)
    }
}

impl Real for f32 {
    const TOLERANCE: f32 = 1e-5;

    #[inline]
    fn cast(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn fmod(self, divisor: Self) -> Self {
        libm::fmodf(self, divisor)
    }
}
