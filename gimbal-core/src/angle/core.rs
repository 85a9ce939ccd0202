//! Core angle type.
//!
//! [`Angle`] stores a single value in radians and offers conversions to and from
//! degrees and gradians, trigonometry, and the two periodic normalizations used by
//! the orientation types:
//!
//! | Method | Range |
//! |--------|-------|
//! | [`normalize_2pi`](Angle::normalize_2pi) | `[0, 2π)` |
//! | [`normalize_pi_minus_pi`](Angle::normalize_pi_minus_pi) | `(-π, π]` |
//!
//! Angles carry no invariant until one of these is applied.
//!
//! ```
//! use gimbal_core::Angle;
//!
//! let mut heading = Angle::<f64>::from_degrees(270.0);
//! heading.normalize_pi_minus_pi();
//! assert!((heading.degrees() + 90.0).abs() < 1e-10);
//!
//! let quarter = Angle::<f64>::from_gradians(100.0);
//! assert!((quarter.degrees() - 90.0).abs() < 1e-10);
//! ```

use super::normalize;
use crate::real::Real;

/// An angular measurement stored as radians.
///
/// `Angle` is a plain value type: arithmetic and normalization either return a
/// new angle or act on the receiver's own copy.
///
/// `Eq` and `Ord` are not implemented because the scalar can be NaN.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle<T = f64> {
    rad: T,
}

impl<T: Real> Angle<T> {
    /// Creates an angle from radians.
    #[inline]
    pub const fn from_radians(rad: T) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(deg: T) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Creates an angle from gradians (400 gradians per full turn).
    ///
    /// ```
    /// use gimbal_core::Angle;
    ///
    /// let half_turn = Angle::from_gradians(200.0);
    /// assert!((half_turn.radians() - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_gradians(grad: T) -> Self {
        Self {
            rad: grad * T::PI() / T::cast(200.0),
        }
    }

    /// The zero angle.
    #[inline]
    pub fn zero() -> Self {
        Self::from_radians(T::zero())
    }

    /// π radians (180 degrees).
    #[inline]
    pub fn pi() -> Self {
        Self::from_radians(T::PI())
    }

    /// π/2 radians (90 degrees).
    #[inline]
    pub fn half_pi() -> Self {
        Self::from_radians(T::FRAC_PI_2())
    }

    /// Returns the angle in radians.
    #[inline]
    pub fn radians(self) -> T {
        self.rad
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> T {
        self.rad.to_degrees()
    }

    /// Returns the angle in gradians.
    #[inline]
    pub fn gradians(self) -> T {
        self.rad * T::cast(200.0) / T::PI()
    }

    #[inline]
    pub fn sin(self) -> T {
        self.rad.sin()
    }

    #[inline]
    pub fn cos(self) -> T {
        self.rad.cos()
    }

    /// Returns both sine and cosine of the angle as `(sin, cos)`.
    #[inline]
    pub fn sin_cos(self) -> (T, T) {
        self.rad.sin_cos()
    }

    #[inline]
    pub fn tan(self) -> T {
        self.rad.tan()
    }

    /// Returns the cotangent, `cos / sin`.
    ///
    /// Infinite (or NaN) at multiples of π, like the underlying division.
    #[inline]
    pub fn cot(self) -> T {
        let (s, c) = self.rad.sin_cos();
        c / s
    }

    /// Returns the absolute value of the angle.
    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    /// Returns `true` if the radian value is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }

    /// Negates the angle in place.
    #[inline]
    pub fn invert(&mut self) {
        self.rad = -self.rad;
    }

    /// Returns the negated angle.
    #[inline]
    pub fn inverted(self) -> Self {
        Self { rad: -self.rad }
    }

    /// Wraps the angle into `[0, 2π)` in place.
    ///
    /// Residues within tolerance below `2π` snap to exactly zero.
    #[inline]
    pub fn normalize_2pi(&mut self) {
        self.rad = normalize::normalize_2pi(self.rad);
    }

    /// Wraps the angle into `(-π, π]` in place.
    ///
    /// Values within tolerance of either `-π` or `+π` snap to exactly `+π`.
    #[inline]
    pub fn normalize_pi_minus_pi(&mut self) {
        self.rad = normalize::normalize_pi_minus_pi(self.rad);
    }

    /// Returns the angle wrapped into `[0, 2π)`.
    ///
    /// ```
    /// use gimbal_core::Angle;
    ///
    /// let a = Angle::<f64>::from_degrees(-90.0).normalized_2pi();
    /// assert!((a.degrees() - 270.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn normalized_2pi(mut self) -> Self {
        self.normalize_2pi();
        self
    }

    /// Returns the angle wrapped into `(-π, π]`.
    #[inline]
    pub fn normalized_pi_minus_pi(mut self) -> Self {
        self.normalize_pi_minus_pi();
        self
    }
}

/// Creates an angle from radians. Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad<T: Real>(v: T) -> Angle<T> {
    Angle::from_radians(v)
}

/// Creates an angle from degrees. Shorthand for [`Angle::from_degrees`].
///
/// ```
/// use gimbal_core::angle::deg;
///
/// let angle = deg(45.0);
/// assert!((angle.radians() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
/// ```
#[inline]
pub fn deg<T: Real>(v: T) -> Angle<T> {
    Angle::from_degrees(v)
}

/// Creates an angle from gradians. Shorthand for [`Angle::from_gradians`].
#[inline]
pub fn grad<T: Real>(v: T) -> Angle<T> {
    Angle::from_gradians(v)
}
