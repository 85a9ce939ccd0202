use gimbal_core::compare::approximately_zero;
use gimbal_core::{Angle, Matrix2, Real, Vector2};
use std::ops::Mul;

/// A planar frame: origin `point` and counter-clockwise `orientation`, both
/// relative to the parent.
///
/// Orientations produced by [`combine`](Self::combine),
/// [`difference`](Self::difference) and [`invert`](Self::invert) are wrapped
/// into `(-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: Real + serde::Serialize",
        deserialize = "T: Real + serde::Deserialize<'de>"
    ))
)]
pub struct Position2<T = f64> {
    pub point: Vector2<T>,
    pub orientation: Angle<T>,
}

impl<T: Real> Position2<T> {
    pub fn new(point: Vector2<T>, orientation: Angle<T>) -> Self {
        Self { point, orientation }
    }

    pub fn identity() -> Self {
        Self::new(Vector2::zeros(), Angle::zero())
    }

    /// See [`Position3::combine`](crate::Position3::combine).
    pub fn combine(&self, second: &Self) -> Self {
        Self::new(
            self.point + second.point.rotated(self.orientation),
            (self.orientation + second.orientation).normalized_pi_minus_pi(),
        )
    }

    /// The transform of `self` relative to `other`, with both given in the
    /// same parent.
    pub fn difference(&self, other: &Self) -> Self {
        Self::new(
            (self.point - other.point).rotated(-other.orientation),
            (self.orientation - other.orientation).normalized_pi_minus_pi(),
        )
    }

    pub fn invert(&mut self) {
        self.point = (-self.point).rotated(-self.orientation);
        self.orientation = (-self.orientation).normalized_pi_minus_pi();
    }

    #[inline]
    pub fn inverted(mut self) -> Self {
        self.invert();
        self
    }

    #[inline]
    pub fn to_parent(&self, v: Vector2<T>) -> Vector2<T> {
        v.rotated(self.orientation) + self.point
    }

    #[inline]
    pub fn to_local(&self, v: Vector2<T>) -> Vector2<T> {
        (v - self.point).rotated(-self.orientation)
    }

    /// Equivalent to `other.to_local(self.to_parent(v))`.
    pub fn change_positioning_to(&self, other: &Self, v: Vector2<T>) -> Vector2<T> {
        (v.rotated(self.orientation) + (self.point - other.point)).rotated(-other.orientation)
    }

    /// Equivalent to `self.to_local(other.to_parent(v))`.
    pub fn change_positioning_from(&self, other: &Self, v: Vector2<T>) -> Vector2<T> {
        (v.rotated(other.orientation) + (other.point - self.point)).rotated(-self.orientation)
    }

    pub fn matrix(&self) -> Matrix2<T> {
        Matrix2::rotation(self.orientation)
    }

    /// Compares points componentwise and orientations modulo a full turn.
    pub fn approximately_equal(&self, other: &Self) -> bool {
        let delta = (self.orientation - other.orientation).normalized_pi_minus_pi();
        self.point.approximately_equal(&other.point) && approximately_zero(delta.radians())
    }
}

impl<T: Real> Default for Position2<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Mul for Position2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}
