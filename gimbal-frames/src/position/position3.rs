use gimbal_core::{Matrix3, Real, Vector3};
use std::ops::Mul;

use crate::rotation::Rotation;

/// A 3D frame: origin `point` and `orientation`, both relative to the parent.
///
/// ```
/// use gimbal_frames::{Angle, Position3, Rotation, Vector3};
///
/// let arm = Position3::new(
///     Vector3::new(1.0, 0.0, 0.0),
///     Rotation::from_axis_angle(Vector3::z_axis(), Angle::from_degrees(90.0)),
/// );
/// let tip = arm.to_parent(Vector3::new(2.0, 0.0, 0.0));
/// assert!(tip.approximately_equal(&Vector3::new(1.0, 2.0, 0.0)));
/// assert!(arm.to_local(tip).approximately_equal(&Vector3::new(2.0, 0.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: Real + serde::Serialize",
        deserialize = "T: Real + serde::Deserialize<'de>"
    ))
)]
pub struct Position3<T = f64> {
    pub point: Vector3<T>,
    pub orientation: Rotation<T>,
}

impl<T: Real> Position3<T> {
    pub fn new(point: Vector3<T>, orientation: Rotation<T>) -> Self {
        Self { point, orientation }
    }

    /// Coincides with the parent frame.
    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), Rotation::identity())
    }

    /// Pure translation.
    pub fn from_point(point: Vector3<T>) -> Self {
        Self::new(point, Rotation::identity())
    }

    /// Flattens `second`, given relative to `self`, into a single transform
    /// relative to `self`'s parent.
    pub fn combine(&self, second: &Self) -> Self {
        Self::new(
            self.point + self.orientation.turn(second.point),
            self.orientation.combine(&second.orientation),
        )
    }

    /// The transform of `self` relative to `other`, with both given in the
    /// same parent: `other.combine(&self.difference(other)) ≈ self`.
    pub fn difference(&self, other: &Self) -> Self {
        Self::new(
            other.orientation.turn_backward(self.point - other.point),
            self.orientation.difference_with(&other.orientation),
        )
    }

    /// Inverts in place, so the parent is expressed relative to this frame.
    pub fn invert(&mut self) {
        self.point = self.orientation.turn_backward(-self.point);
        self.orientation.invert();
    }

    #[inline]
    pub fn inverted(mut self) -> Self {
        self.invert();
        self
    }

    /// Maps a local vector into the parent frame.
    #[inline]
    pub fn to_parent(&self, v: Vector3<T>) -> Vector3<T> {
        self.orientation.turn(v) + self.point
    }

    /// Maps a parent vector into the local frame.
    #[inline]
    pub fn to_local(&self, v: Vector3<T>) -> Vector3<T> {
        self.orientation.turn_backward(v - self.point)
    }

    /// Re-expresses `v` from this frame in the frame `other`, where both
    /// frames share a parent.
    ///
    /// Equivalent to `other.to_local(self.to_parent(v))`.
    pub fn change_positioning_to(&self, other: &Self, v: Vector3<T>) -> Vector3<T> {
        other
            .orientation
            .turn_backward(self.orientation.turn(v) + (self.point - other.point))
    }

    /// Re-expresses `v` from the frame `other` in this frame, where both
    /// frames share a parent.
    ///
    /// Equivalent to `self.to_local(other.to_parent(v))`.
    pub fn change_positioning_from(&self, other: &Self, v: Vector3<T>) -> Vector3<T> {
        self.orientation
            .turn_backward(other.orientation.turn(v) + (other.point - self.point))
    }

    /// The orientation as a matrix.
    pub fn matrix(&self) -> Matrix3<T> {
        self.orientation.matrix()
    }

    /// Same frame, same point and same physical orientation, within tolerance.
    pub fn approximately_equal(&self, other: &Self) -> bool {
        self.point.approximately_equal(&other.point)
            && self.orientation.approximately_equal(&other.orientation)
    }
}

impl<T: Real> Default for Position3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Mul for Position3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}
