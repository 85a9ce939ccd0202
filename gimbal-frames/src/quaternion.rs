//! Raw quaternions.
//!
//! [`Quaternion`] is a plain four-component value. It does not enforce unit
//! length: [`normalize`](Quaternion::normalize) establishes it, and nothing
//! else preserves it. Orientation code normally goes through
//! [`Rotation`](crate::Rotation), which tracks whether the quaternion has been
//! normalized.
//!
//! Components are stored scalar-first, `(w, x, y, z)`, with the Hamilton
//! convention `i² = j² = k² = ijk = -1`.

use gimbal_core::compare::approximately_zero;
use gimbal_core::{Real, Vector3};
use std::ops::{Mul, Neg};

/// A quaternion `w + xi + yj + zk`.
///
/// `Default` is the identity `(1, 0, 0, 0)`, not the zero quaternion, which
/// is not a valid rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion<T = f64> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Real> Quaternion<T> {
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// The no-rotation quaternion `(1, 0, 0, 0)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// The zero quaternion, left behind by a failed [`normalize`](Self::normalize).
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Builds a quaternion from its scalar part and vector part.
    #[inline]
    pub fn from_scalar_vector(w: T, v: Vector3<T>) -> Self {
        Self::new(w, v.x, v.y, v.z)
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub fn vector(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Four-dimensional dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Scales the quaternion to unit norm in place.
    ///
    /// If the squared norm is below `TOLERANCE²` the quaternion is reset to
    /// [`zero`](Self::zero) and `false` is returned. No error is raised.
    ///
    /// ```
    /// use gimbal_frames::Quaternion;
    ///
    /// let mut q = Quaternion::new(2.0, 0.0, 0.0, 0.0);
    /// assert!(q.normalize());
    /// assert_eq!(q, Quaternion::identity());
    ///
    /// let mut degenerate = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    /// assert!(!degenerate.normalize());
    /// assert!(degenerate.is_zero());
    /// ```
    pub fn normalize(&mut self) -> bool {
        let norm_sq = self.norm_squared();
        if norm_sq < T::squared_tolerance() {
            *self = Self::zero();
            return false;
        }
        let norm = norm_sq.sqrt();
        self.w = self.w / norm;
        self.x = self.x / norm;
        self.y = self.y / norm;
        self.z = self.z / norm;
        true
    }

    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Negates the vector part. For a unit quaternion this is the inverse.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Returns `true` if every component is within tolerance of zero.
    pub fn is_zero(&self) -> bool {
        approximately_zero(self.w)
            && approximately_zero(self.x)
            && approximately_zero(self.y)
            && approximately_zero(self.z)
    }

    /// Rotates `v` by this quaternion, assumed to be unit length.
    ///
    /// Uses the two-cross-product form `v + w t + u × t` with
    /// `t = 2 (u × v)`, which equals `q v q*` for unit `q`.
    pub fn rotate_vector(&self, v: Vector3<T>) -> Vector3<T> {
        let u = self.vector();
        let t = u.cross(&v) * T::cast(2.0);
        v + t * self.w + u.cross(&t)
    }
}

impl<T: Real> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Hamilton product. `a * b` applies `b` first when used as a rotation.
impl<T: Real> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }
}

impl<T: Real> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn about_z_90() -> Quaternion {
        Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2)
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Quaternion::<f64>::default(), Quaternion::identity());
        assert_eq!(Quaternion::<f32>::default().w, 1.0);
    }

    #[test]
    fn test_hamilton_units() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        let minus_one = Quaternion::new(-1.0, 0.0, 0.0, 0.0);

        assert_eq!(i * i, minus_one);
        assert_eq!(j * j, minus_one);
        assert_eq!(k * k, minus_one);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * j * k, minus_one);
    }

    #[test]
    fn test_normalize() {
        let mut q = Quaternion::<f64>::new(1.0, 1.0, 1.0, 1.0);
        assert!(q.normalize());
        assert!((q.norm() - 1.0).abs() < 1e-15);
        assert_eq!(q.w, 0.5);
    }

    #[test]
    fn test_normalize_zero_norm_is_sentinel() {
        let mut q = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert!(!q.normalize());
        assert_eq!(q, Quaternion::zero());

        let mut tiny = Quaternion::new(1e-11, 0.0, 0.0, 0.0);
        assert!(!tiny.normalize());
        assert!(tiny.is_zero());
    }

    #[test]
    fn test_conjugate_is_inverse_for_unit() {
        let q = Quaternion::<f64>::new(0.5, 0.5, -0.5, 0.5);
        let p = q * q.conjugate();
        assert!((p.w - 1.0).abs() < 1e-15);
        assert!(p.vector().is_zero());
    }

    #[test]
    fn test_rotate_vector() {
        let v = about_z_90().rotate_vector(Vector3::x_axis());
        assert!(v.approximately_equal(&Vector3::y_axis()));

        let back = about_z_90().conjugate().rotate_vector(v);
        assert!(back.approximately_equal(&Vector3::x_axis()));
    }

    #[test]
    fn test_rotate_vector_matches_sandwich_product() {
        let q = Quaternion::<f64>::new(0.9, 0.1, -0.3, 0.2).normalized();
        let v = Vector3::new(0.4, -1.2, 2.5);

        let sandwich = q * Quaternion::from_scalar_vector(0.0, v) * q.conjugate();
        let fast = q.rotate_vector(v);
        assert!(sandwich.w.abs() < 1e-14);
        assert!(fast.approximately_equal(&sandwich.vector()));
    }

    #[test]
    fn test_product_of_unit_quaternions_is_unit() {
        let a = Quaternion::<f64>::new(0.3, -0.2, 0.8, 0.1).normalized();
        let b = Quaternion::new(-0.6, 0.4, 0.2, 0.5).normalized();
        assert!(((a * b).norm() - 1.0).abs() < 1e-14);
    }
}
