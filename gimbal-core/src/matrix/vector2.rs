//! 2D Cartesian vectors.
//!
//! [`Vector2`] mirrors [`Vector3`](super::Vector3) for planar frames. The 2D
//! analogue of the cross product is [`perp_dot`](Vector2::perp_dot), the z
//! component of the 3D cross product of the two vectors lifted into the plane.
//! Planar rotation is [`rotated`](Vector2::rotated), counter-clockwise for
//! positive angles.

use crate::angle::Angle;
use crate::compare::{approximately_equal, approximately_zero};
use crate::real::Real;
use crate::{GimbalError, GimbalResult, MathErrorKind};
use std::fmt;

/// A 2D Cartesian vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T: Real> Vector2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero())
    }

    #[inline]
    pub fn x_axis() -> Self {
        Self::new(T::one(), T::zero())
    }

    #[inline]
    pub fn y_axis() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Component at `index` (0=x, 1=y), or `InvalidInput` past the end.
    pub fn get(&self, index: usize) -> GimbalResult<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(index_error("Vector2::get", index)),
        }
    }

    pub fn set(&mut self, index: usize, value: T) -> GimbalResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(index_error("Vector2::set", index)),
        }
        Ok(())
    }

    #[inline]
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Scales the vector to unit length in place.
    ///
    /// Returns `false` and sets the vector to zero if its magnitude is within
    /// tolerance of zero.
    pub fn normalize(&mut self) -> bool {
        let mag = self.magnitude();
        if approximately_zero(mag) {
            *self = Self::zeros();
            return false;
        }
        self.x = self.x / mag;
        self.y = self.y / mag;
        true
    }

    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        approximately_zero(self.x) && approximately_zero(self.y)
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        approximately_equal(self.magnitude(), T::one())
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Returns `self.x * other.y - self.y * other.x`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Returns the vector rotated counter-clockwise by `angle`.
    ///
    /// ```
    /// use gimbal_core::{Angle, Vector2};
    ///
    /// let v = Vector2::<f64>::x_axis().rotated(Angle::from_degrees(90.0));
    /// assert!(v.x.abs() < 1e-15);
    /// assert!((v.y - 1.0).abs() < 1e-15);
    /// ```
    pub fn rotated(&self, angle: Angle<T>) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c * self.x - s * self.y, s * self.x + c * self.y)
    }

    pub fn approximately_equal(&self, other: &Self) -> bool {
        approximately_equal(self.x, other.x) && approximately_equal(self.y, other.y)
    }

    #[inline]
    pub fn to_array(&self) -> [T; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn from_array(arr: [T; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }
}

fn index_error(operation: &str, index: usize) -> GimbalError {
    GimbalError::math_error(
        operation,
        MathErrorKind::InvalidInput,
        &format!("index {} out of bounds (valid range: 0-1)", index),
    )
}

impl<T: Real> std::ops::Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Real> std::ops::Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Real> std::ops::Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

macro_rules! scalar_times_vector2 {
    ($($t:ty),*) => {$(
        impl std::ops::Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;

            fn mul(self, vec: Vector2<$t>) -> Vector2<$t> {
                vec * self
            }
        }
    )*};
}

scalar_times_vector2!(f32, f64);

impl<T: Real> std::ops::Div<T> for Vector2<T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl<T: Real> std::ops::AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> std::ops::SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> std::ops::MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, scalar: T) {
        *self = *self * scalar;
    }
}

impl<T: Real> std::ops::DivAssign<T> for Vector2<T> {
    fn div_assign(&mut self, scalar: T) {
        *self = *self / scalar;
    }
}

impl<T: Real> std::ops::Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// v[i] indexing (panics if i > 1)
impl<T> std::ops::Index<usize> for Vector2<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of bounds: {}", index),
        }
    }
}

impl<T> std::ops::IndexMut<usize> for Vector2<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2 index out of bounds: {}", index),
        }
    }
}

impl<T: Real> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({:.9}, {:.9})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 5.0);
        assert_eq!(a + b, Vector2::new(4.0, 7.0));
        assert_eq!(b - a, Vector2::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vector2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vector2::new(1.5, 2.5));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        c -= Vector2::new(1.0, 1.0);
        assert_eq!(c, Vector2::new(3.0, 6.0));
        c *= 2.0;
        assert_eq!(c, Vector2::new(6.0, 12.0));
        c /= 4.0;
        assert_eq!(c, Vector2::new(1.5, 3.0));
    }

    #[test]
    fn test_get_set() {
        let mut v = Vector2::new(1.0, 2.0);
        assert_eq!(v.get(0).unwrap(), 1.0);
        assert_eq!(v.get(1).unwrap(), 2.0);
        v.set(1, -7.5).unwrap();
        assert_eq!(v, Vector2::new(1.0, -7.5));

        let err = v.get(2).unwrap_err();
        assert!(err.to_string().contains("index 2 out of bounds"));
        let err = v.set(3, 0.0).unwrap_err();
        assert!(matches!(
            err,
            GimbalError::MathError {
                kind: MathErrorKind::InvalidInput,
                ..
            }
        ));
        assert_eq!(v, Vector2::new(1.0, -7.5));
    }

    #[test]
    fn test_dot_and_perp_dot() {
        let x = Vector2::<f64>::x_axis();
        let y = Vector2::<f64>::y_axis();
        assert_eq!(x.dot(&y), 0.0);
        assert_eq!(x.perp_dot(&y), 1.0);
        assert_eq!(y.perp_dot(&x), -1.0);
    }

    #[test]
    fn test_normalize() {
        let mut v = Vector2::new(3.0, 4.0);
        assert!(v.normalize());
        assert_eq!(v, Vector2::new(0.6, 0.8));
        assert!(v.is_unit());

        let mut zero = Vector2::<f64>::zeros();
        assert!(!zero.normalize());
        assert!(zero.is_zero());
    }

    #[test]
    fn test_rotated() {
        let v = Vector2::new(1.0, 0.0).rotated(Angle::from_degrees(180.0));
        assert!(v.approximately_equal(&Vector2::new(-1.0, 0.0)));

        let w = Vector2::<f64>::new(2.0, 1.0);
        let back = w
            .rotated(Angle::from_radians(0.7))
            .rotated(Angle::from_radians(-0.7));
        assert!(back.approximately_equal(&w));
        assert!((w.rotated(Angle::from_radians(1.1)).magnitude() - w.magnitude()).abs() < 1e-14);
    }

    #[test]
    fn test_indexing() {
        let mut v = Vector2::new(1.0, 2.0);
        v[0] = 5.0;
        assert_eq!(v[0], 5.0);
        assert_eq!(v.to_array(), [5.0, 2.0]);
        assert_eq!(Vector2::from_array([5.0, 2.0]), v);
    }

    #[test]
    #[should_panic(expected = "Vector2 index out of bounds: 2")]
    fn test_index_panic() {
        let v = Vector2::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn test_display() {
        let s = format!("{}", Vector2::new(0.5, -0.25));
        assert_eq!(s, "Vector2(0.500000000, -0.250000000)");
    }
}
