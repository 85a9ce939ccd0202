//! 3D Cartesian vectors.
//!
//! [`Vector3`] is the point and direction type consumed by the rotation and
//! frame types: positions of frame origins, rotation axes, and the vectors that
//! get turned between frames.
//!
//! ```
//! use gimbal_core::Vector3;
//!
//! let a = Vector3::<f64>::x_axis();
//! let b = Vector3::y_axis();
//!
//! assert_eq!(a.dot(&b), 0.0);
//! assert_eq!(a.cross(&b), Vector3::z_axis());
//! ```
//!
//! # Normalization
//!
//! [`normalize`](Vector3::normalize) is fail-soft: a vector whose magnitude is
//! within tolerance of zero is left as the zero vector and the call reports
//! `false`. Rotation constructors use this signal to fall back to the identity
//! rotation when given a zero-length axis.
//!
//! ```
//! use gimbal_core::Vector3;
//!
//! let mut axis = Vector3::new(0.0, 3.0, 4.0);
//! assert!(axis.normalize());
//! assert_eq!(axis, Vector3::new(0.0, 0.6, 0.8));
//!
//! let mut degenerate = Vector3::<f64>::zeros();
//! assert!(!degenerate.normalize());
//! ```

use crate::compare::{approximately_equal, approximately_zero};
use crate::real::Real;
use crate::{GimbalError, GimbalResult, MathErrorKind};
use std::fmt;

/// A 3D Cartesian vector.
///
/// Components are public for direct access.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Real> Vector3<T> {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Returns the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// indexing syntax `v[i]` or the public fields directly.
    pub fn get(&self, index: usize) -> GimbalResult<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(index_error("Vector3::get", index)),
        }
    }

    /// Sets the component at the given index (0=x, 1=y, 2=z).
    pub fn set(&mut self, index: usize, value: T) -> GimbalResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(index_error("Vector3::set", index)),
        }
        Ok(())
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    #[inline]
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Returns the squared magnitude.
    ///
    /// Cheaper than [`magnitude`](Self::magnitude) when only comparing lengths.
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
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
        *self /= mag;
        true
    }

    /// Returns a unit vector pointing in the same direction, or the zero
    /// vector if this one is degenerate.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Returns `true` if every component is within tolerance of zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        approximately_zero(self.x) && approximately_zero(self.y) && approximately_zero(self.z)
    }

    /// Returns `true` if the magnitude is within tolerance of one.
    #[inline]
    pub fn is_unit(&self) -> bool {
        approximately_equal(self.magnitude(), T::one())
    }

    /// Computes the dot product with another vector.
    ///
    /// ```
    /// use gimbal_core::Vector3;
    ///
    /// let c = Vector3::new(1.0, 2.0, 3.0);
    /// let d = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(c.dot(&d), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector (right-hand rule).
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns `true` if every component matches `other` within tolerance.
    pub fn approximately_equal(&self, other: &Self) -> bool {
        approximately_equal(self.x, other.x)
            && approximately_equal(self.y, other.y)
            && approximately_equal(self.z, other.z)
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates a vector from an array.
    #[inline]
    pub fn from_array(arr: [T; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

fn index_error(operation: &str, index: usize) -> GimbalError {
    GimbalError::math_error(
        operation,
        MathErrorKind::InvalidInput,
        &format!("index {} out of bounds (valid range: 0-2)", index),
    )
}

/// Vector + Vector
impl<T: Real> std::ops::Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector - Vector
impl<T: Real> std::ops::Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Vector * scalar
impl<T: Real> std::ops::Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

macro_rules! scalar_times_vector3 {
    ($($t:ty),*) => {$(
        /// scalar * Vector
        impl std::ops::Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            fn mul(self, vec: Vector3<$t>) -> Vector3<$t> {
                vec * self
            }
        }
    )*};
}

scalar_times_vector3!(f32, f64);

/// Vector / scalar
impl<T: Real> std::ops::Div<T> for Vector3<T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl<T: Real> std::ops::AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> std::ops::SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> std::ops::MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, scalar: T) {
        *self = *self * scalar;
    }
}

/// Vector /= scalar
impl<T: Real> std::ops::DivAssign<T> for Vector3<T> {
    fn div_assign(&mut self, scalar: T) {
        self.x = self.x / scalar;
        self.y = self.y / scalar;
        self.z = self.z / scalar;
    }
}

/// -Vector
impl<T: Real> std::ops::Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl<T> std::ops::Index<usize> for Vector3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

/// v[i] = value mutable indexing (panics if i > 2)
impl<T> std::ops::IndexMut<usize> for Vector3<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl<T: Real> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
