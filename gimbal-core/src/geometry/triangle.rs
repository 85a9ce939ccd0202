//! Triangles in the plane and in space.
//!
//! Sides are returned as vectors between vertices: `ab = b - a`,
//! `bc = c - b`, `ca = a - c`.

use crate::matrix::{Vector2, Vector3};
use crate::real::Real;

/// A planar triangle with vertices `a`, `b`, `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle2<T = f64> {
    pub a: Vector2<T>,
    pub b: Vector2<T>,
    pub c: Vector2<T>,
}

impl<T: Real> Triangle2<T> {
    pub fn new(a: Vector2<T>, b: Vector2<T>, c: Vector2<T>) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn ab(&self) -> Vector2<T> {
        self.b - self.a
    }

    #[inline]
    pub fn bc(&self) -> Vector2<T> {
        self.c - self.b
    }

    #[inline]
    pub fn ca(&self) -> Vector2<T> {
        self.a - self.c
    }

    /// Area with sign: positive when `a, b, c` wind counter-clockwise.
    pub fn signed_area(&self) -> T {
        self.ab().perp_dot(&(self.c - self.a)) / T::cast(2.0)
    }

    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    /// Intersection of the medians (the vertex average).
    ///
    /// ```
    /// use gimbal_core::{Triangle2, Vector2};
    ///
    /// let t = Triangle2::<f64>::new(Vector2::zeros(), Vector2::new(0.0, 1.0), Vector2::new(1.0, 0.0));
    /// let m = t.median_centre();
    /// assert!((m.x - 1.0 / 3.0).abs() < 1e-15);
    /// ```
    pub fn median_centre(&self) -> Vector2<T> {
        (self.a + self.b + self.c) / T::cast(3.0)
    }

    pub fn perimeter(&self) -> T {
        self.ab().magnitude() + self.bc().magnitude() + self.ca().magnitude()
    }
}

/// A triangle in 3D space with vertices `a`, `b`, `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle3<T = f64> {
    pub a: Vector3<T>,
    pub b: Vector3<T>,
    pub c: Vector3<T>,
}

impl<T: Real> Triangle3<T> {
    pub fn new(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn ab(&self) -> Vector3<T> {
        self.b - self.a
    }

    #[inline]
    pub fn bc(&self) -> Vector3<T> {
        self.c - self.b
    }

    #[inline]
    pub fn ca(&self) -> Vector3<T> {
        self.a - self.c
    }

    pub fn area(&self) -> T {
        self.ab().cross(&(self.c - self.a)).magnitude() / T::cast(2.0)
    }

    /// Unit normal following the right-hand rule over `a, b, c`.
    ///
    /// Collinear or coincident vertices give the zero vector.
    pub fn normal(&self) -> Vector3<T> {
        self.ab().cross(&(self.c - self.a)).normalized()
    }

    pub fn median_centre(&self) -> Vector3<T> {
        (self.a + self.b + self.c) / T::cast(3.0)
    }

    pub fn perimeter(&self) -> T {
        self.ab().magnitude() + self.bc().magnitude() + self.ca().magnitude()
    }
}
