//! 2x2 matrices for planar frames.

use super::Vector2;
use crate::angle::Angle;
use crate::real::Real;
use std::fmt;

/// A 2x2 matrix in row-major storage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix2<T = f64> {
    elements: [[T; 2]; 2],
}

impl<T: Real> Matrix2<T> {
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self {
            elements: [[o, z], [z, o]],
        }
    }

    pub fn from_array(elements: [[T; 2]; 2]) -> Self {
        Self { elements }
    }

    /// Counter-clockwise rotation by `angle`.
    ///
    /// ```
    /// use gimbal_core::{Angle, Matrix2, Vector2};
    ///
    /// let m = Matrix2::<f64>::rotation(Angle::from_degrees(90.0));
    /// let v = m * Vector2::x_axis();
    /// assert!((v.y - 1.0).abs() < 1e-15);
    /// ```
    pub fn rotation(angle: Angle<T>) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_array([[c, -s], [s, c]])
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.elements[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.elements[row][col] = value;
    }

    pub fn elements(&self) -> &[[T; 2]; 2] {
        &self.elements
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let a = &self.elements;
        let b = &other.elements;
        Self::from_array([
            [
                a[0][0] * b[0][0] + a[0][1] * b[1][0],
                a[0][0] * b[0][1] + a[0][1] * b[1][1],
            ],
            [
                a[1][0] * b[0][0] + a[1][1] * b[1][0],
                a[1][0] * b[0][1] + a[1][1] * b[1][1],
            ],
        ])
    }

    pub fn apply_to_vector(&self, v: Vector2<T>) -> Vector2<T> {
        let m = &self.elements;
        Vector2::new(m[0][0] * v.x + m[0][1] * v.y, m[1][0] * v.x + m[1][1] * v.y)
    }

    pub fn determinant(&self) -> T {
        let m = &self.elements;
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }

    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([[m[0][0], m[1][0]], [m[0][1], m[1][1]]])
    }
}

impl<T: Real> Default for Matrix2<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> std::ops::Mul for Matrix2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Real> std::ops::Mul<Vector2<T>> for Matrix2<T> {
    type Output = Vector2<T>;

    fn mul(self, vec: Vector2<T>) -> Vector2<T> {
        self.apply_to_vector(vec)
    }
}

impl<T> std::ops::Index<(usize, usize)> for Matrix2<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.elements[row][col]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Matrix2<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.elements[row][col]
    }
}

impl<T: Real> fmt::Display for Matrix2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix2:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9}]", row[0], row[1])?;
        }
        Ok(())
    }
}
