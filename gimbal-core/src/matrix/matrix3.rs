//! 3x3 matrices.
//!
//! [`Matrix3`] is the matrix view handed out by rotations: `Rotation::matrix()`
//! returns the matrix that maps a vector in the local frame to the parent frame,
//! and `Rotation::inverse_matrix()` its transpose.
//!
//! # Storage Layout
//!
//! Elements are stored in row-major order as `[[T; 3]; 3]`. The element at row
//! `i`, column `j` is `matrix[(i, j)]` or `matrix.get(i, j)`. Multiplying a
//! column vector is the standard product:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! # Composition
//!
//! Matrix products compose right to left: `(b * a) * v` applies `a` first.
//!
//! ```
//! use gimbal_core::{Matrix3, Vector3};
//!
//! // 90 degrees counter-clockwise about Z.
//! let rz = Matrix3::from_array([
//!     [0.0, -1.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//! assert_eq!(rz * Vector3::x_axis(), Vector3::y_axis());
//! assert_eq!(rz.transpose() * Vector3::y_axis(), Vector3::x_axis());
//! assert!(rz.is_rotation_matrix(1e-14));
//! ```

use super::Vector3;
use crate::real::Real;
use std::fmt;

/// A 3x3 matrix in row-major storage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3<T = f64> {
    elements: [[T; 3]; 3],
}

impl<T: Real> Matrix3<T> {
    /// Creates the 3x3 identity matrix.
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self {
            elements: [[o, z, z], [z, o, z], [z, z, o]],
        }
    }

    /// Creates a matrix from a row-major array: `elements[i][j]` is row `i`,
    /// column `j`.
    ///
    /// This does not validate that the matrix is a proper rotation. Use
    /// [`is_rotation_matrix`](Self::is_rotation_matrix) to check if needed.
    pub fn from_array(elements: [[T; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Creates a matrix whose rows are the given vectors.
    pub fn from_rows(r0: Vector3<T>, r1: Vector3<T>, r2: Vector3<T>) -> Self {
        Self::from_array([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Returns the element at the specified row and column.
    ///
    /// Panics if `row >= 3` or `col >= 3`.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.elements[row][col]
    }

    /// Sets the element at the specified row and column.
    ///
    /// Panics if `row >= 3` or `col >= 3`.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.elements[row][col] = value;
    }

    /// Returns a reference to the underlying array.
    pub fn elements(&self) -> &[[T; 3]; 3] {
        &self.elements
    }

    /// Returns row `i` as a vector.
    pub fn row(&self, i: usize) -> Vector3<T> {
        Vector3::from_array(self.elements[i])
    }

    /// Returns column `j` as a vector.
    pub fn column(&self, j: usize) -> Vector3<T> {
        Vector3::new(self.elements[0][j], self.elements[1][j], self.elements[2][j])
    }

    /// Multiplies this matrix by another, returning `self * other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[T::zero(); 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell = *cell + self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// Computes the matrix-vector product `M * v`.
    pub fn apply_to_vector(&self, v: Vector3<T>) -> Vector3<T> {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Computes the determinant.
    ///
    /// A proper rotation has determinant +1; -1 indicates a reflection.
    pub fn determinant(&self) -> T {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the transpose. For a rotation matrix this is its inverse.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Checks whether this matrix is a proper rotation within `tolerance`:
    /// determinant +1 and `M * Mᵀ = I`.
    pub fn is_rotation_matrix(&self, tolerance: T) -> bool {
        if (self.determinant() - T::one()).abs() > tolerance {
            return false;
        }

        self.multiply(&self.transpose())
            .max_difference(&Self::identity())
            <= tolerance
    }

    /// Returns `true` if every element is finite.
    pub fn is_finite(&self) -> bool {
        self.elements.iter().flatten().all(|e| e.is_finite())
    }

    /// Returns the maximum absolute difference between corresponding elements.
    pub fn max_difference(&self, other: &Self) -> T {
        let mut max_diff = T::zero();

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }
}

impl<T: Real> Default for Matrix3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> std::ops::Mul for Matrix3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Real> std::ops::Mul<&Matrix3<T>> for &Matrix3<T> {
    type Output = Matrix3<T>;

    fn mul(self, rhs: &Matrix3<T>) -> Matrix3<T> {
        self.multiply(rhs)
    }
}

impl<T: Real> std::ops::Mul<Vector3<T>> for Matrix3<T> {
    type Output = Vector3<T>;

    fn mul(self, vec: Vector3<T>) -> Vector3<T> {
        self.apply_to_vector(vec)
    }
}

impl<T: Real> std::ops::Mul<Vector3<T>> for &Matrix3<T> {
    type Output = Vector3<T>;

    fn mul(self, vec: Vector3<T>) -> Vector3<T> {
        self.apply_to_vector(vec)
    }
}

impl<T> std::ops::Index<(usize, usize)> for Matrix3<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.elements[row][col]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Matrix3<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.elements[row][col]
    }
}

impl<T: Real> fmt::Display for Matrix3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rz(theta: f64) -> Matrix3 {
        let (s, c) = theta.sin_cos();
        Matrix3::from_array([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    fn rx(theta: f64) -> Matrix3 {
        let (s, c) = theta.sin_cos();
        Matrix3::from_array([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    #[test]
    fn test_identity_and_get() {
        let m = Matrix3::<f64>::identity();
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 1), 1.0);
        assert_eq!(m.get(2, 2), 1.0);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(Matrix3::<f64>::default(), m);
    }

    #[test]
    fn test_set_and_index() {
        let mut m = Matrix3::<f64>::identity();
        m.set(0, 1, 0.5);
        assert_eq!(m[(0, 1)], 0.5);
        m[(2, 0)] = -0.25;
        assert_eq!(m.get(2, 0), -0.25);
        assert_eq!(m.elements()[2][0], -0.25);
    }

    #[test]
    fn test_rows_and_columns() {
        let m = Matrix3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(m.row(1), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m.column(2), Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(m.transpose().row(2), m.column(2));
    }

    #[test]
    fn test_determinant() {
        let m = Matrix3::from_array([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 1.0]]);
        // 2*(3-2) - 0 + 1*(1-3) = 0
        assert_eq!(m.determinant(), 0.0);
        assert!((rz(0.3).determinant() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_multiply_composes_right_to_left() {
        let a = rx(0.4);
        let b = rz(1.1);
        let v = Vector3::new(0.3, -1.2, 2.0);
        let composed = (b * a) * v;
        let stepwise = b * (a * v);
        assert!(composed.approximately_equal(&stepwise));
        assert_eq!(&b * &a, b * a);
    }

    #[test]
    fn test_transpose_inverts_rotation() {
        let m = rz(0.5).multiply(&rx(0.3));
        let v = Vector3::new(1.0, 2.0, 3.0);
        let restored = m.transpose() * (m * v);
        assert!(restored.approximately_equal(&v));
        assert!((m * m.transpose()).max_difference(&Matrix3::identity()) < 1e-14);
    }

    #[test]
    fn test_is_rotation_matrix() {
        assert!(rz(0.5).is_rotation_matrix(1e-14));

        let scaled = Matrix3::from_array([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!scaled.is_rotation_matrix(1e-14));

        let sheared = Matrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!sheared.is_rotation_matrix(1e-14));

        let reflection =
            Matrix3::from_array([[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!reflection.is_rotation_matrix(1e-14));
    }

    #[test]
    fn test_is_finite() {
        let mut m = Matrix3::<f64>::identity();
        assert!(m.is_finite());
        m[(1, 2)] = f64::NAN;
        assert!(!m.is_finite());
    }

    #[test]
    fn test_max_difference() {
        let a = Matrix3::<f64>::identity();
        let b = Matrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!((a.max_difference(&b) - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_display() {
        let s = format!("{}", rz(0.1));
        assert!(s.contains("Matrix3:"));
        assert!(s.contains('['));
    }
}
