//! Vectors and matrices for planar and spatial frames.
//!
//! - [`Vector2`] / [`Vector3`]: Cartesian vectors
//! - [`Matrix2`] / [`Matrix3`]: row-major square matrices

mod matrix2;
mod matrix3;
mod vector2;
mod vector3;

pub use matrix2::Matrix2;
pub use matrix3::Matrix3;
pub use vector2::Vector2;
pub use vector3::Vector3;
