//! Rigid transforms: a point plus an orientation.
//!
//! A position describes a local frame relative to its parent. `point` is the
//! local origin expressed in the parent frame and `orientation` turns local
//! directions into parent directions.
//!
//! - [`Position3`]: 3D frame with a [`Rotation`](crate::Rotation)
//! - [`Position2`]: planar frame with an [`Angle`](crate::Angle)
//!
//! Both form a group under [`combine`](Position3::combine): it is associative,
//! [`identity`](Position3::identity) is neutral, and every position has an
//! [`inverted`](Position3::inverted) counterpart. It is not commutative.

mod position2;
mod position3;

pub use position2::Position2;
pub use position3::Position3;
