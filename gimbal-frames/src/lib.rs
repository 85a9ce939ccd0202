//! Orientation and rigid-transform algebra.
//!
//! `gimbal-frames` builds rotations and coordinate frames on top of the
//! primitives in `gimbal-core`.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`quaternion`] | Raw [`Quaternion`] with Hamilton product and vector rotation |
//! | [`rotation`] | [`Rotation`], a quaternion with a lazy normalization state |
//! | [`euler`] | [`EulerAngles`] and their canonical form |
//! | [`position`] | [`Position3`] and [`Position2`] rigid transforms |
//!
//! # Chaining frames
//!
//! ```
//! use gimbal_frames::{Angle, Position3, Rotation, Vector3};
//!
//! let body = Position3::new(
//!     Vector3::new(10.0, 0.0, 0.0),
//!     Rotation::from_axis_angle(Vector3::z_axis(), Angle::from_degrees(90.0)),
//! );
//! let sensor = Position3::from_point(Vector3::new(0.0, 1.0, 0.0));
//!
//! // sensor origin in world space
//! let world = body.combine(&sensor).to_parent(Vector3::zeros());
//! assert!(world.approximately_equal(&Vector3::new(9.0, 0.0, 0.0)));
//! ```
//!
//! # Failure behaviour
//!
//! Degenerate input degrades instead of failing: a zero-length axis or a
//! zero-norm quaternion becomes the identity rotation, and each such fallback
//! emits a `tracing` event at `trace` level. The only errors are
//! [`Angle::arcsin`] / [`Angle::arccos`] outside their domain and
//! [`Rotation::from_matrix`] on a matrix that is not a rotation.

#![cfg_attr(feature = "strict", deny(warnings))]

pub mod euler;
pub mod position;
pub mod quaternion;
pub mod rotation;
#[cfg(feature = "serde")]
mod serde_;

pub use euler::EulerAngles;
pub use position::{Position2, Position3};
pub use quaternion::Quaternion;
pub use rotation::{Rotation, RotationState};

pub use gimbal_core::{
    Angle, GimbalError, GimbalResult, MathErrorKind, Matrix2, Matrix3, Real, Vector2, Vector3,
};
