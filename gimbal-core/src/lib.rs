//! Numeric building blocks for rigid-body orientation math.
//!
//! `gimbal-core` holds the value types that the orientation algebra in
//! `gimbal-frames` is written against: a radian [`Angle`], 2D/3D vectors and
//! matrices, a couple of triangle primitives, and the tolerance policy that
//! decides when a quantity counts as zero.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Angle type, periodic normalization, domain-checked inverse trig |
//! | [`matrix`] | [`Vector2`], [`Vector3`], [`Matrix2`], [`Matrix3`] |
//! | [`geometry`] | [`Triangle2`] and [`Triangle3`] |
//! | [`compare`] | Epsilon-aware scalar comparison |
//! | [`real`] | The [`Real`] scalar trait (`f32` / `f64`) |
//! | [`errors`] | [`GimbalError`] and [`GimbalResult`] |
//!
//! # Re-exports
//!
//! ```
//! use gimbal_core::{Angle, Matrix2, Matrix3, Vector2, Vector3};
//! use gimbal_core::{GimbalError, GimbalResult, MathErrorKind, Real};
//! ```
//!
//! # Design Notes
//!
//! - **Radians internally**: every angle is stored in radians. Degrees and
//!   gradians exist only at construction and display.
//!
//! - **Generic precision**: each type takes a scalar parameter that defaults
//!   to `f64`. `f32` instances use the looser [`Real::TOLERANCE`] of `1e-5`.
//!
//! - **Fail-soft degeneracy**: normalizing a zero vector yields the zero
//!   vector and reports `false`. Only inverse trigonometry outside its domain
//!   and structurally invalid input are errors.

#![cfg_attr(feature = "strict", deny(warnings))]

pub mod angle;
pub mod compare;
pub mod errors;
pub mod geometry;
pub mod matrix;
pub mod real;

pub use angle::Angle;
pub use errors::{GimbalError, GimbalResult, MathErrorKind};
pub use geometry::{Triangle2, Triangle3};
pub use matrix::{Matrix2, Matrix3, Vector2, Vector3};
pub use real::Real;

pub mod test_helpers;
