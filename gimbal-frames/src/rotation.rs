//! Rotations with lazily validated quaternions.
//!
//! A [`Rotation`] wraps a [`Quaternion`] together with a [`RotationState`]
//! tag recording what is known about it:
//!
//! | State | Meaning |
//! |-------|---------|
//! | `NotNormalized` | Built from raw components or a difference; unchecked |
//! | `Identity` | Unit quaternion within tolerance of `(1, 0, 0, 0)` |
//! | `Turn` | Unit quaternion, not the identity |
//!
//! Construction from an axis and angle or from Euler angles goes straight to
//! `Identity` or `Turn`. Raw components start as `NotNormalized` and are
//! validated by [`normalize`](Rotation::normalize). Every read accessor works
//! on a normalized view, so the tag never leaks an unchecked quaternion.
//!
//! The `Identity` tag short-circuits composition and vector rotation: the
//! other operand is returned unchanged instead of going through a Hamilton
//! product.
//!
//! # Composition
//!
//! `a.combine(&b)` is the quaternion product `a * b`. Applied to a vector it
//! turns by `b` first, then by `a`, which is how a child frame `b` expressed
//! in a parent frame `a` composes.
//!
//! ```
//! use gimbal_frames::{Angle, Rotation, Vector3};
//!
//! let yaw = Rotation::from_axis_angle(Vector3::z_axis(), Angle::from_degrees(90.0));
//! let pitch = Rotation::from_axis_angle(Vector3::y_axis(), Angle::from_degrees(90.0));
//!
//! // pitch first (x -> -z), then yaw leaves -z alone
//! let v = yaw.combine(&pitch).turn(Vector3::x_axis());
//! assert!(v.approximately_equal(&Vector3::new(0.0, 0.0, -1.0)));
//! ```

use gimbal_core::compare::{approximately_equal, approximately_zero};
use gimbal_core::{Angle, GimbalError, GimbalResult, MathErrorKind, Matrix3, Real, Vector3};
use std::ops::Mul;
use tracing::{debug, trace};

use crate::euler::EulerAngles;
use crate::quaternion::Quaternion;

/// What is known about the quaternion inside a [`Rotation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationState {
    NotNormalized,
    Identity,
    Turn,
}

/// A 3D rotation backed by a unit quaternion.
///
/// `Default` is the identity rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation<T = f64> {
    pub(crate) quaternion: Quaternion<T>,
    state: RotationState,
}

impl<T: Real> Rotation<T> {
    /// The rotation that leaves every vector unchanged.
    pub fn identity() -> Self {
        Self {
            quaternion: Quaternion::identity(),
            state: RotationState::Identity,
        }
    }

    /// Wraps a raw quaternion. It is validated on first use.
    pub fn from_quaternion(quaternion: Quaternion<T>) -> Self {
        Self {
            quaternion,
            state: RotationState::NotNormalized,
        }
    }

    /// Wraps raw quaternion components `(w, x, y, z)`.
    pub fn from_components(w: T, x: T, y: T, z: T) -> Self {
        Self::from_quaternion(Quaternion::new(w, x, y, z))
    }

    fn turn_from_unit(quaternion: Quaternion<T>) -> Self {
        Self {
            quaternion,
            state: RotationState::Turn,
        }
    }

    /// Rotation by `angle` about `axis` (right-hand rule).
    ///
    /// The axis does not have to be unit length. A zero-length axis, or an
    /// angle whose half-angle sine is within tolerance of zero, yields the
    /// identity.
    ///
    /// ```
    /// use gimbal_frames::{Angle, Rotation, RotationState, Vector3};
    ///
    /// let r = Rotation::from_axis_angle(Vector3::new(0.0, 0.0, 3.0), Angle::from_degrees(90.0));
    /// assert_eq!(r.state(), RotationState::Turn);
    /// assert!(r.turn(Vector3::x_axis()).approximately_equal(&Vector3::y_axis()));
    ///
    /// let none = Rotation::from_axis_angle(Vector3::zeros(), Angle::from_degrees(90.0));
    /// assert!(none.is_identity());
    /// ```
    pub fn from_axis_angle(axis: Vector3<T>, angle: Angle<T>) -> Self {
        let (s, c) = (angle / T::cast(2.0)).sin_cos();
        if approximately_zero(s) {
            trace!(angle = angle.radians().as_f64(), "rotation angle too small, using identity");
            return Self::identity();
        }

        let mut unit_axis = axis;
        if !unit_axis.normalize() {
            trace!("zero-length rotation axis, using identity");
            return Self::identity();
        }

        Self::turn_from_unit(Quaternion::from_scalar_vector(c, unit_axis * s))
    }

    /// Rotation from heading (about z), elevation (about y) and bank (about
    /// x), applied in that order in the body frame.
    pub fn from_heading_elevation_bank(heading: Angle<T>, elevation: Angle<T>, bank: Angle<T>) -> Self {
        let two = T::cast(2.0);
        let (sh, ch) = (heading / two).sin_cos();
        let (se, ce) = (elevation / two).sin_cos();
        let (sb, cb) = (bank / two).sin_cos();

        let quaternion = Quaternion::new(
            ch * ce * cb + sh * se * sb,
            ch * ce * sb - sh * se * cb,
            ch * se * cb + sh * ce * sb,
            sh * ce * cb - ch * se * sb,
        );

        if quaternion.vector().is_zero() {
            trace!("euler angles describe no rotation, using identity");
            return Self::identity();
        }

        Self::turn_from_unit(quaternion)
    }

    /// Rotation described by a set of Euler angles.
    pub fn from_euler_angles(angles: &EulerAngles<T>) -> Self {
        Self::from_heading_elevation_bank(angles.heading, angles.elevation, angles.bank)
    }

    /// Extracts the rotation from a proper rotation matrix (Shepperd's
    /// method).
    ///
    /// # Errors
    ///
    /// [`MathErrorKind::NotFinite`] if any element is NaN or infinite, and
    /// [`MathErrorKind::InvalidInput`] if the matrix is not orthonormal with
    /// determinant +1 to within `sqrt(TOLERANCE)`.
    pub fn from_matrix(m: &Matrix3<T>) -> GimbalResult<Self> {
        if !m.is_finite() {
            debug!("rejecting non-finite rotation matrix");
            return Err(GimbalError::math_error(
                "Rotation::from_matrix",
                MathErrorKind::NotFinite,
                "matrix contains NaN or infinite elements",
            ));
        }
        if !m.is_rotation_matrix(T::TOLERANCE.sqrt()) {
            debug!(determinant = m.determinant().as_f64(), "rejecting non-rotation matrix");
            return Err(GimbalError::math_error(
                "Rotation::from_matrix",
                MathErrorKind::InvalidInput,
                "matrix is not a proper rotation",
            ));
        }

        let one = T::one();
        let half = T::cast(0.5);
        let quarter = T::cast(0.25);
        let diagonal = m[(0, 0)] + m[(1, 1)] + m[(2, 2)];

        let quaternion = if diagonal > T::zero() {
            let s = (diagonal + one).sqrt();
            let k = half / s;
            Quaternion::new(
                s * half,
                (m[(2, 1)] - m[(1, 2)]) * k,
                (m[(0, 2)] - m[(2, 0)]) * k,
                (m[(1, 0)] - m[(0, 1)]) * k,
            )
        } else if m[(0, 0)] >= m[(1, 1)] && m[(0, 0)] >= m[(2, 2)] {
            let s = ((one + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]) * quarter).sqrt();
            let k = quarter / s;
            Quaternion::new(
                (m[(2, 1)] - m[(1, 2)]) * k,
                s,
                (m[(0, 1)] + m[(1, 0)]) * k,
                (m[(0, 2)] + m[(2, 0)]) * k,
            )
        } else if m[(1, 1)] >= m[(2, 2)] {
            let s = ((one - m[(0, 0)] + m[(1, 1)] - m[(2, 2)]) * quarter).sqrt();
            let k = quarter / s;
            Quaternion::new(
                (m[(0, 2)] - m[(2, 0)]) * k,
                (m[(0, 1)] + m[(1, 0)]) * k,
                s,
                (m[(1, 2)] + m[(2, 1)]) * k,
            )
        } else {
            let s = ((one - m[(0, 0)] - m[(1, 1)] + m[(2, 2)]) * quarter).sqrt();
            let k = quarter / s;
            Quaternion::new(
                (m[(1, 0)] - m[(0, 1)]) * k,
                (m[(0, 2)] + m[(2, 0)]) * k,
                (m[(1, 2)] + m[(2, 1)]) * k,
                s,
            )
        };

        Ok(Self::from_quaternion(quaternion))
    }

    /// The current state tag, without normalizing.
    #[inline]
    pub fn state(&self) -> RotationState {
        self.state
    }

    /// Validates the quaternion in place.
    ///
    /// No-op unless the state is `NotNormalized`. A quaternion with zero norm
    /// becomes the identity. Otherwise it is scaled to unit length and tagged
    /// `Identity` if `w` is within tolerance of 1, `Turn` if not.
    pub fn normalize(&mut self) {
        if self.state != RotationState::NotNormalized {
            return;
        }

        if !self.quaternion.normalize() {
            trace!("zero-norm quaternion, using identity");
            *self = Self::identity();
            return;
        }

        self.state = RotationState::Turn;
        self.collapse_identity();
    }

    /// Returns a validated copy.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    fn collapse_identity(&mut self) {
        if approximately_equal(self.quaternion.w, T::one()) {
            *self = Self::identity();
        }
    }

    /// Returns `true` if this is the identity rotation.
    pub fn is_identity(&self) -> bool {
        self.normalized().state == RotationState::Identity
    }

    /// The validated unit quaternion.
    pub fn quaternion(&self) -> Quaternion<T> {
        self.normalized().quaternion
    }

    /// Composes two rotations: `self * second`, turning by `second` first.
    ///
    /// If either operand is the identity the other is returned unchanged.
    pub fn combine(&self, second: &Self) -> Self {
        let first = self.normalized();
        let second = second.normalized();

        if first.state == RotationState::Identity {
            return second;
        }
        if second.state == RotationState::Identity {
            return first;
        }

        let mut combined = Self::turn_from_unit(first.quaternion * second.quaternion);
        combined.collapse_identity();
        combined
    }

    /// Inverts the rotation in place.
    pub fn invert(&mut self) {
        if self.state == RotationState::Identity {
            return;
        }
        self.quaternion = self.quaternion.conjugate();
    }

    #[inline]
    pub fn inverted(mut self) -> Self {
        self.invert();
        self
    }

    /// The rotation that takes `other` to `self`: `conj(other) * self`.
    ///
    /// The product is left `NotNormalized` and is validated on first read.
    pub fn difference_with(&self, other: &Self) -> Self {
        let a = self.normalized();
        let b = other.normalized();
        Self::from_quaternion(b.quaternion.conjugate() * a.quaternion)
    }

    /// Rotation angle in `[0, 2π]`.
    ///
    /// The sign of the quaternion is not canonicalized, so a rotation built
    /// as 270° about +z reports 270° rather than 90° about -z.
    pub fn angle(&self) -> Angle<T> {
        let n = self.normalized();
        if n.state == RotationState::Identity {
            return Angle::zero();
        }
        let w = n.quaternion.w.max(-T::one()).min(T::one());
        Angle::from_radians(T::cast(2.0) * w.acos())
    }

    /// Unit rotation axis, or the zero vector for the identity.
    pub fn axis(&self) -> Vector3<T> {
        let n = self.normalized();
        if n.state == RotationState::Identity {
            return Vector3::zeros();
        }
        n.quaternion.vector().normalized()
    }

    /// [`axis`](Self::axis) and [`angle`](Self::angle) together.
    pub fn axis_angle(&self) -> (Vector3<T>, Angle<T>) {
        (self.axis(), self.angle())
    }

    /// Heading, elevation and bank, normalized.
    ///
    /// Near elevation ±90° heading and bank are individually unstable; only
    /// their combined effect is meaningful. Once `sin(elevation)` is within a
    /// few machine epsilons of ±1 the rotation is treated as locked: bank is
    /// reported as zero and heading carries the combined turn.
    pub fn euler_angles(&self) -> EulerAngles<T> {
        let n = self.normalized();
        if n.state == RotationState::Identity {
            return EulerAngles::default();
        }

        let Quaternion { w, x, y, z } = n.quaternion;
        let one = T::one();
        let two = T::cast(2.0);

        let sin_elevation = (two * (w * y - z * x)).max(-one).min(one);
        let elevation = Angle::from_radians(sin_elevation.asin());

        // Rounding in sin_elevation is a few ulps, so inside this band the
        // off-pole terms below are pure noise.
        if one - sin_elevation.abs() <= T::epsilon() * T::cast(4.0) {
            // Locked: only heading - bank (or heading + bank) is defined, so
            // bank is pinned to zero and heading carries the whole turn.
            trace!("gimbal lock, folding bank into heading");
            let heading = Angle::arctan2(two * (w * z - x * y), one - two * (x * x + z * z));
            return EulerAngles::new(heading, elevation, Angle::zero()).normalized();
        }

        let heading = Angle::arctan2(two * (w * z + x * y), one - two * (y * y + z * z));
        let bank = Angle::arctan2(two * (w * x + y * z), one - two * (x * x + y * y));

        EulerAngles::new(heading, elevation, bank).normalized()
    }

    /// Matrix mapping local vectors to the parent frame.
    pub fn matrix(&self) -> Matrix3<T> {
        let n = self.normalized();
        if n.state == RotationState::Identity {
            return Matrix3::identity();
        }

        let Quaternion { w, x, y, z } = n.quaternion;
        let one = T::one();
        let two = T::cast(2.0);

        Matrix3::from_array([
            [
                one - two * (y * y + z * z),
                two * (x * y - w * z),
                two * (x * z + w * y),
            ],
            [
                two * (x * y + w * z),
                one - two * (x * x + z * z),
                two * (y * z - w * x),
            ],
            [
                two * (x * z - w * y),
                two * (y * z + w * x),
                one - two * (x * x + y * y),
            ],
        ])
    }

    /// Matrix mapping parent vectors to the local frame (the transpose of
    /// [`matrix`](Self::matrix)).
    pub fn inverse_matrix(&self) -> Matrix3<T> {
        self.matrix().transpose()
    }

    /// Rotates `v` from the local frame into the parent frame.
    pub fn turn(&self, v: Vector3<T>) -> Vector3<T> {
        let n = self.normalized();
        if n.state == RotationState::Identity {
            return v;
        }
        n.quaternion.rotate_vector(v)
    }

    /// Rotates `v` from the parent frame into the local frame.
    pub fn turn_backward(&self, v: Vector3<T>) -> Vector3<T> {
        let n = self.normalized();
        if n.state == RotationState::Identity {
            return v;
        }
        n.quaternion.conjugate().rotate_vector(v)
    }

    /// Returns `true` if the rotation taking `other` to `self` turns by less
    /// than `TOLERANCE` radians. `q` and `-q` compare equal.
    pub fn approximately_equal(&self, other: &Self) -> bool {
        // |vector part| of the difference is sin(angle / 2), which stays
        // accurate for tiny angles where 1 - |q1 . q2| does not.
        let delta = other.quaternion().conjugate() * self.quaternion();
        approximately_zero(T::cast(2.0) * delta.vector().magnitude())
    }
}

impl<T: Real> Default for Rotation<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> From<Quaternion<T>> for Rotation<T> {
    fn from(quaternion: Quaternion<T>) -> Self {
        Self::from_quaternion(quaternion)
    }
}

impl<T: Real> From<EulerAngles<T>> for Rotation<T> {
    fn from(angles: EulerAngles<T>) -> Self {
        Self::from_euler_angles(&angles)
    }
}

impl<T: Real> Mul for Rotation<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}

impl<T: Real> Mul<Vector3<T>> for Rotation<T> {
    type Output = Vector3<T>;

    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.turn(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gimbal_core::test_helpers::{assert_near, assert_vector3_near};

    fn deg(d: f64) -> Angle {
        Angle::from_degrees(d)
    }

    fn sample() -> Rotation {
        Rotation::from_axis_angle(Vector3::new(1.0, -2.0, 0.5), deg(73.0))
    }

    /// How far a test vector lands from where it should after the rotation
    /// goes through Euler angles and back.
    fn euler_round_trip_error<T: Real>(heading: T, elevation: T, bank: T) -> T {
        let r = Rotation::from_euler_angles(&EulerAngles::from_degrees(heading, elevation, bank));
        let back = Rotation::from_euler_angles(&r.euler_angles());
        let v = Vector3::new(T::cast(0.3), T::cast(-0.8), T::cast(1.1));
        (back.turn(v) - r.turn(v)).magnitude()
    }

    #[test]
    fn test_identity() {
        let r = Rotation::<f64>::identity();
        assert_eq!(r.state(), RotationState::Identity);
        assert_eq!(r.angle().radians(), 0.0);
        assert!(r.axis().is_zero());
        assert_eq!(r.matrix(), Matrix3::identity());
        assert_eq!(Rotation::<f64>::default(), r);
    }

    #[test]
    fn test_axis_angle_round_trip() {
        let r = sample();
        assert_eq!(r.state(), RotationState::Turn);
        assert_near(r.angle().degrees(), 73.0, 1e-10, "angle");
        let expected = Vector3::new(1.0, -2.0, 0.5).normalized();
        assert_vector3_near(r.axis(), expected, 1e-12, "axis");
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let r = Rotation::from_axis_angle(Vector3::x_axis(), deg(0.0));
        assert_eq!(r.state(), RotationState::Identity);
    }

    #[test]
    fn test_raw_components_start_unnormalized() {
        let r = Rotation::from_components(2.0, 0.0, 0.0, 2.0);
        assert_eq!(r.state(), RotationState::NotNormalized);
        assert_near(r.angle().degrees(), 90.0, 1e-10, "angle");
        assert_eq!(r.state(), RotationState::NotNormalized);

        let n = r.normalized();
        assert_eq!(n.state(), RotationState::Turn);
        assert_near(n.quaternion().norm(), 1.0, 1e-15, "norm");
    }

    #[test]
    fn test_normalize_zero_quaternion_is_identity() {
        let mut r = Rotation::from_components(0.0, 0.0, 0.0, 0.0);
        r.normalize();
        assert_eq!(r.state(), RotationState::Identity);
        assert_eq!(r.quaternion(), Quaternion::identity());
    }

    #[test]
    fn test_normalize_collapses_near_identity() {
        let mut r = Rotation::from_components(3.0, 0.0, 0.0, 1e-12);
        r.normalize();
        assert_eq!(r.state(), RotationState::Identity);
    }

    #[test]
    fn test_negative_identity_is_a_turn() {
        let mut r = Rotation::from_components(-1.0, 0.0, 0.0, 0.0);
        r.normalize();
        assert_eq!(r.state(), RotationState::Turn);
        assert!(r.turn(Vector3::x_axis()).approximately_equal(&Vector3::x_axis()));
    }

    #[test]
    fn test_combine_with_identity_returns_operand() {
        let r = sample();
        let id = Rotation::identity();
        assert_eq!(r.combine(&id), r);
        assert_eq!(id.combine(&r), r);
    }

    #[test]
    fn test_combine_with_inverse_is_identity() {
        let r = sample();
        let c = r.combine(&r.inverted());
        assert_eq!(c.state(), RotationState::Identity);
        assert_eq!(c.angle().radians(), 0.0);
    }

    #[test]
    fn test_combine_order() {
        let yaw = Rotation::from_axis_angle(Vector3::z_axis(), deg(90.0));
        let roll = Rotation::from_axis_angle(Vector3::x_axis(), deg(90.0));

        // roll first: y -> z, yaw keeps z
        let v = yaw.combine(&roll).turn(Vector3::y_axis());
        assert_vector3_near(v, Vector3::z_axis(), 1e-14, "yaw * roll");

        // yaw first: y -> -x, roll keeps x
        let w = roll.combine(&yaw).turn(Vector3::y_axis());
        assert_vector3_near(w, -Vector3::x_axis(), 1e-14, "roll * yaw");

        assert_eq!((yaw * roll).turn(Vector3::y_axis()), v);
    }

    #[test]
    fn test_invert_identity_is_noop() {
        let mut id = Rotation::<f64>::identity();
        id.invert();
        assert_eq!(id, Rotation::identity());
    }

    #[test]
    fn test_difference_with() {
        let a = sample();
        let b = Rotation::from_axis_angle(Vector3::y_axis(), deg(-20.0));
        let d = a.difference_with(&b);
        assert_eq!(d.state(), RotationState::NotNormalized);
        assert!(b.combine(&d).approximately_equal(&a));

        let same = a.difference_with(&a);
        assert_eq!(same.state(), RotationState::NotNormalized);
        assert!(same.is_identity());
    }

    #[test]
    fn test_turn_matches_matrix() {
        let r = sample();
        let v = Vector3::new(0.3, 1.7, -2.2);
        assert_vector3_near(r.turn(v), r.matrix() * v, 1e-14, "turn");
        assert_vector3_near(r.turn_backward(v), r.inverse_matrix() * v, 1e-14, "turn_backward");
        assert_vector3_near(r.turn_backward(r.turn(v)), v, 1e-14, "round trip");
        assert!(r.matrix().is_rotation_matrix(1e-14));
    }

    #[test]
    fn test_euler_extraction() {
        let e = EulerAngles::from_degrees(30.0, 20.0, -10.0);
        let got = Rotation::from_euler_angles(&e).euler_angles();
        assert_near(got.heading.degrees(), 30.0, 1e-10, "heading");
        assert_near(got.elevation.degrees(), 20.0, 1e-10, "elevation");
        assert_near(got.bank.degrees(), -10.0, 1e-10, "bank");
    }

    #[test]
    fn test_euler_extraction_at_pole() {
        let e = EulerAngles::from_degrees(50.0, 90.0, 20.0);
        let r = Rotation::from_euler_angles(&e);
        let got = r.euler_angles();
        assert_near(got.elevation.degrees(), 90.0, 1e-5, "elevation");

        let v = Vector3::new(0.4, -0.3, 0.9);
        let back = Rotation::from_euler_angles(&got);
        assert_vector3_near(back.turn(v), r.turn(v), 1e-6, "pole round trip");
    }

    #[test]
    fn test_euler_extraction_one_ulp_off_the_pole() {
        // sin(elevation) comes out as -0.9999999999999999 here, not -1
        let err = euler_round_trip_error(-174.63, -90.0, 174.89);
        assert!(err < 1e-6, "f64 error {}", err);
        let got = Rotation::from_euler_angles(&EulerAngles::from_degrees(-174.63, -90.0, 174.89))
            .euler_angles();
        assert_near(got.elevation.degrees(), -90.0, 1e-5, "elevation");
        assert_eq!(got.bank.radians(), 0.0);

        let err32 = euler_round_trip_error(-174.63_f32, -90.0, 174.89);
        assert!(err32 < 1e-2, "f32 error {}", err32);
    }

    #[test]
    fn test_euler_round_trip_sweep_near_poles() {
        let elevations = [
            90.0,
            -90.0,
            90.0 - 1e-7,
            -90.0 + 1e-7,
            90.0 - 1e-5,
            -90.0 + 1e-5,
        ];
        for elevation in elevations {
            for i in 0..29 {
                for j in 0..23 {
                    let heading = -179.37 + 12.71 * i as f64;
                    let bank = 178.9 - 15.83 * j as f64;
                    let err = euler_round_trip_error(heading, elevation, bank);
                    assert!(err < 1e-6, "f64 ({}, {}, {}): {}", heading, elevation, bank, err);

                    let err32 = euler_round_trip_error(heading as f32, elevation as f32, bank as f32);
                    assert!(err32 < 1e-2, "f32 ({}, {}, {}): {}", heading, elevation, bank, err32);
                }
            }
        }
    }

    #[test]
    fn test_heading_only_matches_axis_angle() {
        let by_euler = Rotation::from_heading_elevation_bank(deg(40.0), deg(0.0), deg(0.0));
        let by_axis = Rotation::from_axis_angle(Vector3::z_axis(), deg(40.0));
        assert!(by_euler.approximately_equal(&by_axis));

        let pitch = Rotation::from_heading_elevation_bank(deg(0.0), deg(40.0), deg(0.0));
        assert!(pitch.approximately_equal(&Rotation::from_axis_angle(Vector3::y_axis(), deg(40.0))));
    }

    #[test]
    fn test_from_matrix() {
        let r = sample();
        let back = Rotation::from_matrix(&r.matrix()).unwrap();
        assert_eq!(back.state(), RotationState::NotNormalized);
        assert!(back.approximately_equal(&r));

        let half_turn = Rotation::from_axis_angle(Vector3::new(0.0, 1.0, 1.0), deg(180.0));
        let back = Rotation::from_matrix(&half_turn.matrix()).unwrap();
        assert!(back.approximately_equal(&half_turn));
    }

    #[test]
    fn test_from_matrix_rejects_invalid() {
        let scaled = Matrix3::from_array([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
        let err = Rotation::from_matrix(&scaled).unwrap_err();
        assert!(matches!(
            err,
            GimbalError::MathError { kind: MathErrorKind::InvalidInput, .. }
        ));

        let mut nan = Matrix3::identity();
        nan[(1, 2)] = f64::NAN;
        let err = Rotation::from_matrix(&nan).unwrap_err();
        assert!(matches!(
            err,
            GimbalError::MathError { kind: MathErrorKind::NotFinite, .. }
        ));

        let reflection = Matrix3::from_array([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]]);
        assert!(Rotation::from_matrix(&reflection).is_err());
    }

    #[test]
    fn test_approximately_equal_ignores_quaternion_sign() {
        let q = sample().quaternion();
        let negated = Rotation::from_quaternion(-q);
        assert!(negated.approximately_equal(&sample()));
        assert!(!sample().approximately_equal(&Rotation::identity()));
    }

    #[test]
    fn test_approximately_equal_resolves_small_angles() {
        let a = Rotation::from_axis_angle(Vector3::z_axis(), Angle::from_radians(0.4));
        let apart = Rotation::from_axis_angle(Vector3::z_axis(), Angle::from_radians(0.4 + 1e-6));
        assert!(!a.approximately_equal(&apart));
        assert!(!apart.approximately_equal(&a));

        let tilted = Rotation::from_axis_angle(Vector3::new(1e-6, 0.0, 1.0), Angle::from_radians(0.4));
        assert!(!a.approximately_equal(&tilted));

        let close = Rotation::from_axis_angle(Vector3::z_axis(), Angle::from_radians(0.4 + 1e-12));
        assert!(a.approximately_equal(&close));
        assert!(a.approximately_equal(&Rotation::from_quaternion(-a.quaternion())));
    }

    #[test]
    fn test_f32_rotation() {
        let r = Rotation::<f32>::from_axis_angle(Vector3::z_axis(), Angle::from_degrees(90.0));
        let v = r.turn(Vector3::x_axis());
        assert!((v.y - 1.0).abs() < 1e-6);
        assert!(r.combine(&r.inverted()).is_identity());
    }

    #[test]
    fn test_rotation_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Rotation>();
    }
}
