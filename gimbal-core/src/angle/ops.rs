//! Arithmetic operators for [`Angle`].
//!
//! Implements `+`, `-`, `*`, `/`, unary `-` and their compound-assignment forms.

use super::core::Angle;
use crate::real::Real;
use core::ops::*;

/// Angle + Angle → Angle
impl<T: Real> Add for Angle<T> {
    type Output = Angle<T>;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() + rhs.radians())
    }
}

/// Angle - Angle → Angle
impl<T: Real> Sub for Angle<T> {
    type Output = Angle<T>;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() - rhs.radians())
    }
}

/// Angle * scalar → Angle
impl<T: Real> Mul<T> for Angle<T> {
    type Output = Angle<T>;
    #[inline]
    fn mul(self, k: T) -> Self {
        Angle::from_radians(self.radians() * k)
    }
}

/// Angle / scalar → Angle
impl<T: Real> Div<T> for Angle<T> {
    type Output = Angle<T>;
    #[inline]
    fn div(self, k: T) -> Self {
        Angle::from_radians(self.radians() / k)
    }
}

/// -Angle → Angle
impl<T: Real> Neg for Angle<T> {
    type Output = Angle<T>;
    #[inline]
    fn neg(self) -> Self {
        self.inverted()
    }
}

impl<T: Real> AddAssign for Angle<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> SubAssign for Angle<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> MulAssign<T> for Angle<T> {
    #[inline]
    fn mul_assign(&mut self, k: T) {
        *self = *self * k;
    }
}

impl<T: Real> DivAssign<T> for Angle<T> {
    #[inline]
    fn div_assign(&mut self, k: T) {
        *self = *self / k;
    }
}

macro_rules! scalar_times_angle {
    ($($t:ty),*) => {$(
        /// scalar * Angle → Angle
        impl Mul<Angle<$t>> for $t {
            type Output = Angle<$t>;
            #[inline]
            fn mul(self, angle: Angle<$t>) -> Angle<$t> {
                angle * self
            }
        }
    )*};
}

scalar_times_angle!(f32, f64);
