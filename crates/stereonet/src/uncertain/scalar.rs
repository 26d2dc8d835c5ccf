//! The `Scalar` abstraction shared by plain and uncertain values.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::angle::wrap_f64;

/// Real scalar usable by every conversion, angle and projection routine.
pub trait Scalar:
    Copy
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Constant with no uncertainty.
    fn from_f64(v: f64) -> Self;
    /// Nominal (central) value.
    fn nominal(&self) -> f64;

    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    /// Four-quadrant `atan2(self, x)`.
    fn atan2(self, x: Self) -> Self;
    fn sqrt(self) -> Self;

    /// Clamp the nominal value into `[-1, 1]`.
    fn clamp_unit(self) -> Self;
    /// Shift the nominal value into `[0, 2π)`.
    fn wrap_two_pi(self) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
    #[inline]
    fn nominal(&self) -> f64 {
        *self
    }
    #[inline]
    fn sin(self) -> Self {
        f64::sin(self)
    }
    #[inline]
    fn cos(self) -> Self {
        f64::cos(self)
    }
    #[inline]
    fn tan(self) -> Self {
        f64::tan(self)
    }
    #[inline]
    fn asin(self) -> Self {
        f64::asin(self)
    }
    #[inline]
    fn acos(self) -> Self {
        f64::acos(self)
    }
    #[inline]
    fn atan2(self, x: Self) -> Self {
        f64::atan2(self, x)
    }
    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
    #[inline]
    fn clamp_unit(self) -> Self {
        self.clamp(-1.0, 1.0)
    }
    #[inline]
    fn wrap_two_pi(self) -> Self {
        wrap_f64(self)
    }
}
