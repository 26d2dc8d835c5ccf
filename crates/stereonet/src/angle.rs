//! Angular primitives: constants and wrapping into `[0, 2π)`.

use crate::uncertain::Scalar;

pub use std::f64::consts::{PI, TAU as TWO_PI};

/// Trend of due east (also the right angle used throughout).
pub const EAST: f64 = std::f64::consts::FRAC_PI_2;
/// Trend of due west.
pub const WEST: f64 = 3.0 * EAST;

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn zero_two_pi<S: Scalar>(a: S) -> S {
    a.wrap_two_pi()
}

/// Clamp into `[-1, 1]` ahead of `asin`/`acos`.
#[inline]
pub fn clamp_unit<S: Scalar>(x: S) -> S {
    x.clamp_unit()
}

/// Plain-`f64` wrap used by the `Scalar` impls.
#[inline]
pub(crate) fn wrap_f64(a: f64) -> f64 {
    let r = a.rem_euclid(TWO_PI);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if r >= TWO_PI {
        0.0
    } else {
        r
    }
}
