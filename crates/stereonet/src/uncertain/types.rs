//! `Uncertain<N>`: nominal value plus scaled partial derivatives.

use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::SVector;

use super::scalar::Scalar;
use crate::angle::wrap_f64;

/// Value with a linearized uncertainty over `N` independent inputs.
///
/// Invariants:
/// - `sens[i] = ∂value/∂x_i · σ_i` for the i-th independent input.
/// - `std_dev() = ‖sens‖`; inputs are uncorrelated by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Uncertain<const N: usize> {
    value: f64,
    sens: SVector<f64, N>,
}

impl<const N: usize> Uncertain<N> {
    /// Value without uncertainty.
    #[inline]
    pub fn exact(value: f64) -> Self {
        Self {
            value,
            sens: SVector::zeros(),
        }
    }

    /// `N` independent measurements, given as `(value, standard deviation)`.
    ///
    /// Input `i` owns slot `i` of every derived sensitivity vector.
    pub fn independent(inputs: [(f64, f64); N]) -> [Self; N] {
        std::array::from_fn(|i| {
            let (value, sigma) = inputs[i];
            let mut sens = SVector::zeros();
            sens[i] = sigma;
            Self { value, sens }
        })
    }

    #[inline]
    pub fn from_parts(value: f64, sens: SVector<f64, N>) -> Self {
        Self { value, sens }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn sensitivity(&self) -> &SVector<f64, N> {
        &self.sens
    }

    /// One-sigma standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.sens.norm()
    }

    /// First-order covariance with another value derived from the same inputs.
    #[inline]
    pub fn covariance(&self, other: &Self) -> f64 {
        self.sens.dot(&other.sens)
    }

    /// Chain rule: new value `value`, derivative `deriv` w.r.t. `self`.
    #[inline]
    fn chain(self, value: f64, deriv: f64) -> Self {
        Self {
            value,
            sens: self.sens * deriv,
        }
    }
}

/// `1 − v²` at or below this puts `asin`/`acos` on their domain boundary.
const BOUNDARY_GAP: f64 = 8.0 * f64::EPSILON;

/// Sensitivities at or below this are rounding noise at a singular point.
const ROUND_OFF: f64 = 1e-12;

impl<const N: usize> Uncertain<N> {
    /// Chain rule through a point where the derivative is unbounded.
    ///
    /// Noise-level sensitivities vanish; genuine ones become infinite with the
    /// sign of `sign · s`.
    fn chain_singular(self, value: f64, sign: f64) -> Self {
        Self {
            value,
            sens: self.sens.map(|s| blow_up(s, sign)),
        }
    }
}

#[inline]
fn blow_up(s: f64, sign: f64) -> f64 {
    if s.abs() <= ROUND_OFF {
        0.0
    } else {
        s.signum() * sign * f64::INFINITY
    }
}

impl<const N: usize> Scalar for Uncertain<N> {
    #[inline]
    fn from_f64(v: f64) -> Self {
        Self::exact(v)
    }
    #[inline]
    fn nominal(&self) -> f64 {
        self.value
    }
    fn sin(self) -> Self {
        self.chain(self.value.sin(), self.value.cos())
    }
    fn cos(self) -> Self {
        self.chain(self.value.cos(), -self.value.sin())
    }
    fn tan(self) -> Self {
        let t = self.value.tan();
        self.chain(t, 1.0 + t * t)
    }
    fn asin(self) -> Self {
        let v = self.value;
        let gap = 1.0 - v * v;
        if gap <= BOUNDARY_GAP {
            return self.chain_singular(v.asin(), 1.0);
        }
        self.chain(v.asin(), 1.0 / gap.sqrt())
    }
    fn acos(self) -> Self {
        let v = self.value;
        let gap = 1.0 - v * v;
        if gap <= BOUNDARY_GAP {
            return self.chain_singular(v.acos(), -1.0);
        }
        self.chain(v.acos(), -1.0 / gap.sqrt())
    }
    fn atan2(self, x: Self) -> Self {
        let (y0, x0) = (self.value, x.value);
        let value = y0.atan2(x0);
        let r2 = x0 * x0 + y0 * y0;
        // Both arguments at rounding level: the angle is undefined.
        if r2 <= f64::EPSILON * f64::EPSILON {
            let sens = self.sens.zip_map(&x.sens, |dy, dx| blow_up(dy.abs().max(dx.abs()), 1.0));
            return Self { value, sens };
        }
        Self {
            value,
            sens: (self.sens * x0 - x.sens * y0) / r2,
        }
    }
    fn sqrt(self) -> Self {
        let s = self.value.sqrt();
        if self.value <= 0.0 {
            return self.chain_singular(s, 1.0);
        }
        self.chain(s, 0.5 / s)
    }
    #[inline]
    fn clamp_unit(self) -> Self {
        Self {
            value: self.value.clamp(-1.0, 1.0),
            sens: self.sens,
        }
    }
    #[inline]
    fn wrap_two_pi(self) -> Self {
        Self {
            value: wrap_f64(self.value),
            sens: self.sens,
        }
    }
}

impl<const N: usize> Add for Uncertain<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
            sens: self.sens + rhs.sens,
        }
    }
}

impl<const N: usize> Sub for Uncertain<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            value: self.value - rhs.value,
            sens: self.sens - rhs.sens,
        }
    }
}

impl<const N: usize> Mul for Uncertain<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            value: self.value * rhs.value,
            sens: self.sens * rhs.value + rhs.sens * self.value,
        }
    }
}

impl<const N: usize> Div for Uncertain<N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let b = rhs.value;
        Self {
            value: self.value / b,
            sens: (self.sens * b - rhs.sens * self.value) / (b * b),
        }
    }
}

impl<const N: usize> Neg for Uncertain<N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            value: -self.value,
            sens: -self.sens,
        }
    }
}

impl<const N: usize> Add<f64> for Uncertain<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self {
            value: self.value + rhs,
            sens: self.sens,
        }
    }
}

impl<const N: usize> Mul<f64> for Uncertain<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self {
            value: self.value * rhs,
            sens: self.sens * rhs,
        }
    }
}
