//! Value types for lines, planes and direction cosines.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;

use super::convert::{pole, to_direction_cosines, to_spherical};
use crate::error::StereoError;
use crate::uncertain::Scalar;

/// What a (trend, plunge)-like pair describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Trend and plunge of a line.
    Line,
    /// Strike and dip of a plane, handled through its pole.
    Pole,
}

impl FromStr for Kind {
    type Err = StereoError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" | "line" => Ok(Kind::Line),
            "1" | "pole" | "plane" => Ok(Kind::Pole),
            other => Err(StereoError::invalid_mode(other)),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Line => f.write_str("line"),
            Kind::Pole => f.write_str("pole"),
        }
    }
}

/// A line: trend in `[0, 2π)`, plunge in `[-π/2, π/2]` (positive down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line<S = f64> {
    pub trend: S,
    pub plunge: S,
}

/// A plane in right-hand-rule strike/dip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane<S = f64> {
    pub strike: S,
    pub dip: S,
}

/// Direction cosines (north, east, down).
///
/// Invariant: unit norm within floating tolerance when produced by
/// `to_direction_cosines`; cross products are not normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirCos<S = f64> {
    pub north: S,
    pub east: S,
    pub down: S,
}

impl<S: Scalar> Line<S> {
    #[inline]
    pub fn new(trend: S, plunge: S) -> Self {
        Self { trend, plunge }
    }
    #[inline]
    pub fn dir_cos(&self) -> DirCos<S> {
        to_direction_cosines(self.trend, self.plunge, Kind::Line)
    }
    /// Plane whose pole is this line.
    #[inline]
    pub fn to_plane(&self) -> Plane<S> {
        let (strike, dip) = pole(self.trend, self.plunge, Kind::Line);
        Plane { strike, dip }
    }
    /// Strip uncertainty.
    #[inline]
    pub fn nominal(&self) -> Line<f64> {
        Line::new(self.trend.nominal(), self.plunge.nominal())
    }
}

impl<S: Scalar> Plane<S> {
    #[inline]
    pub fn new(strike: S, dip: S) -> Self {
        Self { strike, dip }
    }
    #[inline]
    pub fn pole(&self) -> Line<S> {
        let (trend, plunge) = pole(self.strike, self.dip, Kind::Pole);
        Line { trend, plunge }
    }
    /// Direction cosines of the pole.
    #[inline]
    pub fn dir_cos(&self) -> DirCos<S> {
        to_direction_cosines(self.strike, self.dip, Kind::Pole)
    }
    #[inline]
    pub fn nominal(&self) -> Plane<f64> {
        Plane::new(self.strike.nominal(), self.dip.nominal())
    }
}

impl<S: Scalar> DirCos<S> {
    #[inline]
    pub fn new(north: S, east: S, down: S) -> Self {
        Self { north, east, down }
    }
    #[inline]
    pub fn dot(&self, o: &Self) -> S {
        self.north * o.north + self.east * o.east + self.down * o.down
    }
    #[inline]
    pub fn cross(&self, o: &Self) -> Self {
        Self {
            north: self.east * o.down - self.down * o.east,
            east: self.down * o.north - self.north * o.down,
            down: self.north * o.east - self.east * o.north,
        }
    }
    #[inline]
    pub fn norm(&self) -> S {
        self.dot(self).sqrt()
    }
    #[inline]
    pub fn scale(&self, k: S) -> Self {
        Self {
            north: self.north * k,
            east: self.east * k,
            down: self.down * k,
        }
    }
    #[inline]
    pub fn antipode(&self) -> Self {
        Self {
            north: -self.north,
            east: -self.east,
            down: -self.down,
        }
    }
    #[inline]
    pub fn to_line(&self) -> Line<S> {
        to_spherical(self)
    }
    #[inline]
    pub fn nominal(&self) -> Vector3<f64> {
        Vector3::new(self.north.nominal(), self.east.nominal(), self.down.nominal())
    }
}

impl From<Vector3<f64>> for DirCos<f64> {
    #[inline]
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
