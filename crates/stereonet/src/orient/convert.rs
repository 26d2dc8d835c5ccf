//! Spherical ↔ Cartesian conversion and the plane/pole relationship.

use super::types::{DirCos, Kind, Line};
use crate::angle::{EAST, PI};
use crate::uncertain::Scalar;

/// Direction cosines of a line (`Kind::Line`, inputs trend/plunge) or of the
/// pole to a plane (`Kind::Pole`, inputs strike/dip).
pub fn to_direction_cosines<S: Scalar>(trend: S, plunge: S, kind: Kind) -> DirCos<S> {
    match kind {
        Kind::Line => DirCos {
            north: trend.cos() * plunge.cos(),
            east: trend.sin() * plunge.cos(),
            down: plunge.sin(),
        },
        // Pole trend = strike − π/2, pole plunge = π/2 − dip, expanded.
        Kind::Pole => DirCos {
            north: trend.sin() * plunge.sin(),
            east: -(trend.cos() * plunge.sin()),
            down: plunge.cos(),
        },
    }
}

/// Trend and plunge of a direction-cosine vector.
///
/// The `asin` argument is clamped so round-off never leaves its domain.
pub fn to_spherical<S: Scalar>(dc: &DirCos<S>) -> Line<S> {
    let plunge = dc.down.clamp_unit().asin();
    let trend = dc.east.atan2(dc.north).wrap_two_pi();
    Line { trend, plunge }
}

/// Plane ↔ pole.
///
/// - `Kind::Pole`: input is a plane (strike, dip); returns the pole (trend, plunge).
/// - `Kind::Line`: input is a pole (trend, plunge); returns the plane (strike, dip).
///   An upward pole (negative plunge) is handled through its antipode.
pub fn pole<S: Scalar>(a: S, b: S, kind: Kind) -> (S, S) {
    let east = S::from_f64(EAST);
    match kind {
        Kind::Pole => ((a - east).wrap_two_pi(), east - b),
        Kind::Line => {
            let (dip, dip_dir) = if b.nominal() >= 0.0 {
                (east - b, a - S::from_f64(PI))
            } else {
                (east + b, a)
            };
            ((dip_dir - east).wrap_two_pi(), dip)
        }
    }
}
