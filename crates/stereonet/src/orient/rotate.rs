//! Rotation of a line about an arbitrary axis.

use nalgebra::{Rotation3, Unit, Vector3};

use super::types::{DirCos, Line};
use crate::uncertain::Scalar;

/// Rotate `line` by `angle` about `axis`.
///
/// Positive angles turn clockwise when looking down the axis (right-hand rule
/// about the axis direction in the NED frame). The result is a unit vector
/// converted back to trend/plunge; it may point upward.
pub fn rotate(axis: Line<f64>, angle: f64, line: Line<f64>) -> Line<f64> {
    let r = rotation_about(axis, angle);
    DirCos::from(r * line.dir_cos().nominal()).to_line()
}

/// Rotation matrix about a line, in NED coordinates.
pub(crate) fn rotation_about(axis: Line<f64>, angle: f64) -> Rotation3<f64> {
    let a: Vector3<f64> = axis.dir_cos().nominal();
    Rotation3::from_axis_angle(&Unit::new_normalize(a), angle)
}

/// `Scalar`-generic product `m · v` for a nominal matrix.
pub(crate) fn apply_matrix<S: Scalar>(m: &nalgebra::Matrix3<f64>, v: &DirCos<S>) -> DirCos<S> {
    let row = |i: usize| {
        S::from_f64(m[(i, 0)]) * v.north + S::from_f64(m[(i, 1)]) * v.east + S::from_f64(m[(i, 2)]) * v.down
    };
    DirCos::new(row(0), row(1), row(2))
}
