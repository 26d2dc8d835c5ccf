//! Stereonet projection of lines, small circles and great circles.
//!
//! Purpose
//! - Map lower-hemisphere directions onto the unit disk (equal-angle or
//!   equal-area), and trace cones and planes as point sequences a renderer
//!   can draw directly.
//!
//! Conventions
//! - `x` points east, `y` points north; the primitive circle has radius 1.
//! - Upward lines are plotted through their antipode.
//! - Traces are ordered point lists; a trace that crosses the primitive is
//!   split into two arcs, each ending on the primitive.
//!
//! Code cross-refs: `orient::{Line, Plane}`, `view::View`, `cfg::StereoCfg`.

mod net;
mod trace;

use std::fmt;
use std::str::FromStr;

use crate::angle::PI;
use crate::error::StereoError;
use crate::uncertain::Scalar;

pub use net::{stereonet, Net};
pub use trace::{great_circle, primitive, small_circle, CircleTrace};

/// Projection convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    /// Stereographic (Wulff): preserves angles.
    #[default]
    EqualAngle,
    /// Lambert azimuthal (Schmidt): preserves areas.
    EqualArea,
}

impl TryFrom<u8> for ProjectionKind {
    type Error = StereoError;
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ProjectionKind::EqualAngle),
            1 => Ok(ProjectionKind::EqualArea),
            other => Err(StereoError::invalid_mode(other.to_string())),
        }
    }
}

impl FromStr for ProjectionKind {
    type Err = StereoError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" | "equal-angle" | "wulff" => Ok(ProjectionKind::EqualAngle),
            "1" | "equal-area" | "schmidt" => Ok(ProjectionKind::EqualArea),
            other => Err(StereoError::invalid_mode(other)),
        }
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProjectionKind::EqualAngle => "equal-angle",
            ProjectionKind::EqualArea => "equal-area",
        })
    }
}

/// Disk coordinates `(x, y)` of a line.
pub fn project_line<S: Scalar>(trend: S, plunge: S, kind: ProjectionKind) -> (S, S) {
    let (trend, plunge) = if plunge.nominal() < 0.0 {
        ((trend + S::from_f64(PI)).wrap_two_pi(), -plunge)
    } else {
        (trend, plunge)
    };
    let half = S::from_f64(PI / 4.0) - plunge / S::from_f64(2.0);
    let r = match kind {
        ProjectionKind::EqualAngle => half.tan(),
        ProjectionKind::EqualArea => S::from_f64(std::f64::consts::SQRT_2) * half.sin(),
    };
    (r * trend.sin(), r * trend.cos())
}
