//! Angular relationships between two lines or two planes.
//!
//! - angle between two lines, or between two planes (through their poles),
//!   returned with its supplement;
//! - intersection line of two planes;
//! - plane containing two apparent dips.
//!
//! All routines are generic over `Scalar`; parallel inputs are detected on
//! nominal values before any cross product is formed.

use std::fmt;
use std::str::FromStr;

use crate::angle::PI;
use crate::cfg::StereoCfg;
use crate::error::{StereoError, StereoResult};
use crate::orient::{DirCos, Kind, Line, Plane};
use crate::uncertain::Scalar;

/// Which relationship `angles` computes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Angle between two lines (inputs trend/plunge).
    LineAngle,
    /// Angle between two planes (inputs strike/dip).
    PlaneAngle,
    /// Line of intersection of two planes (inputs strike/dip).
    Intersection,
    /// Plane containing two apparent dips (inputs trend/plunge).
    BestFitPlane,
}

impl Relation {
    /// Kind of orientation the inputs describe.
    #[inline]
    pub fn input_kind(self) -> Kind {
        match self {
            Relation::LineAngle | Relation::BestFitPlane => Kind::Line,
            Relation::PlaneAngle | Relation::Intersection => Kind::Pole,
        }
    }
}

impl FromStr for Relation {
    type Err = StereoError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" | "line-angle" => Ok(Relation::LineAngle),
            "p" | "plane-angle" => Ok(Relation::PlaneAngle),
            "i" | "intersection" => Ok(Relation::Intersection),
            "a" | "best-fit-plane" => Ok(Relation::BestFitPlane),
            other => Err(StereoError::invalid_mode(other)),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Relation::LineAngle => "line-angle",
            Relation::PlaneAngle => "plane-angle",
            Relation::Intersection => "intersection",
            Relation::BestFitPlane => "best-fit-plane",
        })
    }
}

/// Dispatch on `relation`.
///
/// `a` and `b` are (trend, plunge) for `LineAngle`/`BestFitPlane` and
/// (strike, dip) for `PlaneAngle`/`Intersection`. The result is
/// (angle, supplement), the intersection's (trend, plunge), or the best-fit
/// plane's (strike, dip).
pub fn angles<S: Scalar>(a: (S, S), b: (S, S), relation: Relation) -> StereoResult<(S, S)> {
    let cfg = StereoCfg::default();
    match relation {
        Relation::LineAngle => Ok(angle_between_lines(&Line::new(a.0, a.1), &Line::new(b.0, b.1))),
        Relation::PlaneAngle => Ok(angle_between_planes(
            &Plane::new(a.0, a.1),
            &Plane::new(b.0, b.1),
        )),
        Relation::Intersection => {
            let l = intersection(&Plane::new(a.0, a.1), &Plane::new(b.0, b.1), cfg)?;
            Ok((l.trend, l.plunge))
        }
        Relation::BestFitPlane => {
            let p = plane_from_apparent_dips(&Line::new(a.0, a.1), &Line::new(b.0, b.1), cfg)?;
            Ok((p.strike, p.dip))
        }
    }
}

/// Angle between two lines and its supplement.
pub fn angle_between_lines<S: Scalar>(a: &Line<S>, b: &Line<S>) -> (S, S) {
    angle_and_supplement(&a.dir_cos(), &b.dir_cos())
}

/// Angle between two planes (between their poles) and its supplement.
pub fn angle_between_planes<S: Scalar>(a: &Plane<S>, b: &Plane<S>) -> (S, S) {
    angle_and_supplement(&a.dir_cos(), &b.dir_cos())
}

/// Line of intersection of two planes, pointing into the lower hemisphere.
pub fn intersection<S: Scalar>(a: &Plane<S>, b: &Plane<S>, cfg: StereoCfg) -> StereoResult<Line<S>> {
    reject_parallel((a.strike, a.dip), (b.strike, b.dip), "planes")?;
    lower_unit_normal(&a.dir_cos(), &b.dir_cos(), cfg).map(|n| n.to_line())
}

/// Plane containing two apparent-dip lines.
pub fn plane_from_apparent_dips<S: Scalar>(
    a: &Line<S>,
    b: &Line<S>,
    cfg: StereoCfg,
) -> StereoResult<Plane<S>> {
    reject_parallel((a.trend, a.plunge), (b.trend, b.plunge), "lines")?;
    lower_unit_normal(&a.dir_cos(), &b.dir_cos(), cfg).map(|n| n.to_line().to_plane())
}

fn angle_and_supplement<S: Scalar>(a: &DirCos<S>, b: &DirCos<S>) -> (S, S) {
    let ang = a.dot(b).clamp_unit().acos();
    (ang, S::from_f64(PI) - ang)
}

// Exact comparison of nominal values: a spread carries no meaning for an
// equality test.
fn reject_parallel<S: Scalar>(a: (S, S), b: (S, S), what: &str) -> StereoResult<()> {
    if a.0.nominal() == b.0.nominal() && a.1.nominal() == b.1.nominal() {
        tracing::debug!(what, a0 = a.0.nominal(), a1 = a.1.nominal(), "identical orientations");
        return Err(StereoError::degenerate(format!("{what} are parallel")));
    }
    Ok(())
}

/// Unit cross product `a × b`, flipped so that `down ≥ 0`.
fn lower_unit_normal<S: Scalar>(a: &DirCos<S>, b: &DirCos<S>, cfg: StereoCfg) -> StereoResult<DirCos<S>> {
    let mut c = a.cross(b);
    if c.down.nominal() < 0.0 {
        c = c.antipode();
    }
    let r = c.norm();
    let rn = r.nominal();
    if !rn.is_finite() || rn <= cfg.eps_norm {
        tracing::debug!(norm = rn, "cross product too short to normalize");
        return Err(StereoError::degenerate("orientations are parallel within tolerance"));
    }
    let inv = S::from_f64(1.0) / r;
    Ok(c.scale(inv))
}

#[cfg(test)]
mod tests;
