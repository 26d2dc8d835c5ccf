//! Circle traces: small circles (cones), great circles (planes) and the primitive.

use nalgebra::{Vector2, Vector3};

use super::{project_line, ProjectionKind};
use crate::angle::{EAST, PI, TWO_PI};
use crate::cfg::{StereoCfg, HORIZON_EPS};
use crate::orient::{rotation_about, DirCos, Line, Plane};
use crate::view::View;

/// Projected trace of a circle on the sphere.
///
/// `path2` is empty unless the circle crosses the primitive; each path is an
/// ordered, continuous arc that a renderer can draw as one polyline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CircleTrace {
    pub path1: Vec<Vector2<f64>>,
    pub path2: Vec<Vector2<f64>>,
}

impl CircleTrace {
    #[inline]
    pub fn is_split(&self) -> bool {
        !self.path2.is_empty()
    }

    /// Non-empty arcs in order.
    pub fn paths(&self) -> impl Iterator<Item = &[Vector2<f64>]> {
        [self.path1.as_slice(), self.path2.as_slice()]
            .into_iter()
            .filter(|p| !p.is_empty())
    }

    /// Total number of points over both arcs.
    #[inline]
    pub fn len(&self) -> usize {
        self.path1.len() + self.path2.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[inline]
fn project_vec(v: Vector3<f64>, kind: ProjectionKind) -> Vector2<f64> {
    let l = DirCos::from(v).to_line();
    let (x, y) = project_line(l.trend, l.plunge, kind);
    Vector2::new(x, y)
}

/// The line at `cone_angle` from `axis` in the axis' vertical plane.
fn cone_start(axis: Line<f64>, cone_angle: f64) -> Line<f64> {
    let plunge = axis.plunge + cone_angle;
    if plunge > EAST {
        Line::new(axis.trend + PI, PI - plunge)
    } else {
        Line::new(axis.trend, plunge)
    }
}

/// Small circle of angular radius `cone_angle` (in `[0, π]`) about `axis`.
///
/// The part of the cone above the horizontal is drawn through its antipodes,
/// which is the usual convention for axial data. Consecutive samples on
/// opposite sides of the horizontal mean the projected sweep would leave the
/// disk; the arc is closed on the primitive at the interpolated crossing and a
/// new arc starts there. Arcs separated only by the start of the sweep are
/// joined, so at most two arcs result.
pub fn small_circle(
    axis: &Line<f64>,
    cone_angle: f64,
    kind: ProjectionKind,
    view: &View,
    cfg: StereoCfg,
) -> CircleTrace {
    let axis = view.apply(axis);
    let start = cone_start(axis, cone_angle).dir_cos().nominal();
    let sample = |theta: f64| rotation_about(axis, theta) * start;
    // Lower samples within the horizon tolerance are snapped onto it.
    let oriented = |v: Vector3<f64>, lower: bool| {
        if lower {
            Vector3::new(v.x, v.y, v.z.max(0.0))
        } else {
            -v
        }
    };

    let n = cfg.steps_for(TWO_PI);
    let step = TWO_PI / n as f64;
    let mut arcs: Vec<(bool, Vec<Vector2<f64>>)> = Vec::new();
    let mut prev: Option<(f64, f64, bool)> = None;
    for k in 0..=n {
        let theta = k as f64 * step;
        let v = sample(theta);
        let lower = v.z >= -HORIZON_EPS;
        match prev {
            Some((t0, d0, was_lower)) if was_lower != lower => {
                let h = crossing(&sample, t0, d0, theta, v.z);
                if let Some((_, arc)) = arcs.last_mut() {
                    arc.push(project_vec(oriented(h, was_lower), kind));
                }
                arcs.push((lower, vec![project_vec(oriented(h, lower), kind)]));
            }
            Some(_) => {}
            None => arcs.push((lower, Vec::with_capacity(n + 1))),
        }
        if let Some((_, arc)) = arcs.last_mut() {
            arc.push(project_vec(oriented(v, lower), kind));
        }
        prev = Some((theta, v.z, lower));
    }

    // The last sample repeats the first; fuse arcs that wrap the sweep start.
    if arcs.len() > 1 && arcs[0].0 == arcs[arcs.len() - 1].0 {
        if let Some((_, mut tail)) = arcs.pop() {
            tail.extend(arcs[0].1.iter().skip(1));
            arcs[0].1 = tail;
        }
    }
    // Lower-hemisphere arc first.
    arcs.sort_by_key(|(lower, _)| !*lower);

    let mut it = arcs.into_iter().map(|(_, arc)| arc);
    let path1 = it.next().unwrap_or_default();
    let mut path2 = it.next().unwrap_or_default();
    let extra: Vec<_> = it.collect();
    if !extra.is_empty() {
        tracing::warn!(extra = extra.len(), cone_angle, "small circle produced more than two arcs");
        path2.extend(extra.into_iter().flatten());
    }
    if !path2.is_empty() {
        tracing::trace!(n1 = path1.len(), n2 = path2.len(), "small circle split at the primitive");
    }
    CircleTrace { path1, path2 }
}

/// Point on the horizontal between two samples on opposite sides of it, by
/// linear interpolation of the sweep parameter.
fn crossing(
    sample: &impl Fn(f64) -> Vector3<f64>,
    t0: f64,
    d0: f64,
    t1: f64,
    d1: f64,
) -> Vector3<f64> {
    let t = t0 + (t1 - t0) * d0 / (d0 - d1);
    let v = sample(t);
    Vector3::new(v.x, v.y, 0.0).normalize()
}

/// Lower-hemisphere half of a great circle, from the strike to strike + π.
pub fn great_circle(plane: &Plane<f64>, kind: ProjectionKind, view: &View, cfg: StereoCfg) -> CircleTrace {
    let plane = if view.is_default() {
        *plane
    } else {
        view.apply(&plane.pole()).to_plane()
    };
    let s = Line::new(plane.strike, 0.0).dir_cos().nominal();
    let d = Line::new(plane.strike + EAST, plane.dip).dir_cos().nominal();
    let n = cfg.steps_for(PI);
    let path1 = (0..=n)
        .map(|k| {
            let theta = k as f64 * PI / n as f64;
            project_vec(s * theta.cos() + d * theta.sin(), kind)
        })
        .collect();
    CircleTrace {
        path1,
        path2: Vec::new(),
    }
}

/// The primitive circle, starting at north and running clockwise.
pub fn primitive(cfg: StereoCfg) -> Vec<Vector2<f64>> {
    let n = cfg.steps_for(TWO_PI);
    (0..=n)
        .map(|k| {
            let theta = k as f64 * TWO_PI / n as f64;
            Vector2::new(theta.sin(), theta.cos())
        })
        .collect()
}
