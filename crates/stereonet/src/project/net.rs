//! Reference net: primitive, small circles about the N–S axis and great
//! circles through it, in any view direction.

use nalgebra::Vector2;

use super::trace::{great_circle, primitive, small_circle, CircleTrace};
use super::ProjectionKind;
use crate::angle::{EAST, WEST};
use crate::cfg::StereoCfg;
use crate::error::{StereoError, StereoResult};
use crate::orient::Line;
use crate::view::View;

/// All traces of a reference net.
#[derive(Clone, Debug, Default)]
pub struct Net {
    pub primitive: Vec<Vector2<f64>>,
    pub small_circles: Vec<CircleTrace>,
    pub great_circles: Vec<CircleTrace>,
}

/// Net with circles every `interval` radians.
///
/// Small circles are cones about the north horizontal axis with radii
/// `interval, 2·interval, …` up to 90°. Great circles have poles on the
/// E–W horizontal line, plunging `0, interval, …` towards west and then east.
/// A vertical pole is nudged off vertical so the plane stays a proper arc
/// after a view rotation.
pub fn stereonet(view: &View, interval: f64, kind: ProjectionKind, cfg: StereoCfg) -> StereoResult<Net> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(StereoError::invalid_parameter(format!(
            "net interval must be a positive angle, got {interval}"
        )));
    }
    // 9.999… from round-off counts as 10
    let count = (EAST / interval + 1e-9).floor() as usize;

    let axis = Line::new(0.0, 0.0);
    let small_circles = (1..=count)
        .map(|i| small_circle(&axis, i as f64 * interval, kind, view, cfg))
        .collect();

    let great_circles = (0..=2 * count)
        .map(|i| {
            let mut pole = if i <= count {
                Line::new(WEST, i as f64 * interval)
            } else {
                Line::new(EAST, (i - count) as f64 * interval)
            };
            if (pole.plunge - EAST).abs() < 1e-12 {
                pole.plunge *= 0.9999;
            }
            great_circle(&pole.to_plane(), kind, view, cfg)
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        count,
        great = great_circles.len(),
        %kind,
        view_trend = view.trend(),
        view_plunge = view.plunge(),
        "stereonet generated"
    );
    Ok(Net {
        primitive: primitive(cfg),
        small_circles,
        great_circles,
    })
}
