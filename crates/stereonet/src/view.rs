//! Oblique stereonet views.
//!
//! A view is the direction the stereonet is looked along. Orientations are
//! re-expressed in a frame whose third axis is that direction, so the
//! projection code can keep assuming a lower-hemisphere, north-up net.

use nalgebra::Matrix3;

use crate::angle::EAST;
use crate::orient::{to_direction_cosines, DirCos, Kind, Line};
use crate::uncertain::Scalar;

/// View direction (trend, plunge). The default looks straight down.
///
/// The frame matrix is built once at construction and reused by every
/// rotation through this view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    trend: f64,
    plunge: f64,
    frame: Matrix3<f64>,
}

impl Default for View {
    fn default() -> Self {
        Self::new(0.0, EAST)
    }
}

impl View {
    pub fn new(trend: f64, plunge: f64) -> Self {
        Self {
            trend,
            plunge,
            frame: frame_matrix(trend, plunge),
        }
    }

    #[inline]
    pub fn trend(&self) -> f64 {
        self.trend
    }

    #[inline]
    pub fn plunge(&self) -> f64 {
        self.plunge
    }

    /// Exact comparison with the default view; callers skip the rotation then.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.trend == 0.0 && self.plunge == EAST
    }

    /// Rows are the view axes in NED: `X' = (trend, plunge − π/2)`,
    /// `Y' = (trend + π/2, 0)`, `Z' = (trend, plunge)`.
    #[inline]
    pub fn matrix(&self) -> Matrix3<f64> {
        self.frame
    }

    /// Express `line` in this view's frame.
    pub fn apply<S: Scalar>(&self, line: &Line<S>) -> Line<S> {
        if self.is_default() {
            return *line;
        }
        self.rotate(&line.dir_cos()).to_line()
    }

    /// `apply` over a batch of lines.
    pub fn apply_many<S: Scalar>(&self, lines: &[Line<S>]) -> Vec<Line<S>> {
        lines.iter().map(|l| self.apply(l)).collect()
    }

    /// Rotate direction cosines into this view's frame (no default short-cut).
    #[inline]
    pub(crate) fn rotate<S: Scalar>(&self, v: &DirCos<S>) -> DirCos<S> {
        crate::orient::apply_matrix(&self.frame, v)
    }
}

fn frame_matrix(trend: f64, plunge: f64) -> Matrix3<f64> {
    let x = to_direction_cosines(trend, plunge - EAST, Kind::Line).nominal();
    let y = to_direction_cosines(trend + EAST, 0.0, Kind::Line).nominal();
    let z = to_direction_cosines(trend, plunge, Kind::Line).nominal();
    Matrix3::from_rows(&[x.transpose(), y.transpose(), z.transpose()])
}

/// Trend and plunge of a line as seen from the view (`view_trend`, `view_plunge`).
pub fn to_view_frame<S: Scalar>(trend: S, plunge: S, view_trend: f64, view_plunge: f64) -> (S, S) {
    let l = View::new(view_trend, view_plunge).apply(&Line::new(trend, plunge));
    (l.trend, l.plunge)
}
