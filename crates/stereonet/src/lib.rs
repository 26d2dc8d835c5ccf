//! Orientation geometry for structural geology and stereonet projection.
//!
//! Lines are (trend, plunge), planes are right-hand-rule (strike, dip), all in
//! radians. The crate converts them to direction cosines, derives angular
//! relationships (with first-order uncertainty when the inputs carry it), and
//! projects lines and circle traces onto a unit stereonet for a renderer.
//!
//! Layout
//! - `angle`: wrapping and constants.
//! - `uncertain`: the `Scalar` trait and `Uncertain<N>`.
//! - `orient`: spherical ↔ Cartesian, plane ↔ pole, rotation about an axis.
//! - `angles`: angle between lines/planes, intersection, best-fit plane.
//! - `view`: oblique view frames.
//! - `project`: equal-angle/equal-area projection, circle traces, reference net.

pub mod angle;
pub mod angles;
pub mod cfg;
pub mod error;
pub mod orient;
pub mod project;
pub mod uncertain;
pub mod view;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::StereoCfg;
pub use error::{StereoError, StereoResult};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{zero_two_pi, EAST, PI, TWO_PI, WEST};
    pub use crate::angles::{
        angle_between_lines, angle_between_planes, angles, intersection, plane_from_apparent_dips,
        Relation,
    };
    pub use crate::orient::{pole, rotate, to_direction_cosines, to_spherical, DirCos, Kind, Line, Plane};
    pub use crate::project::{
        great_circle, primitive, project_line, small_circle, stereonet, CircleTrace, Net,
        ProjectionKind,
    };
    pub use crate::uncertain::{Scalar, Uncertain};
    pub use crate::view::{to_view_frame, View};
    pub use crate::{StereoCfg, StereoError, StereoResult};
}
