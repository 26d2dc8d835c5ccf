//! Orientations: lines, planes, and their direction cosines.
//!
//! Purpose
//! - Convert between spherical angles (trend/plunge, strike/dip) and unit
//!   direction cosines in a North-East-Down frame.
//! - Convert planes to poles and back.
//!
//! Conventions
//! - Radians only. Planes follow the right-hand rule: the dip direction is
//!   90° clockwise of the strike.
//! - `down > 0` is the lower hemisphere.
//! - Every routine is generic over `Scalar`, so the same code serves `f64`
//!   and `Uncertain<N>`.

mod convert;
mod rotate;
mod types;

pub use convert::{pole, to_direction_cosines, to_spherical};
pub use rotate::rotate;
pub(crate) use rotate::{apply_matrix, rotation_about};
pub use types::{DirCos, Kind, Line, Plane};
