//! Error type shared by the conversion, angle and projection APIs.
//!
//! Numeric domain guards (clamping before `asin`/`acos`) are not errors and
//! never surface here.

use thiserror::Error;

pub type StereoResult<T> = Result<T, StereoError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StereoError {
    /// Two lines or planes are parallel, so no intersection or common plane exists.
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },

    /// A mode, kind or projection flag that is not recognized.
    #[error("invalid mode flag: {flag:?}")]
    InvalidMode { flag: String },

    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },
}

impl StereoError {
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }

    pub fn invalid_mode(flag: impl Into<String>) -> Self {
        Self::InvalidMode { flag: flag.into() }
    }

    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }
}
