//! Sampling density and tolerances.

/// Stereonet configuration.
///
/// Passed by value; defaults reproduce the usual 1° tracing density.
#[derive(Clone, Copy, Debug)]
pub struct StereoCfg {
    /// Angular step (radians) between consecutive samples of a circle trace.
    pub sample_step: f64,
    /// Cross products shorter than this are treated as parallel input.
    pub eps_norm: f64,
}

impl Default for StereoCfg {
    fn default() -> Self {
        Self {
            sample_step: 1f64.to_radians(),
            eps_norm: 1e-12,
        }
    }
}

impl StereoCfg {
    /// Number of samples covering `sweep` radians (at least one step).
    #[inline]
    pub(crate) fn steps_for(&self, sweep: f64) -> usize {
        let n = (sweep / self.sample_step).round();
        if n.is_finite() && n >= 1.0 {
            n as usize
        } else {
            1
        }
    }
}

/// Samples with `|down|` below this count as horizontal (lower hemisphere).
pub(crate) const HORIZON_EPS: f64 = 1e-12;
