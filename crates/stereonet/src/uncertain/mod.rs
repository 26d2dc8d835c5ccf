//! Scalars with first-order uncertainty propagation.
//!
//! Purpose
//! - Run the same geometry code on plain `f64` values and on values carrying
//!   a linearized standard deviation, without duplicating any formula.
//!
//! Why this design
//! - `Uncertain<N>` stores the nominal value plus `∂f/∂x_i · σ_i` for `N`
//!   independent inputs. The standard deviation is the norm of that vector and
//!   the covariance of two results is their dot product, so quantities derived
//!   from shared inputs (dot products of direction cosines, cross products)
//!   stay correctly correlated.
//! - `N` is a const generic; the angle API needs at most four inputs
//!   (two trend/plunge pairs), so `Uncertain<4>` is the usual choice.
//!
//! Conventions
//! - Nominal values always match the `f64` computation on nominal inputs.
//! - Singular derivatives (`asin`/`acos` at ±1, `atan2` at the origin, `sqrt`
//!   at 0) use a floored denominator so results stay finite; zero input
//!   sensitivity still gives zero output sensitivity.

mod scalar;
mod types;

pub use scalar::Scalar;
pub use types::Uncertain;
