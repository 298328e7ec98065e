//! Forced-convection Nusselt number correlations.
//!
//! Correlations are pure functions of [`Reynolds`] and [`Prandtl`]. They do
//! not look up properties or compute heat rates; models do that around them.
//!
//! A correlation either applies (possibly with [`Warning`]s about its
//! validity range) or returns a [`CorrelationError`].
//!
//! [`Reynolds`]: crate::support::dimensionless::Reynolds
//! [`Prandtl`]: crate::support::dimensionless::Prandtl

pub mod cylinder;
mod error;
pub mod flat_plate;
pub mod tube;

pub use error::CorrelationError;

use std::fmt;

/// A correlation was applied near or outside its stated validity range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Warning {
    /// Prandtl number outside `[min, max]`.
    PrandtlOutOfRange { prandtl: f64, min: f64, max: f64 },
    /// Reynolds number above the correlation's upper bound.
    ReynoldsAboveRange { reynolds: f64, max: f64 },
    /// Internal flow between the laminar and fully turbulent limits.
    TransitionalFlow { reynolds: f64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrandtlOutOfRange { prandtl, min, max } => {
                write!(f, "Pr = {prandtl:.4} is outside the validity range [{min}, {max}]")
            }
            Self::ReynoldsAboveRange { reynolds, max } => {
                write!(f, "Re = {reynolds:.0} exceeds the validity limit {max:e}")
            }
            Self::TransitionalFlow { reynolds } => write!(
                f,
                "Re = {reynolds:.0} is transitional; the turbulent correlation may be inaccurate"
            ),
        }
    }
}

/// Cube root of the Prandtl number, shared by every correlation here.
pub(crate) fn pr_third(prandtl: f64) -> f64 {
    prandtl.cbrt()
}
