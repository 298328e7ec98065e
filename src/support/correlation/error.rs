use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur when evaluating a correlation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CorrelationError {
    /// No flat-plate correlation covers this combination.
    #[error("no flat-plate correlation applies for Re = {reynolds:.0}, Pr = {prandtl:.4}")]
    FlatPlateNotApplicable { reynolds: f64, prandtl: f64 },

    /// Churchill-Bernstein is only applied for `Pr > 0.2`.
    #[error("Churchill-Bernstein requires Pr > 0.2, got {prandtl:.4}")]
    ChurchillBernsteinPrandtl { prandtl: f64 },

    /// The Reynolds number falls outside every row of the compact table.
    #[error("Re = {reynolds:.3} is outside the compact cylinder correlation range [0.4, 400000]")]
    CompactOutOfRange { reynolds: f64 },

    /// The correlation produced a non-positive Nusselt number.
    #[error("non-physical Nusselt number")]
    NonPhysical(#[from] ConstraintError),
}
