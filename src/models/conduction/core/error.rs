use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::Surface;

/// Errors that can occur when building or solving a conduction problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConductionError {
    /// The wall has no layers.
    #[error("at least one layer is required")]
    NoLayers,

    /// A layer property violates its constraint.
    #[error("layer `{layer}` has an invalid {property}")]
    InvalidLayer {
        layer: String,
        property: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A geometric dimension violates its constraint.
    #[error("invalid geometry")]
    InvalidGeometry(#[from] ConstraintError),

    /// A surface convection coefficient is negative or not a number.
    #[error("invalid {surface} convection coefficient")]
    InvalidConvection {
        surface: Surface,
        #[source]
        source: ConstraintError,
    },
}
