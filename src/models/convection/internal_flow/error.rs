use thiserror::Error;
use uom::si::f64::ThermodynamicTemperature;

use crate::support::{
    constraint::ConstraintError, correlation::CorrelationError, properties::PropertyError,
};

/// Errors that can occur when analyzing internal tube flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InternalFlowError {
    /// The inlet and outlet are not strictly on the same side of the wall temperature.
    #[error(
        "fluid temperatures must stay strictly on one side of the wall: inlet {inlet:?}, outlet {outlet:?}, wall {wall:?}"
    )]
    WallTemperatureCrossed {
        inlet: ThermodynamicTemperature,
        outlet: ThermodynamicTemperature,
        wall: ThermodynamicTemperature,
    },

    #[error("fluid property lookup failed")]
    Property(#[from] PropertyError),

    #[error(transparent)]
    Correlation(#[from] CorrelationError),

    #[error("non-physical flow")]
    NonPhysical(#[from] ConstraintError),
}
