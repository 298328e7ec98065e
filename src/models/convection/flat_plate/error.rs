use thiserror::Error;
use uom::si::f64::Length;

use crate::support::{
    constraint::ConstraintError, correlation::CorrelationError, properties::PropertyError,
};

/// Errors that can occur when analyzing a flat plate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlatPlateError {
    #[error("fluid property lookup failed")]
    Property(#[from] PropertyError),

    #[error(transparent)]
    Correlation(#[from] CorrelationError),

    /// A Reynolds number came out non-positive.
    #[error("non-physical flow")]
    NonPhysical(#[from] ConstraintError),

    /// A local analysis was requested off the plate.
    #[error("position {position:?} is not on a plate of length {length:?}")]
    PositionOutsidePlate { position: Length, length: Length },

    /// A profile needs at least two sample points.
    #[error("a profile needs at least 2 samples, got {samples}")]
    TooFewSamples { samples: usize },
}
