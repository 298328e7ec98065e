use thiserror::Error;

use super::{Fluid, Phase};

/// Errors that may occur when looking up material or fluid properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// The temperature is outside the fluid's table and extrapolation is disabled.
    #[error("{fluid}: {temperature} °C is outside the tabulated range [{min}, {max}] °C")]
    OutOfRange {
        fluid: Fluid,
        temperature: f64,
        min: f64,
        max: f64,
    },

    /// A phase was given for a fluid with a single table.
    #[error("{fluid} has no {phase} table; phase selection applies to two-phase fluids only")]
    PhaseNotApplicable { fluid: Fluid, phase: Phase },

    /// A pressure was given for a fluid other than air.
    #[error("pressure correction is only available for air, not {fluid}")]
    PressureCorrectionUnsupported { fluid: Fluid },

    /// The pressure is zero, negative, or not a number.
    #[error("invalid pressure: {pascals} Pa")]
    InvalidPressure { pascals: f64 },

    /// No solid with this name is tabulated.
    #[error("unknown material `{name}`")]
    UnknownMaterial { name: String },

    /// No fluid with this name is tabulated.
    #[error("unknown fluid `{name}`")]
    UnknownFluid { name: String },
}
