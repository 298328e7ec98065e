//! Parallel flow over an isothermal flat plate.
//!
//! Properties are evaluated at the film temperature and the Reynolds number
//! is based on distance from the leading edge. [`FlatPlate`] gives the
//! plate-averaged coefficient and heat rate, [`FlatPlateLocal`] the local
//! coefficient and flux at one position, and [`FlatPlateProfile`] samples
//! the local coefficient along the plate.

mod error;
mod profile;

pub use error::FlatPlateError;
pub use profile::{Profile, ProfilePoint};

use tracing::warn;
use twine_core::Model;
use uom::si::f64::{Area, HeatFluxDensity, HeatTransfer, Length, Power};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    correlation::{
        Warning,
        flat_plate::{self, Average, Local, Regime},
    },
    dimensionless::{Nusselt, Reynolds},
    properties::{Extrapolation, FluidProperties},
};

use super::ExternalFlow;

/// A plate of length `L` in the flow direction and width `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatPlateInput {
    pub flow: ExternalFlow,
    pub length: Constrained<Length, StrictlyPositive>,
    pub width: Constrained<Length, StrictlyPositive>,
}

impl FlatPlateInput {
    #[must_use]
    pub fn area(&self) -> Area {
        *self.length * *self.width
    }
}

/// Heat rate split for a plate with a laminar leading section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixedSplit {
    /// Transition position `x_c`.
    pub critical_length: Length,
    /// Average coefficient over `[0, x_c]`.
    pub laminar_coefficient: HeatTransfer,
    pub laminar_heat_flow: Power,
    /// Whole-plate heat rate minus the laminar portion.
    pub turbulent_heat_flow: Power,
}

/// Plate-averaged results.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatPlateResults {
    /// Properties at the film temperature.
    pub properties: FluidProperties,
    pub reynolds: Reynolds,
    pub regime: Regime,
    pub correlation: Average,
    pub nusselt: Nusselt,
    pub coefficient: HeatTransfer,
    pub area: Area,
    /// Heat rate from the plate into the fluid, `h A (Ts − T∞)`.
    pub heat_flow: Power,
    /// Present when the plate is partly laminar.
    pub mixed: Option<MixedSplit>,
    pub warnings: Vec<Warning>,
}

/// Local results at one position on the plate.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalResults {
    pub position: Length,
    pub reynolds: Reynolds,
    pub correlation: Local,
    pub coefficient: HeatTransfer,
    /// `h_x (Ts − T∞)`.
    pub heat_flux: HeatFluxDensity,
    pub warnings: Vec<Warning>,
}

/// Plate-averaged convection.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatPlate {
    pub extrapolation: Extrapolation,
}

impl Model for FlatPlate {
    type Input = FlatPlateInput;
    type Output = FlatPlateResults;
    type Error = FlatPlateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        average(input, self.extrapolation)
    }
}

/// Input for [`FlatPlateLocal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalInput {
    pub plate: FlatPlateInput,
    /// Distance from the leading edge, `0 < x ≤ L`.
    pub position: Length,
}

/// Local convection at one position.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatPlateLocal {
    pub extrapolation: Extrapolation,
}

impl Model for FlatPlateLocal {
    type Input = LocalInput;
    type Output = LocalResults;
    type Error = FlatPlateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        local(&input.plate, input.position, self.extrapolation)
    }
}

/// Local coefficient profile along the plate.
#[derive(Debug, Clone, Copy)]
pub struct FlatPlateProfile {
    pub extrapolation: Extrapolation,
    pub samples: usize,
}

impl Default for FlatPlateProfile {
    fn default() -> Self {
        Self {
            extrapolation: Extrapolation::default(),
            samples: 100,
        }
    }
}

impl Model for FlatPlateProfile {
    type Input = FlatPlateInput;
    type Output = Profile;
    type Error = FlatPlateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        profile::sample(input, self.samples, self.extrapolation)
    }
}

fn log_warnings(warnings: &[Warning]) {
    for warning in warnings {
        warn!(%warning, "flat plate correlation");
    }
}

/// Computes the plate-averaged coefficient and heat rate.
///
/// # Errors
///
/// Returns a [`FlatPlateError`] if properties cannot be evaluated or no
/// correlation applies.
pub fn average(
    input: &FlatPlateInput,
    policy: Extrapolation,
) -> Result<FlatPlateResults, FlatPlateError> {
    let properties = input.flow.film_properties(policy)?;
    let length = *input.length;
    let reynolds = input.flow.reynolds(&properties, length)?;
    let prandtl = properties.prandtl;

    let warnings = flat_plate::warnings(reynolds, prandtl);
    log_warnings(&warnings);

    let correlation = flat_plate::average(reynolds, prandtl)?;
    let delta_t = input.flow.temperature_difference();
    let area = input.area();

    let (nusselt, mixed) = match correlation {
        Average::Laminar(nu) | Average::Turbulent(nu) => (nu, None),
        Average::Mixed {
            critical_fraction,
            laminar,
            total,
        } => {
            let critical_length = length * critical_fraction;
            let laminar_coefficient = laminar.coefficient(properties.conductivity, critical_length);
            let laminar_heat_flow =
                laminar_coefficient * (critical_length * *input.width) * delta_t;
            let total_heat_flow =
                total.coefficient(properties.conductivity, length) * area * delta_t;
            let split = MixedSplit {
                critical_length,
                laminar_coefficient,
                laminar_heat_flow,
                turbulent_heat_flow: total_heat_flow - laminar_heat_flow,
            };
            (total, Some(split))
        }
    };

    let coefficient = nusselt.coefficient(properties.conductivity, length);

    Ok(FlatPlateResults {
        properties,
        reynolds,
        regime: Regime::classify(reynolds),
        correlation,
        nusselt,
        coefficient,
        area,
        heat_flow: coefficient * area * delta_t,
        mixed,
        warnings,
    })
}

/// Computes the local coefficient and heat flux at `position`.
///
/// # Errors
///
/// Returns [`FlatPlateError::PositionOutsidePlate`] unless `0 < x ≤ L`, or
/// another [`FlatPlateError`] if properties or the correlation fail.
pub fn local(
    input: &FlatPlateInput,
    position: Length,
    policy: Extrapolation,
) -> Result<LocalResults, FlatPlateError> {
    let length = *input.length;
    if !(position.value > 0.0 && position <= length) {
        return Err(FlatPlateError::PositionOutsidePlate { position, length });
    }

    let properties = input.flow.film_properties(policy)?;
    let reynolds = input.flow.reynolds(&properties, position)?;

    let warnings = flat_plate::warnings(reynolds, properties.prandtl);
    log_warnings(&warnings);

    let correlation = flat_plate::local(reynolds, properties.prandtl)?;
    let coefficient = correlation
        .nusselt()
        .coefficient(properties.conductivity, position);

    Ok(LocalResults {
        position,
        reynolds,
        correlation,
        coefficient,
        heat_flux: coefficient * input.flow.temperature_difference(),
        warnings,
    })
}
