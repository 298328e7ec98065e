use tracing::debug;
use uom::si::f64::{HeatTransfer, Length};

use crate::support::{
    correlation::flat_plate::{self, CRITICAL_REYNOLDS, Local},
    dimensionless::Reynolds,
    properties::Extrapolation,
};

use super::{FlatPlateError, FlatPlateInput};

/// Profile sampling starts this fraction of the plate length from the
/// leading edge, where `h_x` is singular.
const START_FRACTION: f64 = 1e-3;

/// One point of a local coefficient profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Distance from the leading edge.
    pub position: Length,
    pub reynolds: Reynolds,
    pub turbulent: bool,
    pub coefficient: HeatTransfer,
}

/// Local convection coefficient along the plate.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Evenly spaced points from `L/1000` to `L`.
    pub points: Vec<ProfilePoint>,
    /// Transition position `x_c`, if it lies on the plate.
    pub transition: Option<Length>,
}

/// Samples `h_x` at `samples` evenly spaced positions.
///
/// Each point switches between the laminar and turbulent local forms at the
/// critical Reynolds number, with no Prandtl gate.
pub(super) fn sample(
    input: &FlatPlateInput,
    samples: usize,
    policy: Extrapolation,
) -> Result<Profile, FlatPlateError> {
    if samples < 2 {
        return Err(FlatPlateError::TooFewSamples { samples });
    }

    let properties = input.flow.film_properties(policy)?;
    let length = *input.length;
    let start = length * START_FRACTION;
    let step = (length - start) / (samples - 1) as f64;

    let points = (0..samples)
        .map(|i| -> Result<ProfilePoint, FlatPlateError> {
            let position = if i == samples - 1 {
                length
            } else {
                start + step * i as f64
            };
            let reynolds = input.flow.reynolds(&properties, position)?;
            let local = flat_plate::profile(reynolds, properties.prandtl);
            Ok(ProfilePoint {
                position,
                reynolds,
                turbulent: matches!(local, Local::Turbulent(_)),
                coefficient: local
                    .nusselt()
                    .coefficient(properties.conductivity, position),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let transition: Length = CRITICAL_REYNOLDS * properties.kinematic_viscosity / *input.flow.velocity;
    let transition = (transition <= length).then_some(transition);

    debug!(samples, on_plate = transition.is_some(), "flat plate: profile sampled");

    Ok(Profile { points, transition })
}
