//! Iterative sizing of the outermost layer.
//!
//! Finds the outer-layer thickness that produces a target heat flow
//! magnitude, holding everything else in the conduction problem fixed.

mod config;
mod error;
mod problem;

pub use config::SizingConfig;
pub use error::SizingError;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, Power},
    length::meter,
    power::watt,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{ConductionInput, ConductionResults};

use problem::{OuterLayerModel, OuterLayerProblem};

/// A conduction solution together with the outer-layer thickness that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedConduction {
    pub thickness: Length,
    pub results: ConductionResults,
}

/// Solves for the outermost layer thickness that gives `|q| = target`.
///
/// The thickness of the last layer in `input` is ignored and replaced by the
/// solved value. The heat flow must cross the target somewhere in
/// `[lower, upper]`; for radial geometries below the critical radius the
/// heat flow is not monotonic in thickness, so the bracket matters.
///
/// # Errors
///
/// Returns [`SizingError`] if the bracket is invalid or does not contain the
/// target, if the conduction problem is invalid, or if the solver fails to
/// converge.
#[allow(clippy::float_cmp)]
pub(super) fn size_outer_layer(
    input: &ConductionInput,
    target: Constrained<Power, StrictlyPositive>,
    bracket: [Length; 2],
    config: SizingConfig,
) -> Result<SizedConduction, SizingError> {
    let [lower, upper] = bracket;
    if !(lower.get::<meter>() > 0.0 && lower < upper) {
        return Err(SizingError::InvalidBracket { lower, upper });
    }

    let model = OuterLayerModel::new(input);
    let problem = OuterLayerProblem::new(*target);

    let at_lower = model.call(&lower)?;
    let at_upper = model.call(&upper)?;
    let (r_lower, r_upper) = (problem.residual(&at_lower), problem.residual(&at_upper));
    if r_lower == 0.0 {
        return Ok(at_lower);
    }
    if r_upper == 0.0 {
        return Ok(at_upper);
    }
    if r_lower.signum() == r_upper.signum() {
        return Err(SizingError::NotBracketed {
            target: *target,
            at_lower: at_lower.results.heat_flow.abs(),
            at_upper: at_upper.results.heat_flow.abs(),
        });
    }

    let solution = bisection::solve(
        &model,
        &problem,
        [lower.get::<meter>(), upper.get::<meter>()],
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(SizingError::MaxIters {
            residual: Power::new::<watt>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, HeatTransfer, ThermalConductivity, ThermodynamicTemperature},
        heat_transfer::watt_per_square_meter_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::{degree_celsius, kelvin},
    };

    use crate::models::conduction::core::{Geometry, Layer, Surface};

    fn wall() -> ConductionInput {
        ConductionInput::new(
            Geometry::plane(Area::new::<square_meter>(1.0)).unwrap(),
            vec![
                Layer::new(
                    "concrete",
                    Length::new::<meter>(0.2),
                    ThermalConductivity::new::<watt_per_meter_kelvin>(1.4),
                )
                .unwrap(),
                Layer::new(
                    "insulation",
                    Length::new::<meter>(0.01),
                    ThermalConductivity::new::<watt_per_meter_kelvin>(0.04),
                )
                .unwrap(),
            ],
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
            ThermodynamicTemperature::new::<degree_celsius>(0.0),
        )
        .with_convection(
            Surface::Outer,
            HeatTransfer::new::<watt_per_square_meter_kelvin>(25.0),
        )
        .unwrap()
    }

    #[test]
    fn finds_insulation_thickness_for_target_loss() {
        // R_total = 0.2/1.4 + t/0.04 + 1/25 must equal 20 K / 10 W = 2 K/W.
        let expected = (2.0 - 0.2 / 1.4 - 0.04) * 0.04;

        let sized = size_outer_layer(
            &wall(),
            StrictlyPositive::new(Power::new::<watt>(10.0)).unwrap(),
            [Length::new::<meter>(0.001), Length::new::<meter>(1.0)],
            SizingConfig::default(),
        )
        .unwrap();

        assert_relative_eq!(sized.thickness.get::<meter>(), expected, epsilon = 1e-8);
        assert_relative_eq!(sized.results.heat_flow.get::<watt>(), 10.0, epsilon = 1e-6);
    }

    #[test]
    fn unreachable_target_is_not_bracketed() {
        let err = size_outer_layer(
            &wall(),
            StrictlyPositive::new(Power::new::<watt>(1000.0)).unwrap(),
            [Length::new::<meter>(0.001), Length::new::<meter>(1.0)],
            SizingConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SizingError::NotBracketed { .. }));
    }

    #[test]
    fn reversed_bracket_is_rejected() {
        let err = size_outer_layer(
            &wall(),
            StrictlyPositive::new(Power::new::<watt>(10.0)).unwrap(),
            [Length::new::<meter>(0.5), Length::new::<meter>(0.1)],
            SizingConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SizingError::InvalidBracket { .. }));
    }

    #[test]
    fn root_on_a_bracket_end_is_returned() {
        // q = 20 K / (t / 1 W/K·m) hits 10 W at exactly t = 2 m.
        let slab = ConductionInput::new(
            Geometry::plane(Area::new::<square_meter>(1.0)).unwrap(),
            vec![
                Layer::new(
                    "slab",
                    Length::new::<meter>(1.0),
                    ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
                )
                .unwrap(),
            ],
            ThermodynamicTemperature::new::<kelvin>(300.0),
            ThermodynamicTemperature::new::<kelvin>(280.0),
        );
        let target = StrictlyPositive::new(Power::new::<watt>(10.0)).unwrap();

        for bracket in [[1.0, 2.0], [2.0, 4.0]] {
            let sized = size_outer_layer(
                &slab,
                target,
                bracket.map(Length::new::<meter>),
                SizingConfig::default(),
            )
            .unwrap();
            assert_relative_eq!(sized.thickness.get::<meter>(), 2.0, epsilon = 1e-12);
            assert_relative_eq!(sized.results.heat_flow.get::<watt>(), 10.0, epsilon = 1e-9);
        }
    }
}
