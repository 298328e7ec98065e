//! Forced convection inside a tube with a constant wall temperature.
//!
//! The inlet and outlet temperatures are both given. Properties are taken at
//! the bulk mean temperature and the heat rate uses the log-mean temperature
//! difference. The energy balance and an outlet temperature predicted from
//! the coefficient are reported alongside, so the given outlet can be
//! checked for consistency.

mod error;
mod lmtd;

pub use error::InternalFlowError;

use std::f64::consts::PI;

use tracing::{debug, warn};
use twine_core::Model;
use uom::si::{
    f64::{
        Area, HeatTransfer, Length, MassRate, Power, TemperatureInterval, ThermodynamicTemperature,
        Velocity,
    },
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    correlation::{
        Warning,
        tube::{self, Direction, FlowRegime, TubeCorrelation},
    },
    dimensionless::{Nusselt, Reynolds},
    properties::{Extrapolation, FluidProperties, FluidSelection},
    units::{TemperatureDifference, film_temperature},
};

/// A fluid stream in a circular tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InternalFlowInput {
    pub fluid: FluidSelection,
    /// Mean velocity over the cross section.
    pub velocity: Constrained<Velocity, StrictlyPositive>,
    /// Inner diameter.
    pub diameter: Constrained<Length, StrictlyPositive>,
    pub length: Constrained<Length, StrictlyPositive>,
    pub inlet_temperature: ThermodynamicTemperature,
    pub outlet_temperature: ThermodynamicTemperature,
    pub wall_temperature: ThermodynamicTemperature,
}

impl InternalFlowInput {
    /// Whether the wall heats the fluid, judged against the inlet.
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.wall_temperature > self.inlet_temperature {
            Direction::Heating
        } else {
            Direction::Cooling
        }
    }

    /// Flow cross section `πD²/4`.
    #[must_use]
    pub fn flow_area(&self) -> Area {
        0.25 * PI * *self.diameter * *self.diameter
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InternalFlowResults {
    /// Properties at the bulk mean temperature.
    pub properties: FluidProperties,
    pub log_mean_difference: TemperatureInterval,
    pub reynolds: Reynolds,
    pub regime: FlowRegime,
    pub direction: Direction,
    pub correlation: TubeCorrelation,
    pub nusselt: Nusselt,
    pub coefficient: HeatTransfer,
    /// Wetted surface `πDL`.
    pub area: Area,

    /// `h A ΔT_lm`, positive when the wall heats the fluid.
    pub heat_flow: Power,

    pub mass_flow: MassRate,

    /// `ṁ cp (Te − Ti)` from the given temperatures.
    pub energy_balance: Power,

    /// `Ts − (Ts − Ti) exp(−hA / ṁcp)`.
    pub predicted_outlet: ThermodynamicTemperature,

    pub warnings: Vec<Warning>,
}

/// Internal flow with a constant wall temperature.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternalFlow {
    pub extrapolation: Extrapolation,
}

impl Model for InternalFlow {
    type Input = InternalFlowInput;
    type Output = InternalFlowResults;
    type Error = InternalFlowError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        constant_wall_temperature(input, self.extrapolation)
    }
}

/// Analyzes a tube with a constant wall temperature.
///
/// # Errors
///
/// Returns [`InternalFlowError::WallTemperatureCrossed`] if the inlet or
/// outlet is at or beyond the wall temperature, or another
/// [`InternalFlowError`] if the properties or correlation fail.
pub fn constant_wall_temperature(
    input: &InternalFlowInput,
    policy: Extrapolation,
) -> Result<InternalFlowResults, InternalFlowError> {
    let log_mean_difference = lmtd::log_mean_difference(
        input.inlet_temperature,
        input.outlet_temperature,
        input.wall_temperature,
    )?;

    let bulk = film_temperature(input.inlet_temperature, input.outlet_temperature);
    let properties = input.fluid.properties(bulk, policy)?;

    let diameter = *input.diameter;
    let reynolds =
        Reynolds::from_flow(*input.velocity, diameter, properties.kinematic_viscosity)?;
    let regime = FlowRegime::classify(reynolds);
    let direction = input.direction();

    let warnings = tube::warnings(reynolds, properties.prandtl);
    for warning in &warnings {
        warn!(%warning, "tube correlation");
    }

    let (nusselt, correlation) = tube::nusselt(reynolds, properties.prandtl, direction)?;
    let coefficient = nusselt.coefficient(properties.conductivity, diameter);
    let area = PI * diameter * *input.length;

    let heat_flow = match direction {
        Direction::Heating => coefficient * area * log_mean_difference,
        Direction::Cooling => -(coefficient * area * log_mean_difference),
    };

    let mass_flow: MassRate = properties.density * *input.velocity * input.flow_area();
    let capacitance = mass_flow * properties.specific_heat;
    let energy_balance = capacitance
        * input
            .outlet_temperature
            .minus(input.inlet_temperature);

    let ntu = (coefficient * area / capacitance).get::<ratio>();
    let t_wall = input.wall_temperature.get::<kelvin>();
    let t_in = input.inlet_temperature.get::<kelvin>();
    let predicted_outlet =
        ThermodynamicTemperature::new::<kelvin>(t_wall - (t_wall - t_in) * (-ntu).exp());

    debug!(
        re = *reynolds,
        ?regime,
        ?direction,
        nu = *nusselt,
        ntu,
        "internal flow solved"
    );

    Ok(InternalFlowResults {
        properties,
        log_mean_difference,
        reynolds,
        regime,
        direction,
        correlation,
        nusselt,
        coefficient,
        area,
        heat_flow,
        mass_flow,
        energy_balance,
        predicted_outlet,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::meter, power::watt, temperature_interval, thermodynamic_temperature::degree_celsius,
        velocity::meter_per_second,
    };

    use crate::support::properties::Fluid;

    fn water_tube(velocity: f64, inlet: f64, outlet: f64, wall: f64) -> InternalFlowInput {
        let celsius = |value: f64| ThermodynamicTemperature::new::<degree_celsius>(value);
        InternalFlowInput {
            fluid: FluidSelection::new(Fluid::Water),
            velocity: StrictlyPositive::new(Velocity::new::<meter_per_second>(velocity)).unwrap(),
            diameter: StrictlyPositive::new(Length::new::<meter>(0.02)).unwrap(),
            length: StrictlyPositive::new(Length::new::<meter>(5.0)).unwrap(),
            inlet_temperature: celsius(inlet),
            outlet_temperature: celsius(outlet),
            wall_temperature: celsius(wall),
        }
    }

    #[test]
    fn turbulent_heating() {
        let results = InternalFlow::default()
            .call(&water_tube(0.5, 20.0, 40.0, 80.0))
            .unwrap();

        // Water at a 30 °C bulk temperature.
        let nu = 0.000798 / 996.0;
        let re = 0.5 * 0.02 / nu;
        assert_relative_eq!(*results.reynolds, re, max_relative = 1e-9);
        assert_eq!(results.regime, FlowRegime::Turbulent);
        assert_eq!(results.direction, Direction::Heating);
        assert_eq!(results.correlation, TubeCorrelation::DittusBoelter { exponent: 0.4 });
        assert_relative_eq!(
            *results.nusselt,
            0.023 * re.powf(0.8) * 5.4238_f64.powf(0.4),
            max_relative = 1e-9
        );

        let lmtd = 20.0 / 1.5_f64.ln();
        assert_relative_eq!(
            results.log_mean_difference.get::<temperature_interval::kelvin>(),
            lmtd,
            max_relative = 1e-9
        );

        let h = *results.nusselt * 0.615 / 0.02;
        let area = PI * 0.02 * 5.0;
        assert_relative_eq!(results.heat_flow.get::<watt>(), h * area * lmtd, max_relative = 1e-9);

        let m_dot = 996.0 * 0.5 * PI * 0.0001;
        assert_relative_eq!(results.mass_flow.value, m_dot, max_relative = 1e-9);
        assert_relative_eq!(
            results.energy_balance.get::<watt>(),
            m_dot * 4180.0 * 20.0,
            max_relative = 1e-9
        );

        let predicted = 80.0 - 60.0 * (-h * area / (m_dot * 4180.0)).exp();
        assert_relative_eq!(
            results.predicted_outlet.get::<degree_celsius>(),
            predicted,
            max_relative = 1e-9
        );
        assert!(results.warnings.is_empty());
    }

    #[test]
    fn laminar_flow_uses_constant_nusselt() {
        let results = InternalFlow::default()
            .call(&water_tube(0.05, 20.0, 40.0, 80.0))
            .unwrap();
        assert_eq!(results.regime, FlowRegime::Laminar);
        assert_eq!(results.correlation, TubeCorrelation::FullyDevelopedLaminar);
        assert_relative_eq!(*results.nusselt, 3.66);
    }

    #[test]
    fn cooling_gives_negative_heat_flow() {
        let results = InternalFlow::default()
            .call(&water_tube(0.5, 60.0, 40.0, 10.0))
            .unwrap();
        assert_eq!(results.direction, Direction::Cooling);
        assert_eq!(results.correlation, TubeCorrelation::DittusBoelter { exponent: 0.3 });
        assert!(results.heat_flow.get::<watt>() < 0.0);
        assert!(results.energy_balance.get::<watt>() < 0.0);
        assert!(results.predicted_outlet.get::<degree_celsius>() > 10.0);
    }

    #[test]
    fn transitional_flow_is_flagged() {
        // Re ≈ 4990 at 30 °C.
        let results = InternalFlow::default()
            .call(&water_tube(0.2, 20.0, 40.0, 80.0))
            .unwrap();
        assert_eq!(results.regime, FlowRegime::Transitional);
        assert!(
            results
                .warnings
                .iter()
                .any(|w| matches!(w, Warning::TransitionalFlow { .. }))
        );
    }

    #[test]
    fn outlet_beyond_wall_is_rejected() {
        let err = constant_wall_temperature(&water_tube(0.5, 20.0, 85.0, 80.0), Extrapolation::Clamp)
            .unwrap_err();
        assert!(matches!(err, InternalFlowError::WallTemperatureCrossed { .. }));
    }
}
