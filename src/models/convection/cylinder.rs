//! Cylinder in cross flow.

use std::f64::consts::PI;

use thiserror::Error;
use tracing::debug;
use twine_core::Model;
use uom::si::f64::{Area, HeatTransfer, Length, Power};

use crate::support::{
    constraint::{Constrained, ConstraintError, StrictlyPositive},
    correlation::{
        CorrelationError,
        cylinder::{CompactRow, CylinderCorrelation},
    },
    dimensionless::{Nusselt, Reynolds},
    properties::{Extrapolation, FluidProperties, PropertyError},
};

use super::ExternalFlow;

/// A cylinder of diameter `D` and length `L` with its axis normal to the flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderInput {
    pub flow: ExternalFlow,
    pub diameter: Constrained<Length, StrictlyPositive>,
    pub length: Constrained<Length, StrictlyPositive>,
}

/// Errors that can occur when analyzing a cylinder in cross flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CylinderError {
    #[error("fluid property lookup failed")]
    Property(#[from] PropertyError),

    #[error(transparent)]
    Correlation(#[from] CorrelationError),

    #[error("non-physical flow")]
    NonPhysical(#[from] ConstraintError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CylinderResults {
    /// Properties at the film temperature.
    pub properties: FluidProperties,
    pub reynolds: Reynolds,
    pub correlation: CylinderCorrelation,
    /// Table row used by the compact correlation.
    pub compact_row: Option<CompactRow>,
    pub nusselt: Nusselt,
    pub coefficient: HeatTransfer,
    /// Lateral surface area `πDL`.
    pub area: Area,
    pub heat_flow: Power,
}

/// Average convection over a cylinder in cross flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cylinder {
    pub correlation: CylinderCorrelation,
    pub extrapolation: Extrapolation,
}

impl Model for Cylinder {
    type Input = CylinderInput;
    type Output = CylinderResults;
    type Error = CylinderError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        cross_flow(input, self.correlation, self.extrapolation)
    }
}

/// Computes the average coefficient and heat rate with the chosen correlation.
///
/// # Errors
///
/// Returns a [`CylinderError`] if properties cannot be evaluated or the
/// correlation does not apply.
pub fn cross_flow(
    input: &CylinderInput,
    correlation: CylinderCorrelation,
    policy: Extrapolation,
) -> Result<CylinderResults, CylinderError> {
    let properties = input.flow.film_properties(policy)?;
    let diameter = *input.diameter;
    let reynolds = input.flow.reynolds(&properties, diameter)?;

    let (nusselt, compact_row) = correlation.evaluate(reynolds, properties.prandtl)?;

    let coefficient = nusselt.coefficient(properties.conductivity, diameter);
    let area = PI * diameter * *input.length;
    let heat_flow = coefficient * area * input.flow.temperature_difference();

    debug!(
        ?correlation,
        re = *reynolds,
        nu = *nusselt,
        "cylinder in cross flow"
    );

    Ok(CylinderResults {
        properties,
        reynolds,
        correlation,
        compact_row,
        nusselt,
        coefficient,
        area,
        heat_flow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{ThermodynamicTemperature, Velocity},
        heat_transfer::watt_per_square_meter_kelvin,
        length::{meter, millimeter},
        power::watt,
        thermodynamic_temperature::degree_celsius,
        velocity::meter_per_second,
    };

    use crate::support::{
        correlation::cylinder,
        properties::{Fluid, FluidSelection},
    };

    fn wire(velocity: f64) -> CylinderInput {
        CylinderInput {
            flow: ExternalFlow::new(
                FluidSelection::new(Fluid::Air),
                StrictlyPositive::new(Velocity::new::<meter_per_second>(velocity)).unwrap(),
                ThermodynamicTemperature::new::<degree_celsius>(10.0),
                ThermodynamicTemperature::new::<degree_celsius>(30.0),
            ),
            diameter: StrictlyPositive::new(Length::new::<millimeter>(10.0)).unwrap(),
            length: StrictlyPositive::new(Length::new::<meter>(2.0)).unwrap(),
        }
    }

    #[test]
    fn churchill_bernstein_heat_flow() {
        let results = Cylinder::default().call(&wire(5.0)).unwrap();

        // Air at a 20 °C film temperature.
        let re = 5.0 * 0.01 / 1.516e-5;
        assert_relative_eq!(*results.reynolds, re, max_relative = 1e-9);
        assert!(results.compact_row.is_none());

        let expected_nu = cylinder::churchill_bernstein(
            Reynolds::new(re).unwrap(),
            results.properties.prandtl,
        )
        .unwrap();
        assert_relative_eq!(*results.nusselt, *expected_nu, max_relative = 1e-9);

        let h = *results.nusselt * 0.02514 / 0.01;
        let area = PI * 0.01 * 2.0;
        assert_relative_eq!(
            results.coefficient.get::<watt_per_square_meter_kelvin>(),
            h,
            max_relative = 1e-9
        );
        assert_relative_eq!(results.area.get::<square_meter>(), area, max_relative = 1e-12);
        assert_relative_eq!(results.heat_flow.get::<watt>(), h * area * 20.0, max_relative = 1e-9);
    }

    #[test]
    fn compact_correlation_reports_row() {
        let model = Cylinder {
            correlation: CylinderCorrelation::Compact,
            ..Cylinder::default()
        };
        let results = model.call(&wire(5.0)).unwrap();

        // Re ≈ 3298 falls in the 40-4000 row.
        let row = results.compact_row.unwrap();
        assert_relative_eq!(row.c, 0.683);
        assert_relative_eq!(row.m, 0.466);
        assert_relative_eq!(
            *results.nusselt,
            0.683 * results.reynolds.powf(0.466) * results.properties.prandtl.cbrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn compact_correlation_outside_table() {
        let mut input = wire(200.0);
        input.diameter = StrictlyPositive::new(Length::new::<meter>(0.5)).unwrap();

        let err = cross_flow(&input, CylinderCorrelation::Compact, Extrapolation::Clamp)
            .unwrap_err();
        assert!(matches!(
            err,
            CylinderError::Correlation(CorrelationError::CompactOutOfRange { .. })
        ));
    }
}
