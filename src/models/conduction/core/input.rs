use std::fmt;

use uom::si::f64::{HeatTransfer, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{ConductionError, Geometry, Layer};

/// Side of the wall a boundary condition applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Inner,
    Outer,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inner => "inner",
            Self::Outer => "outer",
        })
    }
}

/// A steady one-dimensional conduction problem.
///
/// The boundary temperatures are fluid temperatures when the matching
/// surface has convection, and surface temperatures otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductionInput {
    pub geometry: Geometry,
    /// Layers ordered from the inner surface outward.
    pub layers: Vec<Layer>,
    pub inner_temperature: ThermodynamicTemperature,
    pub outer_temperature: ThermodynamicTemperature,
    pub inner_convection: Option<Constrained<HeatTransfer, StrictlyPositive>>,
    pub outer_convection: Option<Constrained<HeatTransfer, StrictlyPositive>>,
}

impl ConductionInput {
    /// Creates a problem without surface convection.
    #[must_use]
    pub fn new(
        geometry: Geometry,
        layers: Vec<Layer>,
        inner_temperature: ThermodynamicTemperature,
        outer_temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            geometry,
            layers,
            inner_temperature,
            outer_temperature,
            inner_convection: None,
            outer_convection: None,
        }
    }

    /// Sets the convection coefficient on one surface.
    ///
    /// A coefficient of zero removes convection from that surface.
    ///
    /// # Errors
    ///
    /// Returns [`ConductionError::InvalidConvection`] for a negative or `NaN`
    /// coefficient.
    pub fn with_convection(
        mut self,
        surface: Surface,
        coefficient: HeatTransfer,
    ) -> Result<Self, ConductionError> {
        let convection = if coefficient.value == 0.0 {
            None
        } else {
            Some(
                StrictlyPositive::new(coefficient)
                    .map_err(|source| ConductionError::InvalidConvection { surface, source })?,
            )
        };

        match surface {
            Surface::Inner => self.inner_convection = convection,
            Surface::Outer => self.outer_convection = convection,
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        area::square_meter, f64::Area, heat_transfer::watt_per_square_meter_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::constraint::ConstraintError;

    fn input() -> ConductionInput {
        ConductionInput::new(
            Geometry::plane(Area::new::<square_meter>(1.0)).unwrap(),
            Vec::new(),
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
            ThermodynamicTemperature::new::<degree_celsius>(0.0),
        )
    }

    #[test]
    fn zero_coefficient_means_no_convection() {
        let h = |value: f64| HeatTransfer::new::<watt_per_square_meter_kelvin>(value);

        let with = input().with_convection(Surface::Outer, h(25.0)).unwrap();
        assert!(with.outer_convection.is_some());

        let without = with.with_convection(Surface::Outer, h(0.0)).unwrap();
        assert!(without.outer_convection.is_none());
        assert!(without.inner_convection.is_none());
    }

    #[test]
    fn negative_coefficient_is_rejected() {
        let err = input()
            .with_convection(
                Surface::Inner,
                HeatTransfer::new::<watt_per_square_meter_kelvin>(-1.0),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ConductionError::InvalidConvection {
                surface: Surface::Inner,
                source: ConstraintError::Negative
            }
        );
    }
}
