use uom::si::f64::{Length, TemperatureInterval, ThermodynamicTemperature, Velocity};

use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    dimensionless::Reynolds,
    properties::{Extrapolation, FluidProperties, FluidSelection, PropertyError},
    units::{TemperatureDifference, film_temperature},
};

/// A uniform free stream passing an isothermal surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExternalFlow {
    pub fluid: FluidSelection,
    pub velocity: Constrained<Velocity, StrictlyPositive>,
    pub free_stream_temperature: ThermodynamicTemperature,
    pub surface_temperature: ThermodynamicTemperature,
}

impl ExternalFlow {
    #[must_use]
    pub fn new(
        fluid: FluidSelection,
        velocity: Constrained<Velocity, StrictlyPositive>,
        free_stream_temperature: ThermodynamicTemperature,
        surface_temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            fluid,
            velocity,
            free_stream_temperature,
            surface_temperature,
        }
    }

    /// Mean of the surface and free-stream temperatures.
    #[must_use]
    pub fn film_temperature(&self) -> ThermodynamicTemperature {
        film_temperature(self.surface_temperature, self.free_stream_temperature)
    }

    /// Fluid properties at the film temperature.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the fluid cannot be evaluated there.
    pub fn film_properties(&self, policy: Extrapolation) -> Result<FluidProperties, PropertyError> {
        self.fluid.properties(self.film_temperature(), policy)
    }

    /// `Ts − T∞`; positive when the surface heats the fluid.
    #[must_use]
    pub fn temperature_difference(&self) -> TemperatureInterval {
        self.surface_temperature.minus(self.free_stream_temperature)
    }

    /// Reynolds number based on `length`.
    pub(super) fn reynolds(
        &self,
        properties: &FluidProperties,
        length: Length,
    ) -> ConstraintResult<Reynolds> {
        Reynolds::from_flow(*self.velocity, length, properties.kinematic_viscosity)
    }
}
