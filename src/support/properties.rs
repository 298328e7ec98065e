//! Thermophysical properties of solids and fluids.
//!
//! Fluids are described by immutable tables of saturated or atmospheric
//! states. A lookup linearly interpolates every column at the requested
//! temperature. Solids carry a single room-temperature conductivity.
//!
//! # Example
//!
//! ```
//! use twine_heat::support::properties::{Extrapolation, Fluid, FluidSelection};
//! use uom::si::{
//!     f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius,
//! };
//!
//! let air = FluidSelection::new(Fluid::Air);
//! let props = air
//!     .properties(
//!         ThermodynamicTemperature::new::<degree_celsius>(20.0),
//!         Extrapolation::Error,
//!     )
//!     .unwrap();
//!
//! assert!((*props.prandtl - 0.7309).abs() < 1e-12);
//! assert!(!props.clamped);
//! ```

mod error;
mod fluid;
mod material;
mod table;

pub use error::PropertyError;
pub use fluid::{Fluid, Phase};
pub use material::{MATERIALS, Material};
pub use table::{Extrapolation, Lookup, OutOfTable, PropertyRow, PropertyTable};

use tracing::{debug, warn};
use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{dimensionless::Prandtl, units::KinematicViscosity};

/// Pressure at which the air table is tabulated.
pub const REFERENCE_PRESSURE_PA: f64 = 101_325.0;

/// A fluid plus the options that select which table, and which correction, applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidSelection {
    pub fluid: Fluid,
    /// Saturation phase; two-phase fluids use the liquid table when `None`.
    pub phase: Option<Phase>,
    /// Absolute pressure for the air correction; `None` means 1 atm.
    pub pressure: Option<Pressure>,
}

/// Transport properties evaluated at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// Temperature the properties were requested at.
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
    pub conductivity: ThermalConductivity,
    pub viscosity: DynamicViscosity,
    pub kinematic_viscosity: KinematicViscosity,
    pub prandtl: Prandtl,
    /// The temperature was outside the table and edge values were used.
    pub clamped: bool,
}

impl FluidSelection {
    #[must_use]
    pub fn new(fluid: Fluid) -> Self {
        Self {
            fluid,
            phase: None,
            pressure: None,
        }
    }

    #[must_use]
    pub fn with_phase(self, phase: Phase) -> Self {
        Self {
            phase: Some(phase),
            ..self
        }
    }

    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self {
            pressure: Some(pressure),
            ..self
        }
    }

    /// Evaluates the selected fluid at `temperature`.
    ///
    /// For air at a pressure `P` other than 1 atm, kinematic viscosity is
    /// scaled by `101.325 kPa / P` and density by `P / 101.325 kPa`, so that
    /// `ρVL/μ` and `VL/ν` give the same Reynolds number.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the phase or pressure does not apply to
    /// the fluid, the pressure is not positive, or the temperature is out of
    /// range under [`Extrapolation::Error`].
    pub fn properties(
        &self,
        temperature: ThermodynamicTemperature,
        policy: Extrapolation,
    ) -> Result<FluidProperties, PropertyError> {
        let pressure_ratio = self.pressure_ratio()?;
        let table = self.fluid.table(self.phase)?;
        let celsius = temperature.get::<degree_celsius>();

        let Lookup { row, clamped } =
            table
                .lookup(celsius, policy)
                .map_err(|err| PropertyError::OutOfRange {
                    fluid: self.fluid,
                    temperature: err.temperature,
                    min: err.min,
                    max: err.max,
                })?;

        if clamped {
            let (min, max) = table.range();
            warn!(
                fluid = %self.fluid,
                temperature_c = celsius,
                min,
                max,
                "temperature outside property table, using edge values"
            );
        }

        let density = row.density * pressure_ratio;
        let nu = row.nu() / pressure_ratio;
        debug!(
            fluid = %self.fluid,
            temperature_c = celsius,
            density,
            nu,
            prandtl = row.prandtl,
            "fluid properties"
        );

        Ok(FluidProperties {
            temperature,
            density: MassDensity::new::<kilogram_per_cubic_meter>(density),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
                row.specific_heat,
            ),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(row.conductivity),
            viscosity: DynamicViscosity::new::<pascal_second>(row.viscosity),
            kinematic_viscosity: KinematicViscosity::new::<square_meter_per_second>(nu),
            prandtl: Prandtl::new(row.prandtl)
                .expect("tabulated Prandtl numbers are positive and interpolation preserves that"),
            clamped,
        })
    }

    /// Returns `P / P_ref`, which is 1 unless a pressure applies.
    fn pressure_ratio(&self) -> Result<f64, PropertyError> {
        let Some(pressure) = self.pressure else {
            return Ok(1.0);
        };

        if self.fluid != Fluid::Air {
            return Err(PropertyError::PressureCorrectionUnsupported { fluid: self.fluid });
        }

        let pascals = pressure.get::<pascal>();
        if !(pascals.is_finite() && pascals > 0.0) {
            return Err(PropertyError::InvalidPressure { pascals });
        }

        Ok(pascals / REFERENCE_PRESSURE_PA)
    }
}
