//! Units: conversions at the edges, SI quantities everywhere else.
//!
//! This crate uses [`uom`] for all physical quantities. Values typed in by a
//! user arrive as a bare number plus a unit choice (`"ft"`, `"°F"`,
//! `"BTU/(h·ft·°F)"`, ...). The unit enums in this module turn that pair into
//! a quantity once, and turn result quantities back into numbers in the
//! user's output units once. Everything in between is unit-agnostic.
//!
//! ```
//! use twine_heat::support::units::{LengthUnit, TemperatureUnit};
//! use uom::si::{length::meter, thermodynamic_temperature::degree_celsius};
//!
//! let thickness = LengthUnit::Inch.quantity(2.0);
//! assert!((thickness.get::<meter>() - 0.0508).abs() < 1e-12);
//!
//! let t = TemperatureUnit::Fahrenheit.quantity(212.0).unwrap();
//! assert!((t.get::<degree_celsius>() - 100.0).abs() < 1e-9);
//! ```
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts two absolute temperatures and
//! returns a [`TemperatureInterval`](uom::si::f64::TemperatureInterval), and
//! [`film_temperature`] averages two absolute temperatures.

mod conversion;
mod quantities;
mod temperature_difference;

pub use conversion::{
    AreaUnit, ConductivityUnit, ConvectionUnit, HeatFlowUnit, HeatFluxUnit, LengthUnit,
    PressureUnit, TemperatureUnit, UnitError, UnitSymbol, VelocityUnit,
};
pub use quantities::{KinematicViscosity, ThermalResistance};
pub use temperature_difference::{TemperatureDifference, film_temperature};
