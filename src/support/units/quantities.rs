use uom::{
    si::{ISQ, Quantity, SI, f64::DiffusionCoefficient},
    typenum::{N1, N2, P1, P3, Z0},
};

/// Thermal resistance, K/W in SI.
///
/// [`uom`] has no unit module for this dimension, so values are built from
/// arithmetic on other quantities (for example `1.0 / (h * area)`) and read
/// back through the SI `value` field.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Kinematic viscosity, m²/s in SI.
///
/// [`uom`] files this dimension under diffusion coefficient; build and read
/// values with `diffusion_coefficient::square_meter_per_second`.
pub type KinematicViscosity = DiffusionCoefficient;
