//! Dry air at 1 atm, -50 °C to 500 °C.
//!
//! Kinematic viscosity is tabulated rather than derived so that Reynolds
//! numbers match the published values exactly at the nodes.

use crate::support::properties::table::PropertyRow;

/// Air at 101.325 kPa.
pub(super) const GAS: &[PropertyRow] = &[
    PropertyRow::new(-50.0, 1.582, 999.0, 0.02008, 1.474e-5, 0.744)
        .with_kinematic_viscosity(9.319e-6),
    PropertyRow::new(-40.0, 1.514, 1002.0, 0.02057, 1.527e-5, 0.7436)
        .with_kinematic_viscosity(1.008e-5),
    PropertyRow::new(-20.0, 1.394, 1005.0, 0.02211, 1.63e-5, 0.7408)
        .with_kinematic_viscosity(1.169e-5),
    PropertyRow::new(0.0, 1.292, 1006.0, 0.02364, 1.729e-5, 0.7362)
        .with_kinematic_viscosity(1.338e-5),
    PropertyRow::new(10.0, 1.246, 1006.0, 0.02439, 1.778e-5, 0.7336)
        .with_kinematic_viscosity(1.426e-5),
    PropertyRow::new(20.0, 1.204, 1007.0, 0.02514, 1.825e-5, 0.7309)
        .with_kinematic_viscosity(1.516e-5),
    PropertyRow::new(25.0, 1.184, 1007.0, 0.02551, 1.849e-5, 0.7296)
        .with_kinematic_viscosity(1.562e-5),
    PropertyRow::new(30.0, 1.164, 1007.0, 0.02588, 1.872e-5, 0.7282)
        .with_kinematic_viscosity(1.608e-5),
    PropertyRow::new(40.0, 1.127, 1007.0, 0.02662, 1.918e-5, 0.7255)
        .with_kinematic_viscosity(1.702e-5),
    PropertyRow::new(50.0, 1.092, 1007.0, 0.02735, 1.963e-5, 0.7228)
        .with_kinematic_viscosity(1.798e-5),
    PropertyRow::new(60.0, 1.059, 1007.0, 0.02808, 2.008e-5, 0.7202)
        .with_kinematic_viscosity(1.896e-5),
    PropertyRow::new(80.0, 0.9994, 1008.0, 0.02953, 2.096e-5, 0.7154)
        .with_kinematic_viscosity(2.097e-5),
    PropertyRow::new(100.0, 0.9458, 1009.0, 0.03095, 2.181e-5, 0.7111)
        .with_kinematic_viscosity(2.306e-5),
    PropertyRow::new(120.0, 0.8977, 1011.0, 0.03235, 2.264e-5, 0.7073)
        .with_kinematic_viscosity(2.522e-5),
    PropertyRow::new(150.0, 0.8343, 1014.0, 0.03443, 2.385e-5, 0.7023)
        .with_kinematic_viscosity(2.859e-5),
    PropertyRow::new(200.0, 0.7459, 1023.0, 0.03779, 2.577e-5, 0.6974)
        .with_kinematic_viscosity(3.455e-5),
    PropertyRow::new(250.0, 0.6746, 1033.0, 0.04104, 2.76e-5, 0.6946)
        .with_kinematic_viscosity(4.091e-5),
    PropertyRow::new(300.0, 0.6158, 1044.0, 0.04418, 2.934e-5, 0.6935)
        .with_kinematic_viscosity(4.765e-5),
    PropertyRow::new(400.0, 0.5243, 1069.0, 0.05015, 3.261e-5, 0.6948)
        .with_kinematic_viscosity(6.219e-5),
    PropertyRow::new(500.0, 0.4565, 1093.0, 0.05572, 3.563e-5, 0.6986)
        .with_kinematic_viscosity(7.806e-5),
];
