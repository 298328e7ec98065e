//! Saturated liquid methane, -160 °C to -90 °C.

use crate::support::properties::table::PropertyRow;

/// Saturated liquid.
pub(super) const LIQUID: &[PropertyRow] = &[
    PropertyRow::new(-160.0, 420.2, 3492.0, 0.1881, 0.0001133, 2.1034),
    PropertyRow::new(-150.0, 405.0, 3580.0, 0.1757, 9.169e-5, 1.8682),
    PropertyRow::new(-140.0, 388.8, 3700.0, 0.1635, 7.551e-5, 1.7088),
    PropertyRow::new(-130.0, 371.1, 3875.0, 0.1513, 6.288e-5, 1.6104),
    PropertyRow::new(-120.0, 351.4, 4146.0, 0.139, 5.257e-5, 1.568),
    PropertyRow::new(-110.0, 328.8, 4611.0, 0.1265, 4.377e-5, 1.5954),
    PropertyRow::new(-100.0, 301.0, 5578.0, 0.1135, 3.577e-5, 1.7579),
    PropertyRow::new(-90.0, 261.7, 8902.0, 0.0996, 2.761e-5, 2.4677),
];
