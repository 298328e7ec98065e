//! Saturated propane, -40 °C to 60 °C.

use crate::support::properties::table::PropertyRow;

/// Saturated liquid.
pub(super) const LIQUID: &[PropertyRow] = &[
    PropertyRow::new(-40.0, 579.4, 2254.0, 0.1392, 0.0002017, 3.266),
    PropertyRow::new(-20.0, 557.8, 2322.0, 0.1297, 0.0001624, 2.9074),
    PropertyRow::new(0.0, 528.6, 2433.0, 0.1202, 0.0001313, 2.6577),
    PropertyRow::new(20.0, 500.5, 2566.0, 0.1104, 0.0001066, 2.4777),
    PropertyRow::new(40.0, 467.3, 2739.0, 0.1001, 8.634e-5, 2.3625),
    PropertyRow::new(60.0, 429.4, 3011.0, 0.089, 6.931e-5, 2.3449),
];

/// Saturated vapor.
pub(super) const VAPOR: &[PropertyRow] = &[
    PropertyRow::new(-40.0, 2.383, 1649.0, 0.01101, 6.419e-6, 0.9614),
    PropertyRow::new(-20.0, 5.032, 1748.0, 0.01228, 6.922e-6, 0.9853),
    PropertyRow::new(0.0, 10.4, 1880.0, 0.0138, 7.475e-6, 1.0183),
    PropertyRow::new(20.0, 19.7, 2057.0, 0.01563, 8.081e-6, 1.0635),
    PropertyRow::new(40.0, 30.97, 2305.0, 0.01783, 8.79e-6, 1.1363),
    PropertyRow::new(60.0, 50.62, 2681.0, 0.02064, 9.65e-6, 1.2535),
];
