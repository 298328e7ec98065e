//! Saturated ammonia, -40 °C to 80 °C.

use crate::support::properties::table::PropertyRow;

/// Saturated liquid.
pub(super) const LIQUID: &[PropertyRow] = &[
    PropertyRow::new(-40.0, 690.2, 4414.0, 0.6348, 0.0002926, 2.0346),
    PropertyRow::new(-20.0, 665.1, 4523.0, 0.5833, 0.0002372, 1.8393),
    PropertyRow::new(0.0, 638.6, 4617.0, 0.5394, 0.0001905, 1.6306),
    PropertyRow::new(20.0, 610.2, 4745.0, 0.4927, 0.0001519, 1.4629),
    PropertyRow::new(40.0, 579.5, 4932.0, 0.4433, 0.0001202, 1.3373),
    PropertyRow::new(60.0, 545.2, 5240.0, 0.3922, 9.452e-5, 1.2628),
    PropertyRow::new(80.0, 505.8, 5803.0, 0.3393, 7.256e-5, 1.241),
];

/// Saturated vapor.
pub(super) const VAPOR: &[PropertyRow] = &[
    PropertyRow::new(-40.0, 0.6435, 2242.0, 0.01806, 7.957e-6, 0.9878),
    PropertyRow::new(-20.0, 1.604, 2491.0, 0.0199, 8.61e-6, 1.0778),
    PropertyRow::new(0.0, 3.458, 2810.0, 0.0219, 9.238e-6, 1.1853),
    PropertyRow::new(20.0, 6.694, 3226.0, 0.02436, 9.846e-6, 1.3039),
    PropertyRow::new(40.0, 12.03, 3738.0, 0.02751, 1.045e-5, 1.4199),
    PropertyRow::new(60.0, 20.49, 4497.0, 0.03165, 1.113e-5, 1.5814),
    PropertyRow::new(80.0, 33.7, 5723.0, 0.03742, 1.196e-5, 1.8292),
];
