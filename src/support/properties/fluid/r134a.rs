//! Saturated refrigerant-134a, -40 °C to 80 °C.

use crate::support::properties::table::PropertyRow;

/// Saturated liquid.
pub(super) const LIQUID: &[PropertyRow] = &[
    PropertyRow::new(-40.0, 1418.0, 1254.0, 0.1101, 0.0004878, 5.5559),
    PropertyRow::new(-20.0, 1359.0, 1293.0, 0.1011, 0.0003569, 4.5645),
    PropertyRow::new(0.0, 1295.0, 1341.0, 0.0919, 0.0002761, 4.0288),
    PropertyRow::new(20.0, 1225.0, 1405.0, 0.0833, 0.0002108, 3.5555),
    PropertyRow::new(40.0, 1147.0, 1498.0, 0.075, 0.0001616, 3.2277),
    PropertyRow::new(60.0, 1053.0, 1660.0, 0.0667, 0.0001231, 3.0637),
    PropertyRow::new(80.0, 928.2, 2067.0, 0.0583, 9.028e-5, 3.2008),
];

/// Saturated vapor.
pub(super) const VAPOR: &[PropertyRow] = &[
    PropertyRow::new(-40.0, 2.773, 748.6, 0.00748, 8.938e-6, 0.8945),
    PropertyRow::new(-20.0, 6.787, 815.9, 0.008862, 9.723e-6, 0.8952),
    PropertyRow::new(0.0, 14.43, 898.8, 0.01012, 1.055e-5, 0.937),
    PropertyRow::new(20.0, 27.78, 1001.0, 0.01156, 1.141e-5, 0.988),
    PropertyRow::new(40.0, 50.09, 1145.0, 0.01318, 1.242e-5, 1.079),
    PropertyRow::new(60.0, 87.38, 1376.0, 0.01525, 1.369e-5, 1.2352),
    PropertyRow::new(80.0, 155.1, 1946.0, 0.01864, 1.577e-5, 1.6464),
];
