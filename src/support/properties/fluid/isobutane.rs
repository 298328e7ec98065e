//! Saturated liquid isobutane, -100 °C to 100 °C.

use crate::support::properties::table::PropertyRow;

/// Saturated liquid.
pub(super) const LIQUID: &[PropertyRow] = &[
    PropertyRow::new(-100.0, 683.8, 1881.0, 0.1383, 0.0009305, 12.66),
    PropertyRow::new(-75.0, 659.3, 1970.0, 0.1292, 0.0005624, 8.5753),
    PropertyRow::new(-50.0, 634.3, 2069.0, 0.1197, 0.0003769, 6.5147),
    PropertyRow::new(-25.0, 608.2, 2180.0, 0.1099, 0.0002688, 5.332),
    PropertyRow::new(0.0, 580.6, 2306.0, 0.1, 0.0001993, 4.5959),
    PropertyRow::new(25.0, 550.7, 2455.0, 0.0899, 0.000151, 4.1235),
    PropertyRow::new(50.0, 517.3, 2640.0, 0.0798, 0.0001155, 3.8211),
    PropertyRow::new(75.0, 478.5, 2896.0, 0.0695, 8.799e-5, 3.6665),
    PropertyRow::new(100.0, 429.6, 3350.0, 0.0587, 6.499e-5, 3.709),
];
