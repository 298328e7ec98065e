//! Liquid glycerin, 0 °C to 50 °C.

use crate::support::properties::table::PropertyRow;

/// Liquid at atmospheric pressure.
pub(super) const LIQUID: &[PropertyRow] = &[
    PropertyRow::new(0.0, 1276.0, 2262.0, 0.282, 10.49, 84143.0),
    PropertyRow::new(5.0, 1273.0, 2288.0, 0.283, 6.73, 54411.0),
    PropertyRow::new(10.0, 1270.0, 2320.0, 0.284, 3.83, 31287.0),
    PropertyRow::new(15.0, 1267.0, 2354.0, 0.285, 2.279, 18824.0),
    PropertyRow::new(20.0, 1264.0, 2386.0, 0.286, 1.412, 11780.0),
    PropertyRow::new(25.0, 1261.0, 2416.0, 0.286, 0.9315, 7869.0),
    PropertyRow::new(30.0, 1258.0, 2447.0, 0.286, 0.6125, 5241.0),
    PropertyRow::new(35.0, 1255.0, 2478.0, 0.287, 0.377, 3255.0),
    PropertyRow::new(40.0, 1252.0, 2513.0, 0.287, 0.2501, 2190.0),
    PropertyRow::new(50.0, 1245.0, 2583.0, 0.287, 0.1418, 1276.0),
];
