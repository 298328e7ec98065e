//! Unused engine oil, 0 °C to 150 °C.

use crate::support::properties::table::PropertyRow;

/// Liquid at atmospheric pressure.
pub(super) const LIQUID: &[PropertyRow] = &[
    PropertyRow::new(0.0, 899.0, 1797.0, 0.1469, 3.814, 46656.0),
    PropertyRow::new(20.0, 888.1, 1881.0, 0.145, 0.8374, 10863.0),
    PropertyRow::new(40.0, 876.0, 1964.0, 0.1444, 0.2177, 2961.0),
    PropertyRow::new(60.0, 863.9, 2048.0, 0.1404, 0.07399, 1079.0),
    PropertyRow::new(80.0, 852.0, 2132.0, 0.138, 0.03232, 499.3),
    PropertyRow::new(100.0, 840.0, 2220.0, 0.1367, 0.01718, 279.0),
    PropertyRow::new(120.0, 828.9, 2308.0, 0.1347, 0.01029, 176.3),
    PropertyRow::new(140.0, 816.8, 2395.0, 0.133, 0.006558, 118.1),
    PropertyRow::new(150.0, 810.3, 2441.0, 0.1327, 0.005344, 98.3),
];
