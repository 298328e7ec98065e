//! Liquid methanol, 20 °C to 70 °C.

use crate::support::properties::table::PropertyRow;

/// Liquid at atmospheric pressure.
pub(super) const LIQUID: &[PropertyRow] = &[
    PropertyRow::new(20.0, 788.4, 2515.0, 0.1987, 0.0005857, 7.4134),
    PropertyRow::new(30.0, 779.1, 2577.0, 0.198, 0.0005088, 6.6221),
    PropertyRow::new(40.0, 769.6, 2644.0, 0.1972, 0.000446, 5.9798),
    PropertyRow::new(50.0, 760.1, 2718.0, 0.1965, 0.0003942, 5.4526),
    PropertyRow::new(60.0, 750.4, 2798.0, 0.1957, 0.000351, 5.0184),
    PropertyRow::new(70.0, 740.4, 2885.0, 0.195, 0.0003146, 4.6545),
];
