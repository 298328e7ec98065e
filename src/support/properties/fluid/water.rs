//! Saturated water, triple point to 200 °C.

use crate::support::properties::table::PropertyRow;

/// Saturated liquid.
pub(super) const LIQUID: &[PropertyRow] = &[
    PropertyRow::new(0.01, 999.8, 4217.0, 0.561, 0.001792, 13.47),
    PropertyRow::new(10.0, 999.7, 4194.0, 0.58, 0.001307, 9.451),
    PropertyRow::new(20.0, 998.0, 4182.0, 0.598, 0.001002, 7.0073),
    PropertyRow::new(30.0, 996.0, 4180.0, 0.615, 0.000798, 5.4238),
    PropertyRow::new(40.0, 992.1, 4179.0, 0.631, 0.000653, 4.3247),
    PropertyRow::new(50.0, 988.1, 4181.0, 0.644, 0.000547, 3.5513),
    PropertyRow::new(60.0, 983.3, 4185.0, 0.654, 0.000467, 2.9884),
    PropertyRow::new(70.0, 977.5, 4190.0, 0.663, 0.000404, 2.5532),
    PropertyRow::new(80.0, 971.8, 4197.0, 0.67, 0.000355, 2.2238),
    PropertyRow::new(90.0, 965.3, 4206.0, 0.675, 0.000315, 1.9628),
    PropertyRow::new(100.0, 957.9, 4217.0, 0.679, 0.000282, 1.7514),
    PropertyRow::new(120.0, 943.4, 4244.0, 0.683, 0.000232, 1.4416),
    PropertyRow::new(140.0, 921.7, 4286.0, 0.683, 0.000197, 1.2362),
    PropertyRow::new(160.0, 907.4, 4340.0, 0.68, 0.00017, 1.085),
    PropertyRow::new(180.0, 887.3, 4410.0, 0.673, 0.00015, 0.9829),
    PropertyRow::new(200.0, 864.3, 4500.0, 0.663, 0.000134, 0.9095),
];

/// Saturated vapor.
pub(super) const VAPOR: &[PropertyRow] = &[
    PropertyRow::new(0.01, 0.0048, 1854.0, 0.0171, 9.22e-6, 0.9996),
    PropertyRow::new(10.0, 0.0094, 1862.0, 0.0176, 9.46e-6, 1.0008),
    PropertyRow::new(20.0, 0.0173, 1867.0, 0.0182, 9.73e-6, 0.9981),
    PropertyRow::new(30.0, 0.0304, 1870.0, 0.0189, 1.001e-5, 0.9904),
    PropertyRow::new(40.0, 0.0512, 1875.0, 0.0196, 1.026e-5, 0.9815),
    PropertyRow::new(50.0, 0.0831, 1880.0, 0.0204, 1.056e-5, 0.9732),
    PropertyRow::new(60.0, 0.1304, 1887.0, 0.0212, 1.084e-5, 0.9649),
    PropertyRow::new(70.0, 0.1983, 1895.0, 0.0221, 1.112e-5, 0.9535),
    PropertyRow::new(80.0, 0.2935, 1905.0, 0.023, 1.14e-5, 0.9442),
    PropertyRow::new(90.0, 0.4235, 1918.0, 0.024, 1.17e-5, 0.935),
    PropertyRow::new(100.0, 0.5978, 1933.0, 0.025, 1.202e-5, 0.9294),
    PropertyRow::new(120.0, 1.121, 1974.0, 0.0275, 1.264e-5, 0.9073),
    PropertyRow::new(140.0, 1.965, 2029.0, 0.0301, 1.33e-5, 0.8965),
    PropertyRow::new(160.0, 3.256, 2100.0, 0.0331, 1.395e-5, 0.885),
    PropertyRow::new(180.0, 5.153, 2213.0, 0.0364, 1.46e-5, 0.8876),
    PropertyRow::new(200.0, 7.852, 2430.0, 0.0401, 1.524e-5, 0.9235),
];
