use serde::Deserialize;
use thiserror::Error;

/// One tabulated state, in SI units except temperature (°C).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyRow {
    /// Temperature in °C.
    pub temperature: f64,
    /// Density in kg/m³.
    pub density: f64,
    /// Specific heat in J/kg·K.
    pub specific_heat: f64,
    /// Thermal conductivity in W/m·K.
    pub conductivity: f64,
    /// Dynamic viscosity in Pa·s.
    pub viscosity: f64,
    /// Prandtl number.
    pub prandtl: f64,
    /// Kinematic viscosity in m²/s, when the source tabulates it.
    pub kinematic_viscosity: Option<f64>,
}

impl PropertyRow {
    #[must_use]
    pub const fn new(
        temperature: f64,
        density: f64,
        specific_heat: f64,
        conductivity: f64,
        viscosity: f64,
        prandtl: f64,
    ) -> Self {
        Self {
            temperature,
            density,
            specific_heat,
            conductivity,
            viscosity,
            prandtl,
            kinematic_viscosity: None,
        }
    }

    #[must_use]
    pub const fn with_kinematic_viscosity(mut self, kinematic_viscosity: f64) -> Self {
        self.kinematic_viscosity = Some(kinematic_viscosity);
        self
    }

    /// Tabulated kinematic viscosity, or `μ/ρ` when the table lacks it.
    #[must_use]
    pub fn nu(&self) -> f64 {
        self.kinematic_viscosity
            .unwrap_or(self.viscosity / self.density)
    }

    fn lerp(lo: &Self, hi: &Self, temperature: f64) -> Self {
        let frac = (temperature - lo.temperature) / (hi.temperature - lo.temperature);
        let mix = |a: f64, b: f64| a + frac * (b - a);

        Self {
            temperature,
            density: mix(lo.density, hi.density),
            specific_heat: mix(lo.specific_heat, hi.specific_heat),
            conductivity: mix(lo.conductivity, hi.conductivity),
            viscosity: mix(lo.viscosity, hi.viscosity),
            prandtl: mix(lo.prandtl, hi.prandtl),
            kinematic_viscosity: match (lo.kinematic_viscosity, hi.kinematic_viscosity) {
                (Some(lo), Some(hi)) => Some(mix(lo, hi)),
                _ => None,
            },
        }
    }
}

/// What to do when a lookup temperature falls outside a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolation {
    /// Use the nearest edge row and flag the result as clamped.
    #[default]
    Clamp,
    /// Refuse the lookup.
    Error,
}

/// The lookup temperature lies outside the tabulated range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{temperature} °C is outside the tabulated range [{min}, {max}] °C")]
pub struct OutOfTable {
    pub temperature: f64,
    pub min: f64,
    pub max: f64,
}

/// Result of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lookup {
    pub row: PropertyRow,
    /// The lookup temperature was outside the table and an edge row was used.
    pub clamped: bool,
}

/// A read-only property table with strictly ascending temperatures.
#[derive(Debug, Clone, Copy)]
pub struct PropertyTable {
    rows: &'static [PropertyRow],
}

impl PropertyTable {
    /// Wraps a static row slice.
    ///
    /// Rows must be non-empty and strictly ascending in temperature. Every
    /// table shipped with this crate is checked in the tests below.
    #[must_use]
    pub const fn new(rows: &'static [PropertyRow]) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &'static [PropertyRow] {
        self.rows
    }

    /// Lowest and highest tabulated temperature, in °C.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        let min = self.rows.first().map_or(f64::NAN, |row| row.temperature);
        let max = self.rows.last().map_or(f64::NAN, |row| row.temperature);
        (min, max)
    }

    /// Linearly interpolates every column at `temperature` (°C).
    ///
    /// Inside the table this matches `numpy.interp`. Outside it, `policy`
    /// decides between the edge row and an error.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfTable`] when the temperature is outside the table and
    /// `policy` is [`Extrapolation::Error`], or when it is `NaN`.
    pub fn lookup(&self, temperature: f64, policy: Extrapolation) -> Result<Lookup, OutOfTable> {
        let (min, max) = self.range();
        let out_of_table = OutOfTable {
            temperature,
            min,
            max,
        };

        let idx = self.rows.partition_point(|row| row.temperature < temperature);

        let (row, clamped) = match (self.rows.get(idx.wrapping_sub(1)), self.rows.get(idx)) {
            (_, Some(hi)) if hi.temperature == temperature => (*hi, false),
            (Some(lo), Some(hi)) => (PropertyRow::lerp(lo, hi, temperature), false),
            _ if temperature.is_nan() => return Err(out_of_table),
            _ if policy == Extrapolation::Error => return Err(out_of_table),
            (None, Some(first)) => (*first, true),
            (Some(last), None) => (*last, true),
            (None, None) => return Err(out_of_table),
        };

        Ok(Lookup {
            row: PropertyRow {
                temperature,
                kinematic_viscosity: Some(row.nu()),
                ..row
            },
            clamped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const ROWS: &[PropertyRow] = &[
        PropertyRow::new(0.0, 1000.0, 4000.0, 0.5, 1e-3, 8.0),
        PropertyRow::new(10.0, 990.0, 4100.0, 0.6, 0.8e-3, 6.0),
        PropertyRow::new(30.0, 970.0, 4300.0, 0.7, 0.5e-3, 3.0),
    ];

    #[test]
    fn interpolates_between_rows() {
        let table = PropertyTable::new(ROWS);
        let lookup = table.lookup(20.0, Extrapolation::Error).unwrap();

        assert!(!lookup.clamped);
        assert_relative_eq!(lookup.row.density, 980.0);
        assert_relative_eq!(lookup.row.specific_heat, 4200.0);
        assert_relative_eq!(lookup.row.conductivity, 0.65);
        assert_relative_eq!(lookup.row.prandtl, 4.5);
        assert_relative_eq!(lookup.row.viscosity, 0.65e-3);
        assert_relative_eq!(lookup.row.nu(), 0.65e-3 / 980.0);
    }

    #[test]
    fn derived_kinematic_viscosity_matches_interpolated_columns() {
        let table = PropertyTable::new(ROWS);
        for temperature in [2.5, 13.0, 27.5] {
            let row = table.lookup(temperature, Extrapolation::Error).unwrap().row;
            assert_relative_eq!(row.nu(), row.viscosity / row.density, max_relative = 1e-12);
        }
    }

    #[test]
    fn tabulated_kinematic_viscosity_is_interpolated_as_a_column() {
        const NU_ROWS: &[PropertyRow] = &[
            PropertyRow::new(0.0, 1.3, 1006.0, 0.024, 1.7e-5, 0.74).with_kinematic_viscosity(1.3e-5),
            PropertyRow::new(20.0, 1.2, 1007.0, 0.025, 1.8e-5, 0.73)
                .with_kinematic_viscosity(1.5e-5),
        ];
        let row = PropertyTable::new(NU_ROWS)
            .lookup(5.0, Extrapolation::Error)
            .unwrap()
            .row;
        assert_relative_eq!(row.nu(), 1.35e-5, max_relative = 1e-12);
    }

    #[test]
    fn exact_nodes_return_the_row() {
        let table = PropertyTable::new(ROWS);
        for row in ROWS {
            let lookup = table.lookup(row.temperature, Extrapolation::Error).unwrap();
            assert_relative_eq!(lookup.row.density, row.density);
            assert_relative_eq!(lookup.row.prandtl, row.prandtl);
        }
    }

    #[test]
    fn clamps_to_edges() {
        let table = PropertyTable::new(ROWS);

        let below = table.lookup(-5.0, Extrapolation::Clamp).unwrap();
        assert!(below.clamped);
        assert_relative_eq!(below.row.density, 1000.0);
        assert_relative_eq!(below.row.temperature, -5.0);

        let above = table.lookup(45.0, Extrapolation::Clamp).unwrap();
        assert!(above.clamped);
        assert_relative_eq!(above.row.prandtl, 3.0);
    }

    #[test]
    fn error_policy_rejects_out_of_range() {
        let table = PropertyTable::new(ROWS);
        let err = table.lookup(31.0, Extrapolation::Error).unwrap_err();
        assert_eq!(
            err,
            OutOfTable {
                temperature: 31.0,
                min: 0.0,
                max: 30.0
            }
        );
        assert!(table.lookup(f64::NAN, Extrapolation::Clamp).is_err());
    }
}
