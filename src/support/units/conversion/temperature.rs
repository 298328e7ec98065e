use serde::Deserialize;
use uom::si::{
    f64::ThermodynamicTemperature,
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit, degree_rankine, kelvin},
};

use super::{UnitError, UnitSymbol};

/// Temperature scales accepted for boundary and fluid temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl TemperatureUnit {
    /// Converts a reading on this scale into an absolute temperature.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::BelowAbsoluteZero`] for readings colder than 0 K,
    /// which includes any negative kelvin or Rankine value.
    pub fn quantity(self, value: f64) -> Result<ThermodynamicTemperature, UnitError> {
        let temperature = match self {
            Self::Celsius => ThermodynamicTemperature::new::<degree_celsius>(value),
            Self::Fahrenheit => ThermodynamicTemperature::new::<degree_fahrenheit>(value),
            Self::Kelvin => ThermodynamicTemperature::new::<kelvin>(value),
            Self::Rankine => ThermodynamicTemperature::new::<degree_rankine>(value),
        };

        if temperature.get::<kelvin>() < 0.0 {
            return Err(UnitError::BelowAbsoluteZero {
                value,
                unit: self.symbol(),
            });
        }
        Ok(temperature)
    }

    /// Reads an absolute temperature on this scale.
    #[must_use]
    pub fn value_of(self, temperature: ThermodynamicTemperature) -> f64 {
        match self {
            Self::Celsius => temperature.get::<degree_celsius>(),
            Self::Fahrenheit => temperature.get::<degree_fahrenheit>(),
            Self::Kelvin => temperature.get::<kelvin>(),
            Self::Rankine => temperature.get::<degree_rankine>(),
        }
    }
}

impl UnitSymbol for TemperatureUnit {
    const KIND: &'static str = "temperature";
    const ALL: &'static [Self] = &[Self::Celsius, Self::Fahrenheit, Self::Kelvin, Self::Rankine];

    fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
            Self::Rankine => "R",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Celsius => &["C", "degC", "celsius"],
            Self::Fahrenheit => &["F", "degF", "fahrenheit"],
            Self::Kelvin => &["kelvin"],
            Self::Rankine => &["°R", "degR", "rankine"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn scales_agree_on_boiling_water() {
        let expected = 373.15;
        for (unit, reading) in [
            (TemperatureUnit::Celsius, 100.0),
            (TemperatureUnit::Fahrenheit, 212.0),
            (TemperatureUnit::Kelvin, 373.15),
            (TemperatureUnit::Rankine, 671.67),
        ] {
            let t = unit.quantity(reading).unwrap();
            assert_relative_eq!(t.get::<kelvin>(), expected, epsilon = 1e-9);
            assert_relative_eq!(unit.value_of(t), reading, epsilon = 1e-9);
        }
    }

    #[test]
    fn negative_absolute_readings_are_rejected() {
        assert!(matches!(
            TemperatureUnit::Kelvin.quantity(-1.0),
            Err(UnitError::BelowAbsoluteZero { .. })
        ));
        assert!(matches!(
            TemperatureUnit::Rankine.quantity(-10.0),
            Err(UnitError::BelowAbsoluteZero { .. })
        ));
        assert!(TemperatureUnit::Celsius.quantity(-300.0).is_err());
        assert!(TemperatureUnit::Celsius.quantity(-40.0).is_ok());
    }
}
