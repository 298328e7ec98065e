use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// [`uom`] does not allow subtracting two [`ThermodynamicTemperature`] values
/// into a [`TemperatureInterval`] directly
/// ([#380](https://github.com/iliekturtles/uom/issues/380)), so this trait
/// provides [`minus`](Self::minus) for it.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

/// Returns the arithmetic mean of two absolute temperatures.
///
/// With a surface and a free-stream temperature this is the film
/// temperature; with a tube's inlet and outlet it is the bulk mean.
#[must_use]
pub fn film_temperature(
    a: ThermodynamicTemperature,
    b: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<abs_kelvin>(0.5 * (a.get::<abs_kelvin>() + b.get::<abs_kelvin>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn wall_minus_fluid() {
        let wall = ThermodynamicTemperature::new::<degree_celsius>(100.0);
        let fluid = ThermodynamicTemperature::new::<degree_celsius>(25.0);

        assert_relative_eq!(wall.minus(fluid).get::<delta_celsius>(), 75.0, epsilon = 1e-12);
        assert_relative_eq!(fluid.minus(wall).get::<delta_celsius>(), -75.0, epsilon = 1e-12);
    }

    #[test]
    fn mixed_scales_cancel() {
        let t_c = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let t_f = ThermodynamicTemperature::new::<degree_fahrenheit>(77.0);
        assert_relative_eq!(t_f.minus(t_c).get::<delta_celsius>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn film_temperature_is_the_midpoint() {
        let surface = ThermodynamicTemperature::new::<degree_celsius>(40.0);
        let free_stream = ThermodynamicTemperature::new::<degree_celsius>(20.0);

        let film = film_temperature(surface, free_stream);
        assert_relative_eq!(film.get::<degree_celsius>(), 30.0, epsilon = 1e-12);
    }
}
