use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval,
    thermodynamic_temperature::kelvin,
};

use super::InternalFlowError;

/// Log-mean temperature difference between a wall and a stream.
///
/// Uses `ΔT₁ = |Ts − Ti|` and `ΔT₂ = |Ts − Te|`. When the two are equal the
/// mean is `ΔT₁`.
pub(super) fn log_mean_difference(
    inlet: ThermodynamicTemperature,
    outlet: ThermodynamicTemperature,
    wall: ThermodynamicTemperature,
) -> Result<TemperatureInterval, InternalFlowError> {
    let to_inlet = wall.get::<kelvin>() - inlet.get::<kelvin>();
    let to_outlet = wall.get::<kelvin>() - outlet.get::<kelvin>();

    if !(to_inlet * to_outlet > 0.0) {
        return Err(InternalFlowError::WallTemperatureCrossed {
            inlet,
            outlet,
            wall,
        });
    }

    let (dt1, dt2) = (to_inlet.abs(), to_outlet.abs());
    #[allow(clippy::float_cmp)]
    let lmtd = if dt1 == dt2 {
        dt1
    } else {
        (dt2 - dt1) / (dt2 / dt1).ln()
    };

    Ok(TemperatureInterval::new::<temperature_interval::kelvin>(lmtd))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn lmtd(inlet: f64, outlet: f64, wall: f64) -> Result<f64, InternalFlowError> {
        log_mean_difference(celsius(inlet), celsius(outlet), celsius(wall))
            .map(|dt| dt.get::<temperature_interval::kelvin>())
    }

    #[test]
    fn heating_and_cooling_agree() {
        let expected = (60.0 - 40.0) / (60.0_f64 / 40.0).ln();
        assert_relative_eq!(lmtd(20.0, 40.0, 80.0).unwrap(), expected, max_relative = 1e-9);
        assert_relative_eq!(lmtd(140.0, 120.0, 80.0).unwrap(), expected, max_relative = 1e-9);
    }

    #[test]
    fn equal_differences_return_the_difference() {
        assert_relative_eq!(lmtd(20.0, 20.0, 80.0).unwrap(), 60.0, max_relative = 1e-9);
    }

    #[test]
    fn crossing_or_touching_the_wall_is_rejected() {
        for (inlet, outlet) in [(20.0, 90.0), (20.0, 80.0), (80.0, 60.0)] {
            assert!(matches!(
                lmtd(inlet, outlet, 80.0),
                Err(InternalFlowError::WallTemperatureCrossed { .. })
            ));
        }
    }
}
