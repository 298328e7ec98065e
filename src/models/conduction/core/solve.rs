use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{Length, Power, ThermodynamicTemperature},
        power::watt,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::units::ThermalResistance;

use super::{
    ConductionError, ConductionInput, ConductionResults, CriticalRadius, ElementKind, Geometry,
    ResistanceElement,
};

/// Assembles the series network and solves for heat flow and node temperatures.
pub(super) fn solve(input: &ConductionInput) -> Result<ConductionResults, ConductionError> {
    let Some(outermost) = input.layers.last() else {
        return Err(ConductionError::NoLayers);
    };

    let geometry = &input.geometry;
    let inner_radius = geometry.inner_radius().unwrap_or(Length::ZERO);

    let mut elements = Vec::with_capacity(input.layers.len() + 2);
    let mut radii = Vec::new();

    if let Some(h) = input.inner_convection {
        elements.push(ResistanceElement {
            kind: ElementKind::InnerConvection,
            label: "inner convection".into(),
            resistance: geometry.convection_resistance(inner_radius, *h),
        });
    }

    let mut radius = inner_radius;
    if geometry.is_radial() {
        radii.push(radius);
    }
    for (index, layer) in input.layers.iter().enumerate() {
        elements.push(ResistanceElement {
            kind: ElementKind::Layer(index),
            label: layer.name().to_owned(),
            resistance: geometry.layer_resistance(radius, layer.thickness(), layer.conductivity()),
        });
        if geometry.is_radial() {
            radius += layer.thickness();
            radii.push(radius);
        }
    }
    let outer_radius = radius;

    if let Some(h) = input.outer_convection {
        elements.push(ResistanceElement {
            kind: ElementKind::OuterConvection,
            label: "outer convection".into(),
            resistance: geometry.convection_resistance(outer_radius, *h),
        });
    }

    let total_resistance = elements
        .iter()
        .fold(ThermalResistance::ZERO, |sum, element| sum + element.resistance);

    // Temperatures are carried in kelvin because uom keeps absolute
    // temperatures and temperature intervals as distinct kinds.
    let t_inner = input.inner_temperature.get::<kelvin>();
    let t_outer = input.outer_temperature.get::<kelvin>();
    let q = (t_inner - t_outer) / total_resistance.value;

    let mut node_temperatures = Vec::with_capacity(elements.len() + 1);
    let mut t = t_inner;
    node_temperatures.push(input.inner_temperature);
    for element in &elements[..elements.len() - 1] {
        t -= q * element.resistance.value;
        node_temperatures.push(ThermodynamicTemperature::new::<kelvin>(t));
    }
    node_temperatures.push(input.outer_temperature);

    let heat_flow = Power::new::<watt>(q);
    let heat_flux = match geometry {
        Geometry::Plane { area } => Some(heat_flow / **area),
        _ => None,
    };

    let critical_radius = input.outer_convection.and_then(|h| {
        geometry
            .critical_radius(outermost.conductivity(), *h)
            .map(|radius| CriticalRadius {
                radius,
                outer_radius,
            })
    });

    debug!(
        layers = input.layers.len(),
        total_resistance = total_resistance.value,
        heat_flow = q,
        "conduction network solved"
    );

    Ok(ConductionResults {
        elements,
        total_resistance,
        heat_flow,
        heat_flux,
        node_temperatures,
        radii,
        critical_radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, HeatTransfer, ThermalConductivity},
        heat_flux_density::watt_per_square_meter,
        heat_transfer::watt_per_square_meter_kelvin,
        length::meter,
        thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::models::conduction::core::{Layer, Surface};

    fn layer(name: &str, thickness: f64, k: f64) -> Layer {
        Layer::new(
            name,
            Length::new::<meter>(thickness),
            ThermalConductivity::new::<watt_per_meter_kelvin>(k),
        )
        .unwrap()
    }

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn h(value: f64) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(value)
    }

    #[test]
    fn composite_plane_wall() {
        // Brick and plaster, convection on both faces.
        let input = ConductionInput::new(
            Geometry::plane(Area::new::<square_meter>(10.0)).unwrap(),
            vec![layer("brick", 0.2, 0.72), layer("plaster", 0.02, 0.22)],
            celsius(20.0),
            celsius(-5.0),
        )
        .with_convection(Surface::Inner, h(10.0))
        .unwrap()
        .with_convection(Surface::Outer, h(25.0))
        .unwrap();

        let results = solve(&input).unwrap();

        let expected = [0.01, 0.2 / 7.2, 0.02 / 2.2, 0.004];
        assert_eq!(results.elements.len(), expected.len());
        for (element, r) in results.elements.iter().zip(expected) {
            assert_relative_eq!(element.resistance.value, r, max_relative = 1e-12);
        }

        let total: f64 = expected.iter().sum();
        assert_relative_eq!(results.total_resistance.value, total, max_relative = 1e-12);
        assert_relative_eq!(results.heat_flow.get::<watt>(), 25.0 / total, max_relative = 1e-9);
        assert_relative_eq!(
            results.heat_flux.unwrap().get::<watt_per_square_meter>(),
            2.5 / total,
            max_relative = 1e-9
        );

        // Node temperatures fall by q·R across each element.
        let q = 25.0 / total;
        let t = &results.node_temperatures;
        assert_eq!(t.len(), 5);
        assert_relative_eq!(t[1].get::<degree_celsius>(), 20.0 - q * 0.01, epsilon = 1e-9);
        assert_relative_eq!(
            t[3].get::<degree_celsius>(),
            -5.0 + q * 0.004,
            epsilon = 1e-9
        );
        assert_eq!(results.interface_temperatures().count(), 3);
        assert!(results.radii.is_empty());
        assert!(results.critical_radius.is_none());
    }

    #[test]
    fn reversed_gradient_gives_negative_heat_flow() {
        let input = ConductionInput::new(
            Geometry::plane(Area::new::<square_meter>(1.0)).unwrap(),
            vec![layer("glass", 0.005, 0.78)],
            celsius(0.0),
            celsius(20.0),
        );
        let results = solve(&input).unwrap();
        assert!(results.heat_flow.get::<watt>() < 0.0);
        assert_eq!(results.node_temperatures.len(), 2);
    }

    #[test]
    fn insulated_pipe() {
        let input = ConductionInput::new(
            Geometry::cylinder(Length::new::<meter>(1.0), Length::new::<meter>(0.025)).unwrap(),
            vec![layer("steel", 0.005, 15.0), layer("insulation", 0.02, 0.05)],
            celsius(200.0),
            celsius(25.0),
        )
        .with_convection(Surface::Outer, h(10.0))
        .unwrap();

        let results = solve(&input).unwrap();

        let r_steel = (0.030_f64 / 0.025).ln() / (2.0 * PI * 15.0);
        let r_ins = (0.050_f64 / 0.030).ln() / (2.0 * PI * 0.05);
        let r_conv = 1.0 / (10.0 * 2.0 * PI * 0.05);
        let total = r_steel + r_ins + r_conv;

        assert_relative_eq!(results.total_resistance.value, total, max_relative = 1e-12);
        assert_relative_eq!(results.heat_flow.get::<watt>(), 175.0 / total, max_relative = 1e-9);
        assert!(results.heat_flux.is_none());

        let radii: Vec<f64> = results.radii.iter().map(|r| r.get::<meter>()).collect();
        assert_eq!(radii.len(), 3);
        assert_relative_eq!(radii[2], 0.05, epsilon = 1e-15);

        let critical = results.critical_radius.unwrap();
        assert_relative_eq!(critical.radius.get::<meter>(), 0.005);
        assert!(!critical.below_critical());
    }

    #[test]
    fn sphere_without_convection_has_no_critical_radius() {
        let input = ConductionInput::new(
            Geometry::sphere(Length::new::<meter>(0.1)).unwrap(),
            vec![layer("shell", 0.1, 1.0)],
            celsius(100.0),
            celsius(0.0),
        );

        let results = solve(&input).unwrap();
        assert_relative_eq!(results.total_resistance.value, 5.0 / (4.0 * PI));
        assert_relative_eq!(
            results.heat_flow.get::<watt>(),
            100.0 * 4.0 * PI / 5.0,
            max_relative = 1e-9
        );
        assert!(results.critical_radius.is_none());
    }

    #[test]
    fn empty_wall_is_rejected() {
        let input = ConductionInput::new(
            Geometry::plane(Area::new::<square_meter>(1.0)).unwrap(),
            Vec::new(),
            celsius(20.0),
            celsius(0.0),
        );
        assert_eq!(solve(&input).unwrap_err(), ConductionError::NoLayers);
    }
}
