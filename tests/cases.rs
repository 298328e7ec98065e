use std::path::PathBuf;

use approx::assert_relative_eq;
use twine_heat::{
    case::{CaseError, CaseFile, Outcome},
    models::convection::flat_plate::FlatPlateError,
};
use uom::si::{length::millimeter, power::watt, thermodynamic_temperature::degree_celsius};

fn case(name: &str) -> CaseFile {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "cases", name].iter().collect();
    CaseFile::load(path).unwrap()
}

#[test]
fn insulated_pipe_is_sized_for_target_loss() {
    let report = case("insulated_pipe.toml").run().unwrap();

    let Outcome::Conduction { results, sizing } = &report.outcome else {
        panic!("expected a conduction outcome");
    };
    assert_eq!(results.elements.len(), 3);
    assert!(results.heat_flow.get::<watt>() > 150.0);

    let sized = sizing.as_ref().unwrap();
    assert_relative_eq!(sized.results.heat_flow.get::<watt>(), 150.0, max_relative = 1e-6);
    assert!(sized.thickness.get::<millimeter>() > 30.0);

    let summary = report.to_string();
    assert!(summary.contains("insulation"));
    assert!(summary.contains("Sized outer layer"));
}

#[test]
fn heated_plate_reports_average_local_and_profile() {
    let report = case("heated_plate.toml").run().unwrap();

    let Outcome::FlatPlate {
        average,
        local,
        profile,
    } = &report.outcome
    else {
        panic!("expected a flat plate outcome");
    };
    assert!(average.mixed.is_some());
    assert!(local.is_some());
    assert_eq!(profile.as_ref().unwrap().points.len(), 25);
    assert!(report.to_string().contains("Transition at"));
}

#[test]
fn wire_uses_compact_correlation() {
    let report = case("wire_in_crossflow.toml").run().unwrap();

    let Outcome::Cylinder(results) = &report.outcome else {
        panic!("expected a cylinder outcome");
    };
    let row = results.compact_row.unwrap();
    assert_relative_eq!(row.c, 0.683);
    assert!(results.heat_flow.get::<watt>() > 0.0);
}

#[test]
fn water_heater_tube_in_imperial_units() {
    let report = case("water_heater_tube.toml").run().unwrap();

    let Outcome::InternalFlow(results) = &report.outcome else {
        panic!("expected an internal flow outcome");
    };
    assert_relative_eq!(
        results.properties.temperature.get::<degree_celsius>(),
        30.0,
        max_relative = 1e-9
    );
    assert!(results.heat_flow.get::<watt>() > 0.0);
    assert!(report.to_string().contains("BTU/h"));
}

#[test]
fn strict_extrapolation_rejects_out_of_table_film() {
    let err = r#"
        [settings]
        extrapolation = "error"

        [problem]
        mode = "flat_plate"
        fluid = "methanol"
        velocity = 1.0
        free_stream_temperature = 150.0
        surface_temperature = 250.0
        length = 0.1
    "#
    .parse::<CaseFile>()
    .unwrap()
    .run()
    .unwrap_err();

    assert!(matches!(err, CaseError::FlatPlate(FlatPlateError::Property(_))));
}
