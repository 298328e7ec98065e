//! TOML case files.
//!
//! A case file describes one problem, the units its numbers are written in,
//! and a few solver settings:
//!
//! ```toml
//! [settings]
//! extrapolation = "clamp"
//!
//! [units]
//! temperature = "°C"
//! length = "mm"
//!
//! [problem]
//! mode = "conduction"
//! inner_temperature = 20.0
//! outer_temperature = -5.0
//! outer_convection = 25.0
//!
//! [problem.geometry]
//! shape = "plane"
//! area = 10.0
//!
//! [[problem.layers]]
//! name = "brick"
//! thickness = 200.0
//! material = "common brick"
//! ```
//!
//! [`CaseFile::run`] converts the inputs to SI once, runs the model, and
//! returns a [`CaseReport`] that prints its results in the same units.

mod error;
mod problem;
mod report;
mod settings;

pub use error::CaseError;
pub use problem::{
    ConductionCase, CylinderCase, FlatPlateCase, GeometryCase, InternalFlowCase, LayerCase,
    Problem, SizingCase,
};
pub use report::{CaseReport, Outcome};
pub use settings::{Settings, Units};

use std::{fs, path::Path, str::FromStr};

use serde::Deserialize;
use tracing::info;
use twine_core::Model;

use crate::models::{
    conduction::{Conduction, OuterLayerSizing},
    convection::{
        cylinder::Cylinder,
        flat_plate::{FlatPlate, FlatPlateLocal, FlatPlateProfile, LocalInput},
        internal_flow::InternalFlow,
    },
};

/// A parsed case file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseFile {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub units: Units,
    pub problem: Problem,
}

impl FromStr for CaseFile {
    type Err = CaseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(text)?)
    }
}

impl CaseFile {
    /// Reads and parses a case file.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::Io`] if the file cannot be read or
    /// [`CaseError::Parse`] if it is not a valid case.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CaseError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    /// Runs the problem.
    ///
    /// # Errors
    ///
    /// Returns a [`CaseError`] if an input is invalid or the model fails.
    pub fn run(&self) -> Result<CaseReport, CaseError> {
        let units = &self.units;
        let extrapolation = self.settings.extrapolation;

        let outcome = match &self.problem {
            Problem::Conduction(case) => {
                info!(layers = case.layers.len(), "running conduction case");
                let results = Conduction.call(&case.input(units)?)?;
                let sizing = case
                    .sizing(units)?
                    .map(|input| OuterLayerSizing::default().call(&input))
                    .transpose()?;
                Outcome::Conduction { results, sizing }
            }
            Problem::FlatPlate(case) => {
                info!(fluid = %case.fluid, "running flat plate case");
                let plate = case.input(units)?;
                let average = FlatPlate { extrapolation }.call(&plate)?;
                let local = case
                    .local_position(units)?
                    .map(|position| {
                        FlatPlateLocal { extrapolation }.call(&LocalInput { plate, position })
                    })
                    .transpose()?;
                let profile = if case.profile {
                    let model = FlatPlateProfile {
                        extrapolation,
                        samples: self.settings.profile_samples,
                    };
                    Some(model.call(&plate)?)
                } else {
                    None
                };
                Outcome::FlatPlate {
                    average,
                    local,
                    profile,
                }
            }
            Problem::Cylinder(case) => {
                info!(fluid = %case.fluid, "running cylinder case");
                let model = Cylinder {
                    correlation: case.correlation,
                    extrapolation,
                };
                Outcome::Cylinder(model.call(&case.input(units)?)?)
            }
            Problem::InternalFlow(case) => {
                info!(fluid = %case.fluid, "running internal flow case");
                Outcome::InternalFlow(InternalFlow { extrapolation }.call(&case.input(units)?)?)
            }
        };

        Ok(CaseReport {
            units: *units,
            outcome,
        })
    }
}
