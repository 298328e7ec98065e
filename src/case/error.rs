use std::path::PathBuf;

use thiserror::Error;

use crate::{
    models::{
        conduction::{ConductionError, SizingError},
        convection::{
            cylinder::CylinderError, flat_plate::FlatPlateError, internal_flow::InternalFlowError,
        },
    },
    support::{constraint::ConstraintError, properties::PropertyError, units::UnitError},
};

/// Errors that can occur when loading or running a case file.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("failed to read case file `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid case file")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Property(#[from] PropertyError),

    /// A numeric input is NaN or infinite.
    #[error("`{field}` must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// A numeric input violates its constraint.
    #[error("invalid `{field}`")]
    Invalid {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A layer names neither a material nor a conductivity, or both.
    #[error("layer `{layer}` must set exactly one of `material` or `conductivity`")]
    LayerConductivity { layer: String },

    #[error(transparent)]
    Conduction(#[from] ConductionError),

    #[error("outer layer sizing failed")]
    Sizing(#[from] SizingError),

    #[error("flat plate analysis failed")]
    FlatPlate(#[from] FlatPlateError),

    #[error("cylinder analysis failed")]
    Cylinder(#[from] CylinderError),

    #[error("internal flow analysis failed")]
    InternalFlow(#[from] InternalFlowError),
}
