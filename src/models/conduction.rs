//! Multilayer conduction models.
//!
//! [`Conduction`] solves a plane, cylindrical, or spherical wall for heat
//! flow, resistances, and interface temperatures. [`OuterLayerSizing`]
//! finds the outermost layer thickness that meets a target heat flow.

mod core;

pub use self::core::{
    ConductionError, ConductionInput, ConductionResults, CriticalRadius, ElementKind, Geometry,
    Layer, ResistanceElement, SizedConduction, SizingConfig, SizingError, Surface,
};

use twine_core::Model;
use uom::si::f64::{Length, Power};

use crate::support::constraint::{Constrained, StrictlyPositive};

use self::core::MultilayerWall;

/// Steady conduction through a multilayer wall.
#[derive(Debug, Clone, Copy, Default)]
pub struct Conduction;

impl Model for Conduction {
    type Input = ConductionInput;
    type Output = ConductionResults;
    type Error = ConductionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        MultilayerWall::solve(input)
    }
}

/// Input for [`OuterLayerSizing`].
#[derive(Debug, Clone, PartialEq)]
pub struct SizingInput {
    /// The wall to size; the thickness of its last layer is the unknown.
    pub conduction: ConductionInput,
    /// Heat flow magnitude to achieve.
    pub target: Constrained<Power, StrictlyPositive>,
    /// Thinnest and thickest outer layer to consider.
    pub bracket: [Length; 2],
}

/// Sizes the outermost layer of a wall to meet a target heat flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct OuterLayerSizing {
    pub config: SizingConfig,
}

impl Model for OuterLayerSizing {
    type Input = SizingInput;
    type Output = SizedConduction;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        MultilayerWall::size_outer_layer(&input.conduction, input.target, input.bracket, self.config)
    }
}
