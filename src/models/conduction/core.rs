//! Steady one-dimensional conduction through multilayer walls.
//!
//! A wall is modeled as a series thermal network: optional convection on
//! the inner surface, one conduction resistance per layer, and optional
//! convection on the outer surface. Plane, cylindrical, and spherical
//! geometries differ only in how each resistance is computed.

mod error;
mod geometry;
mod input;
mod layer;
mod results;
mod sizing;
mod solve;

pub use error::ConductionError;
pub use geometry::Geometry;
pub use input::{ConductionInput, Surface};
pub use layer::Layer;
pub use results::{ConductionResults, CriticalRadius, ElementKind, ResistanceElement};
pub use sizing::{SizedConduction, SizingConfig, SizingError};

use uom::si::f64::{Length, Power};

use crate::support::constraint::{Constrained, StrictlyPositive};

use solve::solve;

/// Entry point for solving a multilayer conduction problem.
pub struct MultilayerWall;

impl MultilayerWall {
    /// Solves the series network for heat flow and node temperatures.
    ///
    /// # Errors
    ///
    /// Returns [`ConductionError::NoLayers`] if the wall has no layers.
    pub fn solve(input: &ConductionInput) -> Result<ConductionResults, ConductionError> {
        solve(input)
    }

    /// Finds the outermost layer thickness that yields a target heat flow magnitude.
    ///
    /// The search runs between the two bracket thicknesses.
    ///
    /// # Errors
    ///
    /// Returns a [`SizingError`] if the bracket does not contain the target
    /// or the solver fails to converge.
    pub fn size_outer_layer(
        input: &ConductionInput,
        target: Constrained<Power, StrictlyPositive>,
        bracket: [Length; 2],
        config: SizingConfig,
    ) -> Result<SizedConduction, SizingError> {
        sizing::size_outer_layer(input, target, bracket, config)
    }
}
