//! Problem formulation for outer-layer sizing.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Length, Power},
    length::meter,
    power::watt,
};

use crate::{
    models::conduction::core::{ConductionError, ConductionInput, solve::solve},
    support::constraint::StrictlyPositive,
};

use super::SizedConduction;

/// Model adapter exposing the outermost layer thickness as the sole input.
pub(super) struct OuterLayerModel<'a> {
    base: &'a ConductionInput,
}

impl<'a> OuterLayerModel<'a> {
    pub(super) fn new(base: &'a ConductionInput) -> Self {
        Self { base }
    }
}

impl Model for OuterLayerModel<'_> {
    type Input = Length;
    type Output = SizedConduction;
    type Error = ConductionError;

    fn call(&self, thickness: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mut input = self.base.clone();
        let outer = input.layers.last_mut().ok_or(ConductionError::NoLayers)?;

        let checked = StrictlyPositive::new(*thickness).map_err(|source| {
            ConductionError::InvalidLayer {
                layer: outer.name().to_owned(),
                property: "thickness",
                source,
            }
        })?;
        *outer = outer.with_thickness(checked);

        Ok(SizedConduction {
            thickness: *thickness,
            results: solve(&input)?,
        })
    }
}

/// Equation problem for sizing.
///
/// Computes the residual as `|achieved heat flow| - target`.
pub(super) struct OuterLayerProblem {
    target: Power,
}

impl OuterLayerProblem {
    pub(super) fn new(target: Power) -> Self {
        Self { target }
    }

    pub(super) fn residual(&self, output: &SizedConduction) -> f64 {
        output.results.heat_flow.get::<watt>().abs() - self.target.get::<watt>()
    }
}

impl EquationProblem<1> for OuterLayerProblem {
    type Input = Length;
    type Output = SizedConduction;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Length::new::<meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output)])
    }
}
