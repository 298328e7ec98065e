//! The `[problem]` table and its conversion into model inputs.

use num_traits::Zero;
use serde::Deserialize;
use uom::si::f64::{Length, ThermodynamicTemperature};

use crate::{
    models::{
        conduction::{ConductionInput, Geometry, Layer, SizingInput, Surface},
        convection::{
            ExternalFlow, cylinder::CylinderInput, flat_plate::FlatPlateInput,
            internal_flow::InternalFlowInput,
        },
    },
    support::{
        constraint::{Constrained, StrictlyPositive},
        correlation::cylinder::CylinderCorrelation,
        properties::{Fluid, FluidSelection, Material, Phase},
    },
};

use super::{CaseError, Units};

/// What to compute, tagged by `mode`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Problem {
    Conduction(ConductionCase),
    FlatPlate(FlatPlateCase),
    Cylinder(CylinderCase),
    InternalFlow(InternalFlowCase),
}

/// Wall shape and the dimensions that fix it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum GeometryCase {
    Plane { area: f64 },
    Cylinder { length: f64, inner_radius: f64 },
    Sphere { inner_radius: f64 },
}

/// One `[[problem.layers]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayerCase {
    pub name: String,
    pub thickness: f64,
    /// Name from the built-in material list; its conductivity is already SI.
    pub material: Option<String>,
    /// Conductivity in the configured unit.
    pub conductivity: Option<f64>,
}

/// Optional `[problem.sizing]` table for the outer layer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SizingCase {
    pub target_heat_flow: f64,
    pub min_thickness: f64,
    pub max_thickness: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConductionCase {
    pub geometry: GeometryCase,
    pub layers: Vec<LayerCase>,
    pub inner_temperature: f64,
    pub outer_temperature: f64,
    /// Zero or omitted means no convection on that surface.
    #[serde(default)]
    pub inner_convection: f64,
    #[serde(default)]
    pub outer_convection: f64,
    pub sizing: Option<SizingCase>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlatPlateCase {
    pub fluid: Fluid,
    pub phase: Option<Phase>,
    pub pressure: Option<f64>,
    pub velocity: f64,
    pub free_stream_temperature: f64,
    pub surface_temperature: f64,
    pub length: f64,
    #[serde(default = "unit_width")]
    pub width: f64,
    /// Distance from the leading edge for a local analysis.
    pub local_position: Option<f64>,
    #[serde(default)]
    pub profile: bool,
}

fn unit_width() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CylinderCase {
    pub fluid: Fluid,
    pub phase: Option<Phase>,
    pub pressure: Option<f64>,
    pub velocity: f64,
    pub free_stream_temperature: f64,
    pub surface_temperature: f64,
    pub diameter: f64,
    pub length: f64,
    #[serde(default)]
    pub correlation: CylinderCorrelation,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InternalFlowCase {
    pub fluid: Fluid,
    pub phase: Option<Phase>,
    pub pressure: Option<f64>,
    pub velocity: f64,
    pub diameter: f64,
    pub length: f64,
    pub inlet_temperature: f64,
    pub outlet_temperature: f64,
    pub wall_temperature: f64,
}

fn positive<T: PartialOrd + Zero>(
    field: &'static str,
    value: T,
) -> Result<Constrained<T, StrictlyPositive>, CaseError> {
    StrictlyPositive::new(value).map_err(|source| CaseError::Invalid { field, source })
}

/// Rejects NaN and infinities before they reach a model.
fn finite(field: &'static str, value: f64) -> Result<f64, CaseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CaseError::NonFinite { field, value })
    }
}

fn temperature(
    units: &Units,
    field: &'static str,
    value: f64,
) -> Result<ThermodynamicTemperature, CaseError> {
    Ok(units.temperature.quantity(finite(field, value)?)?)
}

fn length(units: &Units, field: &'static str, value: f64) -> Result<Length, CaseError> {
    Ok(units.length.quantity(finite(field, value)?))
}

fn fluid_selection(
    units: &Units,
    fluid: Fluid,
    phase: Option<Phase>,
    pressure: Option<f64>,
) -> Result<FluidSelection, CaseError> {
    Ok(FluidSelection {
        fluid,
        phase,
        pressure: pressure
            .map(|p| finite("pressure", p).map(|p| units.pressure.quantity(p)))
            .transpose()?,
    })
}

fn external_flow(
    units: &Units,
    fluid: FluidSelection,
    velocity: f64,
    free_stream_temperature: f64,
    surface_temperature: f64,
) -> Result<ExternalFlow, CaseError> {
    Ok(ExternalFlow::new(
        fluid,
        positive(
            "velocity",
            units.velocity.quantity(finite("velocity", velocity)?),
        )?,
        temperature(units, "free_stream_temperature", free_stream_temperature)?,
        temperature(units, "surface_temperature", surface_temperature)?,
    ))
}

impl LayerCase {
    fn to_layer(&self, units: &Units) -> Result<Layer, CaseError> {
        let conductivity = match (&self.material, self.conductivity) {
            (Some(material), None) => Material::find(material)?.conductivity(),
            (None, Some(k)) => units.conductivity.quantity(finite("conductivity", k)?),
            _ => {
                return Err(CaseError::LayerConductivity {
                    layer: self.name.clone(),
                });
            }
        };
        Ok(Layer::new(
            self.name.clone(),
            length(units, "thickness", self.thickness)?,
            conductivity,
        )?)
    }
}

impl ConductionCase {
    pub(super) fn input(&self, units: &Units) -> Result<ConductionInput, CaseError> {
        let geometry = match self.geometry {
            GeometryCase::Plane { area } => {
                Geometry::plane(units.area.quantity(finite("area", area)?))
            }
            GeometryCase::Cylinder {
                length: cylinder_length,
                inner_radius,
            } => Geometry::cylinder(
                length(units, "length", cylinder_length)?,
                length(units, "inner_radius", inner_radius)?,
            ),
            GeometryCase::Sphere { inner_radius } => {
                Geometry::sphere(length(units, "inner_radius", inner_radius)?)
            }
        }
        .map_err(|source| CaseError::Invalid {
            field: "geometry",
            source,
        })?;

        let layers = self
            .layers
            .iter()
            .map(|layer| layer.to_layer(units))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ConductionInput::new(
            geometry,
            layers,
            temperature(units, "inner_temperature", self.inner_temperature)?,
            temperature(units, "outer_temperature", self.outer_temperature)?,
        )
        .with_convection(
            Surface::Inner,
            units
                .convection
                .quantity(finite("inner_convection", self.inner_convection)?),
        )?
        .with_convection(
            Surface::Outer,
            units
                .convection
                .quantity(finite("outer_convection", self.outer_convection)?),
        )?)
    }

    pub(super) fn sizing(&self, units: &Units) -> Result<Option<SizingInput>, CaseError> {
        let Some(sizing) = self.sizing else {
            return Ok(None);
        };
        Ok(Some(SizingInput {
            conduction: self.input(units)?,
            target: positive(
                "target_heat_flow",
                units
                    .heat_flow
                    .quantity(finite("target_heat_flow", sizing.target_heat_flow)?),
            )?,
            bracket: [
                length(units, "min_thickness", sizing.min_thickness)?,
                length(units, "max_thickness", sizing.max_thickness)?,
            ],
        }))
    }
}

impl FlatPlateCase {
    pub(super) fn input(&self, units: &Units) -> Result<FlatPlateInput, CaseError> {
        Ok(FlatPlateInput {
            flow: external_flow(
                units,
                fluid_selection(units, self.fluid, self.phase, self.pressure)?,
                self.velocity,
                self.free_stream_temperature,
                self.surface_temperature,
            )?,
            length: positive("length", length(units, "length", self.length)?)?,
            width: positive("width", length(units, "width", self.width)?)?,
        })
    }

    pub(super) fn local_position(&self, units: &Units) -> Result<Option<Length>, CaseError> {
        self.local_position
            .map(|x| length(units, "local_position", x))
            .transpose()
    }
}

impl CylinderCase {
    pub(super) fn input(&self, units: &Units) -> Result<CylinderInput, CaseError> {
        Ok(CylinderInput {
            flow: external_flow(
                units,
                fluid_selection(units, self.fluid, self.phase, self.pressure)?,
                self.velocity,
                self.free_stream_temperature,
                self.surface_temperature,
            )?,
            diameter: positive("diameter", length(units, "diameter", self.diameter)?)?,
            length: positive("length", length(units, "length", self.length)?)?,
        })
    }
}

impl InternalFlowCase {
    pub(super) fn input(&self, units: &Units) -> Result<InternalFlowInput, CaseError> {
        Ok(InternalFlowInput {
            fluid: fluid_selection(units, self.fluid, self.phase, self.pressure)?,
            velocity: positive(
                "velocity",
                units.velocity.quantity(finite("velocity", self.velocity)?),
            )?,
            diameter: positive("diameter", length(units, "diameter", self.diameter)?)?,
            length: positive("length", length(units, "length", self.length)?)?,
            inlet_temperature: temperature(units, "inlet_temperature", self.inlet_temperature)?,
            outlet_temperature: temperature(units, "outlet_temperature", self.outlet_temperature)?,
            wall_temperature: temperature(units, "wall_temperature", self.wall_temperature)?,
        })
    }
}
