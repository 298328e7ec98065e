//! Plain-text summary of a solved case.

use std::fmt::{self, Display, Formatter};

use uom::si::{
    f64::{Area, HeatTransfer, Length, Power, TemperatureInterval, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    temperature_interval::kelvin,
};

use crate::{
    models::{
        conduction::{ConductionResults, SizedConduction},
        convection::{
            cylinder::CylinderResults,
            flat_plate::{FlatPlateResults, LocalResults, Profile},
            internal_flow::InternalFlowResults,
        },
    },
    support::{
        correlation::Warning,
        properties::FluidProperties,
        units::{TemperatureUnit, UnitSymbol},
    },
};

use super::Units;

/// What a case produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Conduction {
        results: ConductionResults,
        sizing: Option<SizedConduction>,
    },
    FlatPlate {
        average: FlatPlateResults,
        local: Option<LocalResults>,
        profile: Option<Profile>,
    },
    Cylinder(CylinderResults),
    InternalFlow(InternalFlowResults),
}

/// A solved case together with the units to present it in.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    pub units: Units,
    pub outcome: Outcome,
}

impl CaseReport {
    fn temperature(&self, t: ThermodynamicTemperature) -> String {
        let unit = self.units.temperature;
        format!("{:.2} {}", unit.value_of(t), unit.symbol())
    }

    fn interval(&self, dt: TemperatureInterval) -> String {
        let unit = self.units.temperature;
        let scale = match unit {
            TemperatureUnit::Celsius | TemperatureUnit::Kelvin => 1.0,
            TemperatureUnit::Fahrenheit | TemperatureUnit::Rankine => 1.8,
        };
        format!("{:.2} {}", dt.get::<kelvin>() * scale, unit.symbol())
    }

    fn length(&self, l: Length) -> String {
        let unit = self.units.length;
        format!("{:.6} {}", unit.value_of(l), unit.symbol())
    }

    fn area(&self, a: Area) -> String {
        let unit = self.units.area;
        format!("{:.6} {}", unit.value_of(a), unit.symbol())
    }

    fn heat_flow(&self, q: Power) -> String {
        let unit = self.units.heat_flow;
        format!("{:.4} {}", unit.value_of(q), unit.symbol())
    }

    fn coefficient(&self, h: HeatTransfer) -> String {
        let unit = self.units.convection;
        format!("{:.4} {}", unit.value_of(h), unit.symbol())
    }

    fn properties(&self, f: &mut Formatter<'_>, props: &FluidProperties) -> fmt::Result {
        writeln!(f, "Properties at {}", self.temperature(props.temperature))?;
        writeln!(f, "  density           {:.6} kg/m³", props.density.value)?;
        writeln!(f, "  specific heat     {:.2} J/kg·K", props.specific_heat.value)?;
        writeln!(
            f,
            "  conductivity      {:.6} {}",
            self.units.conductivity.value_of(props.conductivity),
            self.units.conductivity.symbol()
        )?;
        writeln!(f, "  viscosity         {:.6e} Pa·s", props.viscosity.value)?;
        writeln!(f, "  kinematic visc.   {:.6e} m²/s", props.kinematic_viscosity.value)?;
        writeln!(f, "  Prandtl           {:.4}", *props.prandtl)?;
        if props.clamped {
            writeln!(f, "  (outside the property table; edge values used)")?;
        }
        Ok(())
    }

    fn conduction(
        &self,
        f: &mut Formatter<'_>,
        results: &ConductionResults,
        sizing: Option<&SizedConduction>,
    ) -> fmt::Result {
        writeln!(f, "Conduction")?;
        writeln!(f, "Resistances")?;
        for element in &results.elements {
            writeln!(f, "  {:<20} {:.6e} K/W", element.label, element.resistance.value)?;
        }
        writeln!(f, "  {:<20} {:.6e} K/W", "total", results.total_resistance.value)?;
        writeln!(f, "Heat flow           {}", self.heat_flow(results.heat_flow))?;
        if let Some(flux) = results.heat_flux {
            let unit = self.units.heat_flux;
            writeln!(f, "Heat flux           {:.4} {}", unit.value_of(flux), unit.symbol())?;
        }
        writeln!(f, "Node temperatures")?;
        for t in &results.node_temperatures {
            writeln!(f, "  {}", self.temperature(*t))?;
        }
        if let Some(critical) = results.critical_radius {
            writeln!(
                f,
                "Critical radius     {} (outer radius {}{})",
                self.length(critical.radius),
                self.length(critical.outer_radius),
                if critical.below_critical() {
                    ", below critical: more insulation increases heat loss"
                } else {
                    ""
                }
            )?;
        }
        if let Some(sized) = sizing {
            writeln!(
                f,
                "Sized outer layer   {} for {}",
                self.length(sized.thickness),
                self.heat_flow(sized.results.heat_flow.abs())
            )?;
        }
        Ok(())
    }

    fn flat_plate(
        &self,
        f: &mut Formatter<'_>,
        average: &FlatPlateResults,
        local: Option<&LocalResults>,
        profile: Option<&Profile>,
    ) -> fmt::Result {
        writeln!(f, "Flat plate, parallel flow")?;
        self.properties(f, &average.properties)?;
        writeln!(f, "Reynolds            {:.1} ({:?})", *average.reynolds, average.regime)?;
        writeln!(f, "Nusselt             {:.4}", *average.nusselt)?;
        writeln!(f, "Coefficient         {}", self.coefficient(average.coefficient))?;
        writeln!(f, "Area                {}", self.area(average.area))?;
        writeln!(f, "Heat flow           {}", self.heat_flow(average.heat_flow))?;
        if let Some(split) = average.mixed {
            writeln!(f, "Transition at       {}", self.length(split.critical_length))?;
            writeln!(f, "  laminar           {}", self.heat_flow(split.laminar_heat_flow))?;
            writeln!(f, "  turbulent         {}", self.heat_flow(split.turbulent_heat_flow))?;
        }
        warnings(f, &average.warnings)?;

        if let Some(local) = local {
            let unit = self.units.heat_flux;
            writeln!(f, "Local at            {}", self.length(local.position))?;
            writeln!(f, "  Reynolds          {:.1}", *local.reynolds)?;
            writeln!(f, "  coefficient       {}", self.coefficient(local.coefficient))?;
            writeln!(
                f,
                "  heat flux         {:.4} {}",
                unit.value_of(local.heat_flux),
                unit.symbol()
            )?;
        }

        if let Some(profile) = profile {
            writeln!(f, "Profile ({} points)", profile.points.len())?;
            for point in &profile.points {
                writeln!(
                    f,
                    "  {}  {}{}",
                    self.length(point.position),
                    self.coefficient(point.coefficient),
                    if point.turbulent { "  turbulent" } else { "" }
                )?;
            }
        }
        Ok(())
    }

    fn cylinder(&self, f: &mut Formatter<'_>, results: &CylinderResults) -> fmt::Result {
        writeln!(f, "Cylinder in cross flow")?;
        self.properties(f, &results.properties)?;
        writeln!(f, "Reynolds            {:.1}", *results.reynolds)?;
        writeln!(f, "Correlation         {:?}", results.correlation)?;
        if let Some(row) = results.compact_row {
            writeln!(f, "  C = {}, m = {}", row.c, row.m)?;
        }
        writeln!(f, "Nusselt             {:.4}", *results.nusselt)?;
        writeln!(f, "Coefficient         {}", self.coefficient(results.coefficient))?;
        writeln!(f, "Area                {}", self.area(results.area))?;
        writeln!(f, "Heat flow           {}", self.heat_flow(results.heat_flow))
    }

    fn internal_flow(&self, f: &mut Formatter<'_>, results: &InternalFlowResults) -> fmt::Result {
        writeln!(f, "Internal flow, constant wall temperature")?;
        writeln!(f, "Log-mean ΔT         {}", self.interval(results.log_mean_difference))?;
        self.properties(f, &results.properties)?;
        writeln!(
            f,
            "Reynolds            {:.1} ({:?})",
            *results.reynolds, results.regime
        )?;
        writeln!(f, "Correlation         {:?} ({:?})", results.correlation, results.direction)?;
        writeln!(f, "Nusselt             {:.4}", *results.nusselt)?;
        writeln!(f, "Coefficient         {}", self.coefficient(results.coefficient))?;
        writeln!(f, "Area                {}", self.area(results.area))?;
        writeln!(f, "Heat flow           {}", self.heat_flow(results.heat_flow))?;
        writeln!(
            f,
            "Mass flow           {:.6} kg/s",
            results.mass_flow.get::<kilogram_per_second>()
        )?;
        writeln!(f, "Energy balance      {}", self.heat_flow(results.energy_balance))?;
        writeln!(f, "Predicted outlet    {}", self.temperature(results.predicted_outlet))?;
        warnings(f, &results.warnings)
    }
}

fn warnings(f: &mut Formatter<'_>, warnings: &[Warning]) -> fmt::Result {
    for warning in warnings {
        writeln!(f, "Warning: {warning}")?;
    }
    Ok(())
}

impl Display for CaseReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Conduction { results, sizing } => {
                self.conduction(f, results, sizing.as_ref())
            }
            Outcome::FlatPlate {
                average,
                local,
                profile,
            } => self.flat_plate(f, average, local.as_ref(), profile.as_ref()),
            Outcome::Cylinder(results) => self.cylinder(f, results),
            Outcome::InternalFlow(results) => self.internal_flow(f, results),
        }
    }
}
