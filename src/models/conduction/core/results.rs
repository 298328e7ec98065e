use uom::si::f64::{HeatFluxDensity, Length, Power, ThermodynamicTemperature};

use crate::support::units::ThermalResistance;

/// What a resistance element in the network represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    InnerConvection,
    /// Conduction through the layer at this index.
    Layer(usize),
    OuterConvection,
}

/// One series resistance, in network order from inner to outer.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistanceElement {
    pub kind: ElementKind,
    pub label: String,
    pub resistance: ThermalResistance,
}

/// Critical insulation radius of the outermost layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalRadius {
    pub radius: Length,
    /// Outer radius of the outermost layer.
    pub outer_radius: Length,
}

impl CriticalRadius {
    /// Whether adding more of the outer material would increase heat loss.
    #[must_use]
    pub fn below_critical(&self) -> bool {
        self.outer_radius < self.radius
    }
}

/// Solution of a conduction problem.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductionResults {
    pub elements: Vec<ResistanceElement>,
    pub total_resistance: ThermalResistance,

    /// Heat flow from the inner boundary toward the outer one.
    ///
    /// Negative when the outer boundary is hotter.
    pub heat_flow: Power,

    /// Heat flux through a plane wall; `None` for radial geometries.
    pub heat_flux: Option<HeatFluxDensity>,

    /// Temperatures at every node of the network.
    ///
    /// The first entry is the inner boundary temperature and the last is the
    /// outer one; entry `i + 1` sits after `elements[i]`.
    pub node_temperatures: Vec<ThermodynamicTemperature>,

    /// Shell radii from the innermost surface outward; empty for a plane wall.
    pub radii: Vec<Length>,

    /// Present for radial geometries with outer convection.
    pub critical_radius: Option<CriticalRadius>,
}

impl ConductionResults {
    /// Temperatures at the solid surfaces and layer interfaces only.
    ///
    /// Skips the fluid nodes on either side of a convection element.
    pub fn interface_temperatures(&self) -> impl Iterator<Item = ThermodynamicTemperature> + '_ {
        let first = usize::from(
            self.elements
                .first()
                .is_some_and(|e| e.kind == ElementKind::InnerConvection),
        );
        let last = self.node_temperatures.len()
            - usize::from(
                self.elements
                    .last()
                    .is_some_and(|e| e.kind == ElementKind::OuterConvection),
            );
        self.node_temperatures[first..last].iter().copied()
    }
}
