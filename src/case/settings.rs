use serde::Deserialize;

use crate::support::{
    properties::Extrapolation,
    units::{
        AreaUnit, ConductivityUnit, ConvectionUnit, HeatFlowUnit, HeatFluxUnit, LengthUnit,
        PressureUnit, TemperatureUnit, VelocityUnit,
    },
};

/// The `[settings]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Policy for temperatures outside a property table.
    pub extrapolation: Extrapolation,

    /// Number of points in a flat-plate coefficient profile.
    pub profile_samples: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            extrapolation: Extrapolation::Clamp,
            profile_samples: 100,
        }
    }
}

/// The `[units]` table.
///
/// Every input number in `[problem]` is read in these units, and results are
/// printed in them. Omitted keys default to SI (pressure to kPa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Units {
    pub temperature: TemperatureUnit,
    pub length: LengthUnit,
    pub area: AreaUnit,
    pub conductivity: ConductivityUnit,
    pub convection: ConvectionUnit,
    pub velocity: VelocityUnit,
    pub pressure: PressureUnit,
    pub heat_flow: HeatFlowUnit,
    pub heat_flux: HeatFluxUnit,
}
