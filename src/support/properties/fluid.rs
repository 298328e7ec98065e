mod air;
mod ammonia;
mod engine_oil;
mod glycerin;
mod isobutane;
mod methane;
mod methanol;
mod propane;
mod r134a;
mod water;

use std::{fmt, str::FromStr};

use serde::Deserialize;

use super::{PropertyError, table::PropertyTable};

/// Fluids with tabulated transport properties.
///
/// Case files name a fluid by any spelling [`FromStr`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Fluid {
    /// Saturated water.
    Water,
    /// Saturated refrigerant-134a.
    R134a,
    /// Saturated ammonia.
    Ammonia,
    /// Saturated propane.
    Propane,
    /// Dry air, 1 atm reference.
    Air,
    Glycerin,
    Isobutane,
    Methane,
    Methanol,
    /// Unused engine oil.
    EngineOil,
}

/// Saturation phase for fluids tabulated as liquid and vapor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Liquid,
    Vapor,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Liquid => "liquid",
            Self::Vapor => "vapor",
        })
    }
}

impl Fluid {
    pub const ALL: &'static [Self] = &[
        Self::Water,
        Self::R134a,
        Self::Ammonia,
        Self::Propane,
        Self::Air,
        Self::Glycerin,
        Self::Isobutane,
        Self::Methane,
        Self::Methanol,
        Self::EngineOil,
    ];

    /// Key used in case files.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::R134a => "r134a",
            Self::Ammonia => "ammonia",
            Self::Propane => "propane",
            Self::Air => "air",
            Self::Glycerin => "glycerin",
            Self::Isobutane => "isobutane",
            Self::Methane => "methane",
            Self::Methanol => "methanol",
            Self::EngineOil => "engine_oil",
        }
    }

    /// Whether separate liquid and vapor tables exist.
    #[must_use]
    pub fn is_two_phase(self) -> bool {
        matches!(self, Self::Water | Self::R134a | Self::Ammonia | Self::Propane)
    }

    /// Resolves the table for a phase selection.
    ///
    /// Two-phase fluids default to the liquid table.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::PhaseNotApplicable`] when a phase is given
    /// for a single-phase fluid.
    pub fn table(self, phase: Option<Phase>) -> Result<PropertyTable, PropertyError> {
        if !self.is_two_phase() {
            if let Some(phase) = phase {
                return Err(PropertyError::PhaseNotApplicable { fluid: self, phase });
            }
        }

        let rows = match (self, phase.unwrap_or_default()) {
            (Self::Water, Phase::Liquid) => water::LIQUID,
            (Self::Water, Phase::Vapor) => water::VAPOR,
            (Self::R134a, Phase::Liquid) => r134a::LIQUID,
            (Self::R134a, Phase::Vapor) => r134a::VAPOR,
            (Self::Ammonia, Phase::Liquid) => ammonia::LIQUID,
            (Self::Ammonia, Phase::Vapor) => ammonia::VAPOR,
            (Self::Propane, Phase::Liquid) => propane::LIQUID,
            (Self::Propane, Phase::Vapor) => propane::VAPOR,
            (Self::Air, _) => air::GAS,
            (Self::Glycerin, _) => glycerin::LIQUID,
            (Self::Isobutane, _) => isobutane::LIQUID,
            (Self::Methane, _) => methane::LIQUID,
            (Self::Methanol, _) => methanol::LIQUID,
            (Self::EngineOil, _) => engine_oil::LIQUID,
        };

        Ok(PropertyTable::new(rows))
    }
}

impl fmt::Display for Fluid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Water => "saturated water",
            Self::R134a => "refrigerant-134a",
            Self::Ammonia => "ammonia",
            Self::Propane => "propane",
            Self::Air => "air",
            Self::Glycerin => "glycerin",
            Self::Isobutane => "isobutane",
            Self::Methane => "methane",
            Self::Methanol => "methanol",
            Self::EngineOil => "engine oil",
        })
    }
}

/// Lowercase with spaces, hyphens and underscores removed.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Fluid {
    type Err = PropertyError;

    /// Accepts the case-file key in any case, with or without separators,
    /// so `"R-134a"`, `"r134a"` and `"Engine oil"` all resolve.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let key = normalize(text);
        Self::ALL
            .iter()
            .copied()
            .find(|fluid| normalize(fluid.key()) == key)
            .ok_or_else(|| PropertyError::UnknownFluid {
                name: text.to_owned(),
            })
    }
}

impl TryFrom<String> for Fluid {
    type Error = PropertyError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::properties::table::Extrapolation;

    #[test]
    fn every_table_is_non_empty_and_ascending() {
        for &fluid in Fluid::ALL {
            let phases: &[Option<Phase>] = if fluid.is_two_phase() {
                &[Some(Phase::Liquid), Some(Phase::Vapor)]
            } else {
                &[None]
            };
            for &phase in phases {
                let rows = fluid.table(phase).unwrap().rows();
                assert!(!rows.is_empty(), "{fluid} {phase:?}");
                assert!(
                    rows.windows(2).all(|w| w[0].temperature < w[1].temperature),
                    "{fluid} {phase:?} is not strictly ascending"
                );
                assert!(rows.iter().all(|row| {
                    [
                        row.density,
                        row.specific_heat,
                        row.conductivity,
                        row.viscosity,
                        row.prandtl,
                    ]
                    .iter()
                    .all(|v| *v > 0.0)
                }));
            }
        }
    }

    #[test]
    fn phase_on_single_phase_fluid_is_rejected() {
        assert_eq!(
            Fluid::Air.table(Some(Phase::Liquid)).unwrap_err(),
            PropertyError::PhaseNotApplicable {
                fluid: Fluid::Air,
                phase: Phase::Liquid
            }
        );
    }

    #[test]
    fn two_phase_defaults_to_liquid() {
        let default = Fluid::Water.table(None).unwrap();
        let liquid = Fluid::Water.table(Some(Phase::Liquid)).unwrap();
        let at_20 = |t: PropertyTable| t.lookup(20.0, Extrapolation::Error).unwrap().row.density;
        assert_eq!(at_20(default), at_20(liquid));
        assert!(at_20(Fluid::Water.table(Some(Phase::Vapor)).unwrap()) < 1.0);
    }

    #[test]
    fn parses_keys() {
        assert_eq!("Engine oil".parse::<Fluid>(), Ok(Fluid::EngineOil));
        assert_eq!("R134a".parse::<Fluid>(), Ok(Fluid::R134a));
        assert_eq!("R-134a".parse::<Fluid>(), Ok(Fluid::R134a));
        assert_eq!("engine_oil".parse::<Fluid>(), Ok(Fluid::EngineOil));
        for &fluid in Fluid::ALL {
            assert_eq!(fluid.key().parse::<Fluid>(), Ok(fluid));
        }
        assert!(matches!(
            "mercury".parse::<Fluid>(),
            Err(PropertyError::UnknownFluid { .. })
        ));
    }
}
