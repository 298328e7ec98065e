use std::str::FromStr;

use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

use super::PropertyError;

/// A solid with a tabulated room-temperature conductivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub name: &'static str,
    /// Conductivity near 300 K, in W/m·K.
    k: f64,
}

impl Material {
    const fn new(name: &'static str, k: f64) -> Self {
        Self { name, k }
    }

    #[must_use]
    pub fn conductivity(&self) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(self.k)
    }

    /// Finds a material by name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::UnknownMaterial`] if no entry matches.
    pub fn find(name: &str) -> Result<Self, PropertyError> {
        let wanted = name.trim();
        MATERIALS
            .iter()
            .find(|material| material.name.eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| PropertyError::UnknownMaterial {
                name: name.to_owned(),
            })
    }
}

impl FromStr for Material {
    type Err = PropertyError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::find(name)
    }
}

/// Solids available for layer selection.
pub const MATERIALS: &[Material] = &[
    Material::new("Aluminum", 237.0),
    Material::new("Copper", 401.0),
    Material::new("Iron", 80.2),
    Material::new("Carbon steel", 63.9),
    Material::new("Stainless steel 304", 14.9),
    Material::new("Brass", 110.0),
    Material::new("Bronze", 52.0),
    Material::new("Lead", 35.3),
    Material::new("Nickel", 90.7),
    Material::new("Silver", 429.0),
    Material::new("Gold", 317.0),
    Material::new("Titanium", 21.9),
    Material::new("Zinc", 116.0),
    Material::new("Common brick", 0.72),
    Material::new("Concrete", 1.4),
    Material::new("Window glass", 0.78),
    Material::new("Gypsum board", 0.17),
    Material::new("Plywood", 0.12),
    Material::new("Fiberglass", 0.043),
    Material::new("Expanded polystyrene", 0.033),
    Material::new("Mineral wool", 0.040),
    Material::new("Oak", 0.17),
    Material::new("Pine", 0.12),
    Material::new("Ice", 1.88),
];
