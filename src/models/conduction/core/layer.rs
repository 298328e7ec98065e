use uom::si::f64::{Length, ThermalConductivity};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::ConductionError;

/// One solid layer of a composite wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    name: String,
    thickness: Constrained<Length, StrictlyPositive>,
    conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
}

impl Layer {
    /// Creates a layer.
    ///
    /// # Errors
    ///
    /// Returns [`ConductionError::InvalidLayer`] if the thickness or
    /// conductivity is not strictly positive.
    pub fn new(
        name: impl Into<String>,
        thickness: Length,
        conductivity: ThermalConductivity,
    ) -> Result<Self, ConductionError> {
        let name = name.into();

        let thickness = StrictlyPositive::new(thickness).map_err(|source| {
            ConductionError::InvalidLayer {
                layer: name.clone(),
                property: "thickness",
                source,
            }
        })?;

        let conductivity = StrictlyPositive::new(conductivity).map_err(|source| {
            ConductionError::InvalidLayer {
                layer: name.clone(),
                property: "conductivity",
                source,
            }
        })?;

        Ok(Self {
            name,
            thickness,
            conductivity,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn thickness(&self) -> Length {
        *self.thickness
    }

    #[must_use]
    pub fn conductivity(&self) -> ThermalConductivity {
        *self.conductivity
    }

    /// Returns a copy with a different thickness.
    pub(super) fn with_thickness(&self, thickness: Constrained<Length, StrictlyPositive>) -> Self {
        Self {
            thickness,
            ..self.clone()
        }
    }
}
