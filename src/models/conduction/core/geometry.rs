use std::f64::consts::PI;

use uom::si::{
    f64::{Area, HeatTransfer, Length, ThermalConductivity},
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    units::ThermalResistance,
};

/// Shape of the conduction path.
///
/// Layers stack along the thickness direction: axially for a plane wall,
/// radially outward from `inner_radius` for cylinders and spheres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// A plane wall with a constant cross-sectional area.
    Plane {
        area: Constrained<Area, StrictlyPositive>,
    },
    /// A cylindrical shell of the given axial length.
    Cylinder {
        length: Constrained<Length, StrictlyPositive>,
        inner_radius: Constrained<Length, StrictlyPositive>,
    },
    /// A spherical shell.
    Sphere {
        inner_radius: Constrained<Length, StrictlyPositive>,
    },
}

impl Geometry {
    /// Creates a plane wall.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the area is not strictly positive.
    pub fn plane(area: Area) -> ConstraintResult<Self> {
        Ok(Self::Plane {
            area: StrictlyPositive::new(area)?,
        })
    }

    /// Creates a cylinder.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the length or inner radius is not strictly positive.
    pub fn cylinder(length: Length, inner_radius: Length) -> ConstraintResult<Self> {
        Ok(Self::Cylinder {
            length: StrictlyPositive::new(length)?,
            inner_radius: StrictlyPositive::new(inner_radius)?,
        })
    }

    /// Creates a sphere.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the inner radius is not strictly positive.
    pub fn sphere(inner_radius: Length) -> ConstraintResult<Self> {
        Ok(Self::Sphere {
            inner_radius: StrictlyPositive::new(inner_radius)?,
        })
    }

    /// Whether layers stack radially.
    #[must_use]
    pub fn is_radial(&self) -> bool {
        !matches!(self, Self::Plane { .. })
    }

    /// Radius of the innermost surface, or `None` for a plane wall.
    #[must_use]
    pub fn inner_radius(&self) -> Option<Length> {
        match self {
            Self::Plane { .. } => None,
            Self::Cylinder { inner_radius, .. } | Self::Sphere { inner_radius } => {
                Some(**inner_radius)
            }
        }
    }

    /// Conduction resistance of a layer whose inner surface sits at `r_inner`.
    ///
    /// `r_inner` is ignored for a plane wall.
    pub(super) fn layer_resistance(
        &self,
        r_inner: Length,
        thickness: Length,
        conductivity: ThermalConductivity,
    ) -> ThermalResistance {
        let r_outer = r_inner + thickness;
        match self {
            Self::Plane { area } => thickness / (conductivity * **area),
            Self::Cylinder { length, .. } => {
                (r_outer / r_inner).get::<ratio>().ln() / (2.0 * PI * **length * conductivity)
            }
            Self::Sphere { .. } => {
                (1.0 / r_inner - 1.0 / r_outer) / (4.0 * PI * conductivity)
            }
        }
    }

    /// Area of the surface at `radius`.
    ///
    /// `radius` is ignored for a plane wall.
    pub(super) fn surface_area(&self, radius: Length) -> Area {
        match self {
            Self::Plane { area } => **area,
            Self::Cylinder { length, .. } => 2.0 * PI * radius * **length,
            Self::Sphere { .. } => 4.0 * PI * radius * radius,
        }
    }

    /// Convection resistance `1/(hA)` of the surface at `radius`.
    pub(super) fn convection_resistance(
        &self,
        radius: Length,
        coefficient: HeatTransfer,
    ) -> ThermalResistance {
        1.0 / (coefficient * self.surface_area(radius))
    }

    /// Critical insulation radius for an outer layer of the given conductivity.
    ///
    /// `k/h` for a cylinder and `2k/h` for a sphere; plane walls have none.
    #[must_use]
    pub fn critical_radius(
        &self,
        conductivity: ThermalConductivity,
        coefficient: HeatTransfer,
    ) -> Option<Length> {
        match self {
            Self::Plane { .. } => None,
            Self::Cylinder { .. } => Some(conductivity / coefficient),
            Self::Sphere { .. } => Some(2.0 * conductivity / coefficient),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, heat_transfer::watt_per_square_meter_kelvin, length::meter,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    fn k(value: f64) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(value)
    }

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn plane_layer() -> ConstraintResult<()> {
        let wall = Geometry::plane(Area::new::<square_meter>(2.0))?;
        let r = wall.layer_resistance(m(0.0), m(0.2), k(0.5));
        assert_relative_eq!(r.value, 0.2);
        Ok(())
    }

    #[test]
    fn cylinder_layer() -> ConstraintResult<()> {
        let pipe = Geometry::cylinder(m(1.0), m(0.05))?;
        let r = pipe.layer_resistance(m(0.05), m(0.05), k(1.0));
        assert_relative_eq!(r.value, 2.0_f64.ln() / (2.0 * PI));
        Ok(())
    }

    #[test]
    fn sphere_layer() -> ConstraintResult<()> {
        let shell = Geometry::sphere(m(0.1))?;
        let r = shell.layer_resistance(m(0.1), m(0.1), k(1.0));
        assert_relative_eq!(r.value, (10.0 - 5.0) / (4.0 * PI));
        Ok(())
    }

    #[test]
    fn convection_on_each_shape() -> ConstraintResult<()> {
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0);

        let wall = Geometry::plane(Area::new::<square_meter>(4.0))?;
        assert_relative_eq!(wall.convection_resistance(m(0.0), h).value, 0.025);

        let pipe = Geometry::cylinder(m(2.0), m(0.1))?;
        assert_relative_eq!(
            pipe.convection_resistance(m(0.1), h).value,
            1.0 / (10.0 * 2.0 * PI * 0.1 * 2.0)
        );

        let shell = Geometry::sphere(m(0.5))?;
        assert_relative_eq!(
            shell.convection_resistance(m(0.5), h).value,
            1.0 / (10.0 * 4.0 * PI * 0.25)
        );
        Ok(())
    }

    #[test]
    fn critical_radii() -> ConstraintResult<()> {
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(5.0);
        let insulation = k(0.05);

        let pipe = Geometry::cylinder(m(1.0), m(0.005))?;
        assert_relative_eq!(pipe.critical_radius(insulation, h).unwrap().get::<meter>(), 0.01);

        let shell = Geometry::sphere(m(0.005))?;
        assert_relative_eq!(shell.critical_radius(insulation, h).unwrap().get::<meter>(), 0.02);

        let wall = Geometry::plane(Area::new::<square_meter>(1.0))?;
        assert!(wall.critical_radius(insulation, h).is_none());
        Ok(())
    }

    #[test]
    fn rejects_degenerate_shapes() {
        assert!(Geometry::plane(Area::new::<square_meter>(0.0)).is_err());
        assert!(Geometry::cylinder(m(1.0), m(-0.1)).is_err());
        assert!(Geometry::sphere(m(0.0)).is_err());
    }
}
