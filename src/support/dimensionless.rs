//! Dimensionless groups used by the convection correlations.
//!
//! Each group wraps a strictly positive `f64` and dereferences to it, so a
//! correlation can only be fed values that make physical sense.

use std::{fmt, ops::Deref};

use uom::si::{
    f64::{HeatTransfer, Length, ThermalConductivity, Velocity},
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    units::KinematicViscosity,
};

macro_rules! dimensionless_group {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(Constrained<f64, StrictlyPositive>);

        impl $name {
            #[doc = concat!("Creates a [`", stringify!($name), "`] number.")]
            ///
            /// # Errors
            ///
            /// Returns `Err` if the value is zero, negative, or `NaN`.
            pub fn new(value: f64) -> ConstraintResult<Self> {
                Ok(Self(StrictlyPositive::new(value)?))
            }
        }

        impl Deref for $name {
            type Target = f64;

            fn deref(&self) -> &Self::Target {
                self.0.as_ref()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&**self, f)
            }
        }
    };
}

dimensionless_group!(
    /// Reynolds number, the ratio of inertial to viscous forces.
    Reynolds
);

dimensionless_group!(
    /// Prandtl number, the ratio of momentum to thermal diffusivity.
    Prandtl
);

dimensionless_group!(
    /// Nusselt number, the dimensionless convection coefficient `hL/k`.
    Nusselt
);

impl Reynolds {
    /// Computes `Re = V·L/ν` for a characteristic length `L`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the result is not strictly positive.
    pub fn from_flow(
        velocity: Velocity,
        length: Length,
        kinematic_viscosity: KinematicViscosity,
    ) -> ConstraintResult<Self> {
        Self::new((velocity * length / kinematic_viscosity).get::<ratio>())
    }
}

impl Nusselt {
    /// Converts to a convection coefficient `h = Nu·k/L`.
    #[must_use]
    pub fn coefficient(self, conductivity: ThermalConductivity, length: Length) -> HeatTransfer {
        *self * conductivity / length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        diffusion_coefficient::square_meter_per_second, heat_transfer::watt_per_square_meter_kelvin,
        length::meter, thermal_conductivity::watt_per_meter_kelvin, velocity::meter_per_second,
    };

    #[test]
    fn reynolds_from_flow() -> ConstraintResult<()> {
        let re = Reynolds::from_flow(
            Velocity::new::<meter_per_second>(10.0),
            Length::new::<meter>(0.5),
            KinematicViscosity::new::<square_meter_per_second>(1.516e-5),
        )?;
        assert_relative_eq!(*re, 329_815.3, max_relative = 1e-6);
        Ok(())
    }

    #[test]
    fn nusselt_to_coefficient() -> ConstraintResult<()> {
        let h = Nusselt::new(100.0)?.coefficient(
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.025),
            Length::new::<meter>(0.5),
        );
        assert_relative_eq!(h.get::<watt_per_square_meter_kelvin>(), 5.0);
        Ok(())
    }

    #[test]
    fn rejects_non_positive() {
        assert!(Reynolds::new(0.0).is_err());
        assert!(Prandtl::new(-0.7).is_err());
        assert!(Nusselt::new(f64::NAN).is_err());
    }
}
