use serde::Deserialize;
use uom::si::{
    area::square_meter,
    f64::{Area, HeatFluxDensity, HeatTransfer, Length, Power, Pressure, ThermalConductivity, Velocity},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    power::watt,
    pressure::pascal,
    thermal_conductivity::watt_per_meter_kelvin,
    velocity::meter_per_second,
};

use super::UnitSymbol;

/// Length units for thicknesses, radii, diameters, and plate dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum LengthUnit {
    #[default]
    Meter,
    Centimeter,
    Millimeter,
    Inch,
    Foot,
}

impl LengthUnit {
    /// Size of one unit in meters.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Meter => 1.0,
            Self::Centimeter => 0.01,
            Self::Millimeter => 0.001,
            Self::Inch => 0.0254,
            Self::Foot => 0.3048,
        }
    }

    /// Converts a value expressed in this unit into a [`Length`].
    #[must_use]
    pub fn quantity(self, value: f64) -> Length {
        Length::new::<meter>(value * self.factor())
    }

    /// Expresses a [`Length`] in this unit.
    #[must_use]
    pub fn value_of(self, length: Length) -> f64 {
        length.get::<meter>() / self.factor()
    }
}

impl UnitSymbol for LengthUnit {
    const KIND: &'static str = "length";
    const ALL: &'static [Self] = &[
        Self::Meter,
        Self::Centimeter,
        Self::Millimeter,
        Self::Inch,
        Self::Foot,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
            Self::Inch => "in",
            Self::Foot => "ft",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Meter => &["meter", "metre"],
            Self::Centimeter => &["centimeter"],
            Self::Millimeter => &["millimeter"],
            Self::Inch => &["inch", "\""],
            Self::Foot => &["foot", "feet", "'"],
        }
    }
}

/// Area units for plane-wall cross sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum AreaUnit {
    #[default]
    SquareMeter,
    SquareCentimeter,
    SquareMillimeter,
    SquareFoot,
    SquareInch,
}

impl AreaUnit {
    /// Size of one unit in square meters.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::SquareMeter => 1.0,
            Self::SquareCentimeter => 1e-4,
            Self::SquareMillimeter => 1e-6,
            Self::SquareFoot => 0.092903,
            Self::SquareInch => 0.00064516,
        }
    }

    #[must_use]
    pub fn quantity(self, value: f64) -> Area {
        Area::new::<square_meter>(value * self.factor())
    }

    #[must_use]
    pub fn value_of(self, area: Area) -> f64 {
        area.get::<square_meter>() / self.factor()
    }
}

impl UnitSymbol for AreaUnit {
    const KIND: &'static str = "area";
    const ALL: &'static [Self] = &[
        Self::SquareMeter,
        Self::SquareCentimeter,
        Self::SquareMillimeter,
        Self::SquareFoot,
        Self::SquareInch,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::SquareMeter => "m²",
            Self::SquareCentimeter => "cm²",
            Self::SquareMillimeter => "mm²",
            Self::SquareFoot => "ft²",
            Self::SquareInch => "in²",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::SquareMeter => &["m2", "m^2"],
            Self::SquareCentimeter => &["cm2", "cm^2"],
            Self::SquareMillimeter => &["mm2", "mm^2"],
            Self::SquareFoot => &["ft2", "ft^2"],
            Self::SquareInch => &["in2", "in^2"],
        }
    }
}

/// Thermal conductivity units for manually entered layer conductivities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ConductivityUnit {
    #[default]
    WattPerMeterKelvin,
    WattPerCentimeterKelvin,
    WattPerMillimeterKelvin,
    BtuPerHourFootFahrenheit,
}

impl ConductivityUnit {
    /// Size of one unit in W/m·K.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::WattPerMeterKelvin => 1.0,
            Self::WattPerCentimeterKelvin => 100.0,
            Self::WattPerMillimeterKelvin => 1000.0,
            Self::BtuPerHourFootFahrenheit => 1.73073,
        }
    }

    #[must_use]
    pub fn quantity(self, value: f64) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(value * self.factor())
    }

    #[must_use]
    pub fn value_of(self, conductivity: ThermalConductivity) -> f64 {
        conductivity.get::<watt_per_meter_kelvin>() / self.factor()
    }
}

impl UnitSymbol for ConductivityUnit {
    const KIND: &'static str = "thermal conductivity";
    const ALL: &'static [Self] = &[
        Self::WattPerMeterKelvin,
        Self::WattPerCentimeterKelvin,
        Self::WattPerMillimeterKelvin,
        Self::BtuPerHourFootFahrenheit,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::WattPerMeterKelvin => "W/m·K",
            Self::WattPerCentimeterKelvin => "W/cm·K",
            Self::WattPerMillimeterKelvin => "W/mm·K",
            Self::BtuPerHourFootFahrenheit => "BTU/(h·ft·°F)",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::WattPerMeterKelvin => &["W/mK", "W/m-K", "W/(m·K)"],
            Self::WattPerCentimeterKelvin => &["W/cmK", "W/cm-K"],
            Self::WattPerMillimeterKelvin => &["W/mmK", "W/mm-K"],
            Self::BtuPerHourFootFahrenheit => &["BTU/h-ft-F", "Btu/(h ft F)"],
        }
    }
}

/// Convection coefficient units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ConvectionUnit {
    #[default]
    WattPerSquareMeterKelvin,
    WattPerSquareCentimeterKelvin,
    BtuPerHourSquareFootFahrenheit,
}

impl ConvectionUnit {
    /// Size of one unit in W/m²·K.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::WattPerSquareMeterKelvin => 1.0,
            Self::WattPerSquareCentimeterKelvin => 1e4,
            Self::BtuPerHourSquareFootFahrenheit => 5.67826,
        }
    }

    #[must_use]
    pub fn quantity(self, value: f64) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(value * self.factor())
    }

    #[must_use]
    pub fn value_of(self, coefficient: HeatTransfer) -> f64 {
        coefficient.get::<watt_per_square_meter_kelvin>() / self.factor()
    }
}

impl UnitSymbol for ConvectionUnit {
    const KIND: &'static str = "convection coefficient";
    const ALL: &'static [Self] = &[
        Self::WattPerSquareMeterKelvin,
        Self::WattPerSquareCentimeterKelvin,
        Self::BtuPerHourSquareFootFahrenheit,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::WattPerSquareMeterKelvin => "W/m²·K",
            Self::WattPerSquareCentimeterKelvin => "W/cm²·K",
            Self::BtuPerHourSquareFootFahrenheit => "BTU/(h·ft²·°F)",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::WattPerSquareMeterKelvin => &["W/m2K", "W/m2-K", "W/(m2·K)"],
            Self::WattPerSquareCentimeterKelvin => &["W/cm2K", "W/cm2-K"],
            Self::BtuPerHourSquareFootFahrenheit => &["BTU/h-ft2-F", "Btu/(h ft2 F)"],
        }
    }
}

/// Free-stream and mean flow velocity units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum VelocityUnit {
    #[default]
    MeterPerSecond,
    KilometerPerHour,
    CentimeterPerSecond,
    FootPerSecond,
    MilePerHour,
}

impl VelocityUnit {
    /// Size of one unit in m/s.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::MeterPerSecond => 1.0,
            Self::KilometerPerHour => 1.0 / 3.6,
            Self::CentimeterPerSecond => 0.01,
            Self::FootPerSecond => 0.3048,
            Self::MilePerHour => 0.44704,
        }
    }

    #[must_use]
    pub fn quantity(self, value: f64) -> Velocity {
        Velocity::new::<meter_per_second>(value * self.factor())
    }

    #[must_use]
    pub fn value_of(self, velocity: Velocity) -> f64 {
        velocity.get::<meter_per_second>() / self.factor()
    }
}

impl UnitSymbol for VelocityUnit {
    const KIND: &'static str = "velocity";
    const ALL: &'static [Self] = &[
        Self::MeterPerSecond,
        Self::KilometerPerHour,
        Self::CentimeterPerSecond,
        Self::FootPerSecond,
        Self::MilePerHour,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::MeterPerSecond => "m/s",
            Self::KilometerPerHour => "km/h",
            Self::CentimeterPerSecond => "cm/s",
            Self::FootPerSecond => "ft/s",
            Self::MilePerHour => "mph",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::MeterPerSecond => &["mps"],
            Self::KilometerPerHour => &["kph", "km/hr"],
            Self::CentimeterPerSecond => &[],
            Self::FootPerSecond => &["fps"],
            Self::MilePerHour => &["mi/h"],
        }
    }
}

/// Output units for a heat flow rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum HeatFlowUnit {
    #[default]
    Watt,
    BtuPerHour,
    KilocaloriePerHour,
}

impl HeatFlowUnit {
    /// Size of one unit in watts.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Watt => 1.0,
            Self::BtuPerHour => 1.0 / 3.41214,
            Self::KilocaloriePerHour => 1.0 / 0.859845,
        }
    }

    #[must_use]
    pub fn quantity(self, value: f64) -> Power {
        Power::new::<watt>(value * self.factor())
    }

    #[must_use]
    pub fn value_of(self, heat_flow: Power) -> f64 {
        heat_flow.get::<watt>() / self.factor()
    }
}

impl UnitSymbol for HeatFlowUnit {
    const KIND: &'static str = "heat flow";
    const ALL: &'static [Self] = &[Self::Watt, Self::BtuPerHour, Self::KilocaloriePerHour];

    fn symbol(self) -> &'static str {
        match self {
            Self::Watt => "W",
            Self::BtuPerHour => "BTU/h",
            Self::KilocaloriePerHour => "kcal/h",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Watt => &["watt"],
            Self::BtuPerHour => &["Btu/h", "BTU/hr"],
            Self::KilocaloriePerHour => &["kcal/hr"],
        }
    }
}

/// Output units for a heat flux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum HeatFluxUnit {
    #[default]
    WattPerSquareMeter,
    BtuPerHourSquareFoot,
    KilocaloriePerHourSquareMeter,
}

impl HeatFluxUnit {
    /// Size of one unit in W/m².
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::WattPerSquareMeter => 1.0,
            Self::BtuPerHourSquareFoot => 1.0 / 0.316998,
            Self::KilocaloriePerHourSquareMeter => 1.0 / 0.859845,
        }
    }

    #[must_use]
    pub fn quantity(self, value: f64) -> HeatFluxDensity {
        HeatFluxDensity::new::<watt_per_square_meter>(value * self.factor())
    }

    #[must_use]
    pub fn value_of(self, flux: HeatFluxDensity) -> f64 {
        flux.get::<watt_per_square_meter>() / self.factor()
    }
}

impl UnitSymbol for HeatFluxUnit {
    const KIND: &'static str = "heat flux";
    const ALL: &'static [Self] = &[
        Self::WattPerSquareMeter,
        Self::BtuPerHourSquareFoot,
        Self::KilocaloriePerHourSquareMeter,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::WattPerSquareMeter => "W/m²",
            Self::BtuPerHourSquareFoot => "BTU/(h·ft²)",
            Self::KilocaloriePerHourSquareMeter => "kcal/(h·m²)",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::WattPerSquareMeter => &["W/m2", "W/m^2"],
            Self::BtuPerHourSquareFoot => &["BTU/h-ft2", "Btu/(h ft2)"],
            Self::KilocaloriePerHourSquareMeter => &["kcal/h-m2"],
        }
    }
}

/// Pressure units, used for the air pressure correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum PressureUnit {
    #[default]
    Kilopascal,
    Pascal,
    Atmosphere,
    Bar,
    Psi,
}

impl PressureUnit {
    /// Size of one unit in pascals.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Kilopascal => 1000.0,
            Self::Pascal => 1.0,
            Self::Atmosphere => 101_325.0,
            Self::Bar => 100_000.0,
            Self::Psi => 6_894.757,
        }
    }

    #[must_use]
    pub fn quantity(self, value: f64) -> Pressure {
        Pressure::new::<pascal>(value * self.factor())
    }

    #[must_use]
    pub fn value_of(self, pressure: Pressure) -> f64 {
        pressure.get::<pascal>() / self.factor()
    }
}

impl UnitSymbol for PressureUnit {
    const KIND: &'static str = "pressure";
    const ALL: &'static [Self] = &[
        Self::Kilopascal,
        Self::Pascal,
        Self::Atmosphere,
        Self::Bar,
        Self::Psi,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::Kilopascal => "kPa",
            Self::Pascal => "Pa",
            Self::Atmosphere => "atm",
            Self::Bar => "bar",
            Self::Psi => "psi",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Kilopascal => &["kpa"],
            Self::Pascal => &["pa"],
            Self::Atmosphere => &[],
            Self::Bar => &[],
            Self::Psi => &["lbf/in²", "lbf/in2"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        heat_transfer::watt_per_square_meter_kelvin, pressure::kilopascal,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn lengths_scale_to_meters() {
        assert_relative_eq!(LengthUnit::Millimeter.quantity(5.0).get::<meter>(), 0.005);
        assert_relative_eq!(LengthUnit::Foot.quantity(2.0).get::<meter>(), 0.6096);
        assert_relative_eq!(LengthUnit::Inch.value_of(Length::new::<meter>(0.0254)), 1.0);
    }

    #[test]
    fn areas_scale_to_square_meters() {
        assert_relative_eq!(AreaUnit::SquareFoot.quantity(10.0).get::<square_meter>(), 0.92903);
        assert_relative_eq!(
            AreaUnit::SquareCentimeter.quantity(250.0).get::<square_meter>(),
            0.025,
            epsilon = 1e-15
        );
    }

    #[test]
    fn imperial_conductivity_and_convection() {
        assert_relative_eq!(
            ConductivityUnit::BtuPerHourFootFahrenheit
                .quantity(1.0)
                .get::<watt_per_meter_kelvin>(),
            1.73073
        );
        assert_relative_eq!(
            ConvectionUnit::BtuPerHourSquareFootFahrenheit
                .quantity(2.0)
                .get::<watt_per_square_meter_kelvin>(),
            11.35652
        );
        assert_relative_eq!(
            ConvectionUnit::WattPerSquareCentimeterKelvin
                .value_of(HeatTransfer::new::<watt_per_square_meter_kelvin>(1e4)),
            1.0
        );
    }

    #[test]
    fn velocity_conversions() {
        assert_relative_eq!(VelocityUnit::KilometerPerHour.quantity(36.0).get::<meter_per_second>(), 10.0);
        assert_relative_eq!(VelocityUnit::MilePerHour.quantity(10.0).get::<meter_per_second>(), 4.4704);
    }

    #[test]
    fn heat_flow_output_multipliers() {
        let q = Power::new::<watt>(100.0);
        assert_relative_eq!(HeatFlowUnit::Watt.value_of(q), 100.0);
        assert_relative_eq!(HeatFlowUnit::BtuPerHour.value_of(q), 341.214, epsilon = 1e-9);
        assert_relative_eq!(HeatFlowUnit::KilocaloriePerHour.value_of(q), 85.9845, epsilon = 1e-9);

        let flux = HeatFluxDensity::new::<watt_per_square_meter>(10.0);
        assert_relative_eq!(HeatFluxUnit::BtuPerHourSquareFoot.value_of(flux), 3.16998, epsilon = 1e-9);
    }

    #[test]
    fn pressure_conversions() {
        assert_relative_eq!(PressureUnit::Atmosphere.quantity(1.0).get::<kilopascal>(), 101.325);
        assert_relative_eq!(PressureUnit::Bar.quantity(2.0).get::<kilopascal>(), 200.0);
    }
}
