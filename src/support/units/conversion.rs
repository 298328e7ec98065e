//! User-facing unit choices and their conversion factors.
//!
//! Linear units carry a single factor: the size of one unit expressed in the
//! SI base unit of its kind. Temperature is the only affine case and is
//! delegated to [`uom`]'s own temperature scales.

mod linear;
mod temperature;

use std::fmt;

use thiserror::Error;

pub use linear::{
    AreaUnit, ConductivityUnit, ConvectionUnit, HeatFlowUnit, HeatFluxUnit, LengthUnit,
    PressureUnit, VelocityUnit,
};
pub use temperature::TemperatureUnit;

/// Errors raised while parsing or applying a unit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// The text does not name any unit of the expected kind.
    #[error("unknown {kind} unit `{symbol}`")]
    Unknown { kind: &'static str, symbol: String },

    /// The converted temperature lies below absolute zero.
    #[error("{value} {unit} is below absolute zero")]
    BelowAbsoluteZero { value: f64, unit: &'static str },
}

/// Text representation shared by every unit enum.
pub trait UnitSymbol: Copy + Sized + 'static {
    /// Human-readable kind, used in error messages (`"length"`, `"velocity"`).
    const KIND: &'static str;

    /// Every variant, in presentation order.
    const ALL: &'static [Self];

    /// Canonical symbol, e.g. `"W/m·K"`.
    fn symbol(self) -> &'static str;

    /// Additional spellings accepted when parsing, typically ASCII-only.
    fn aliases(self) -> &'static [&'static str];

    /// Parses a unit from its symbol or one of its aliases.
    ///
    /// Surrounding whitespace is ignored; matching is otherwise exact.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::Unknown`] if nothing matches.
    fn parse_symbol(text: &str) -> Result<Self, UnitError> {
        let text = text.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.symbol() == text || unit.aliases().contains(&text))
            .ok_or_else(|| UnitError::Unknown {
                kind: Self::KIND,
                symbol: text.to_owned(),
            })
    }
}

/// Implements `FromStr`, `TryFrom<String>` and `Display` through [`UnitSymbol`].
///
/// `TryFrom<String>` is what `#[serde(try_from = "String")]` uses when unit
/// choices are read from a case file.
macro_rules! impl_unit_text {
    ($($unit:ty),+ $(,)?) => {
        $(
            impl std::str::FromStr for $unit {
                type Err = UnitError;

                fn from_str(text: &str) -> Result<Self, Self::Err> {
                    <$unit as UnitSymbol>::parse_symbol(text)
                }
            }

            impl TryFrom<String> for $unit {
                type Error = UnitError;

                fn try_from(text: String) -> Result<Self, Self::Error> {
                    text.parse()
                }
            }

            impl fmt::Display for $unit {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.symbol())
                }
            }
        )+
    };
}

impl_unit_text!(
    AreaUnit,
    ConductivityUnit,
    ConvectionUnit,
    HeatFlowUnit,
    HeatFluxUnit,
    LengthUnit,
    PressureUnit,
    TemperatureUnit,
    VelocityUnit,
);
