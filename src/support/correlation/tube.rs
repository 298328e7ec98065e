//! Fully developed internal flow in a circular tube at constant wall temperature.

use tracing::debug;

use crate::support::dimensionless::{Nusselt, Prandtl, Reynolds};

use super::{CorrelationError, Warning};

/// Below this Reynolds number the flow is laminar.
pub const LAMINAR_LIMIT: f64 = 2300.0;

/// At or above this Reynolds number the flow is fully turbulent.
pub const TURBULENT_LIMIT: f64 = 10_000.0;

/// Fully developed laminar Nusselt number for a constant wall temperature.
pub const LAMINAR_NUSSELT: f64 = 3.66;

/// Prandtl range of the Dittus-Boelter correlation.
pub const DITTUS_BOELTER_PRANDTL: (f64, f64) = (0.6, 160.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    #[must_use]
    pub fn classify(re: Reynolds) -> Self {
        if *re < LAMINAR_LIMIT {
            Self::Laminar
        } else if *re < TURBULENT_LIMIT {
            Self::Transitional
        } else {
            Self::Turbulent
        }
    }
}

/// Whether the wall heats or cools the fluid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Heating,
    Cooling,
}

impl Direction {
    /// Dittus-Boelter Prandtl exponent.
    #[must_use]
    pub fn exponent(self) -> f64 {
        match self {
            Self::Heating => 0.4,
            Self::Cooling => 0.3,
        }
    }
}

/// Correlation that produced a tube Nusselt number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TubeCorrelation {
    /// `Nu = 3.66`.
    FullyDevelopedLaminar,
    /// `Nu = 0.023 Re^0.8 Pr^n`.
    DittusBoelter { exponent: f64 },
}

/// Evaluates the tube correlation for the flow's regime.
///
/// Laminar flow uses the constant fully developed value. Transitional and
/// turbulent flow both use Dittus-Boelter; see [`warnings`] for when that is
/// a stretch.
///
/// # Errors
///
/// Returns [`CorrelationError::NonPhysical`] only if the inputs overflow.
pub fn nusselt(
    re: Reynolds,
    pr: Prandtl,
    direction: Direction,
) -> Result<(Nusselt, TubeCorrelation), CorrelationError> {
    if FlowRegime::classify(re) == FlowRegime::Laminar {
        debug!(re = *re, "tube: fully developed laminar");
        return Ok((
            Nusselt::new(LAMINAR_NUSSELT)?,
            TubeCorrelation::FullyDevelopedLaminar,
        ));
    }

    let exponent = direction.exponent();
    let nu = Nusselt::new(0.023 * re.powf(0.8) * pr.powf(exponent))?;
    debug!(re = *re, pr = *pr, exponent, nu = *nu, "tube: Dittus-Boelter");
    Ok((nu, TubeCorrelation::DittusBoelter { exponent }))
}

/// Range checks reported alongside a result, never blocking it.
#[must_use]
pub fn warnings(re: Reynolds, pr: Prandtl) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let regime = FlowRegime::classify(re);

    if regime == FlowRegime::Transitional {
        warnings.push(Warning::TransitionalFlow { reynolds: *re });
    }

    let (min, max) = DITTUS_BOELTER_PRANDTL;
    if regime != FlowRegime::Laminar && !(min..=max).contains(&*pr) {
        warnings.push(Warning::PrandtlOutOfRange {
            prandtl: *pr,
            min,
            max,
        });
    }

    warnings
}
