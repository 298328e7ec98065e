//! Parallel flow over an isothermal flat plate.
//!
//! All Reynolds numbers are based on distance from the leading edge, and
//! transition is taken at a fixed critical Reynolds number.

use tracing::debug;

use crate::support::dimensionless::{Nusselt, Prandtl, Reynolds};

use super::{CorrelationError, Warning, pr_third};

/// Reynolds number at which the boundary layer becomes turbulent.
pub const CRITICAL_REYNOLDS: f64 = 5e5;

/// Upper Reynolds limit of the turbulent correlations.
pub const MAX_REYNOLDS: f64 = 1e7;

/// Prandtl range of the turbulent and mixed correlations.
pub const PRANDTL_RANGE: (f64, f64) = (0.6, 60.0);

/// Flow regime at the trailing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// `Re_L < 5·10⁵`.
    Laminar,
    /// `5·10⁵ ≤ Re_L ≤ 10⁷`; the plate is mixed or fully turbulent.
    Turbulent,
    /// `Re_L > 10⁷`.
    OutOfRange,
}

impl Regime {
    #[must_use]
    pub fn classify(re: Reynolds) -> Self {
        if *re < CRITICAL_REYNOLDS {
            Self::Laminar
        } else if *re <= MAX_REYNOLDS {
            Self::Turbulent
        } else {
            Self::OutOfRange
        }
    }
}

/// Average Nusselt number over a plate of length `L`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Average {
    /// Laminar over the whole plate, `0.664 Re^½ Pr^⅓`.
    Laminar(Nusselt),

    /// Laminar up to `x_c`, turbulent beyond.
    Mixed {
        /// `x_c / L = 5·10⁵ / Re_L`.
        critical_fraction: f64,
        /// Laminar Nusselt number over `[0, x_c]`, based on `x_c`.
        laminar: Nusselt,
        /// Whole-plate Nusselt number, `(0.037 Re^0.8 − 871) Pr^⅓`.
        total: Nusselt,
    },

    /// Turbulent from the leading edge, `0.037 Re^0.8 Pr^⅓`.
    Turbulent(Nusselt),
}

/// Local Nusselt number at a position `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Local {
    /// `0.332 Re_x^½ Pr^⅓`.
    Laminar(Nusselt),
    /// `0.0296 Re_x^0.8 Pr^⅓`.
    Turbulent(Nusselt),
}

impl Local {
    #[must_use]
    pub fn nusselt(self) -> Nusselt {
        match self {
            Self::Laminar(nu) | Self::Turbulent(nu) => nu,
        }
    }
}

/// Range checks reported alongside a result, never blocking it.
#[must_use]
pub fn warnings(re: Reynolds, pr: Prandtl) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let (min, max) = PRANDTL_RANGE;
    if !(min..=max).contains(&*pr) {
        warnings.push(Warning::PrandtlOutOfRange {
            prandtl: *pr,
            min,
            max,
        });
    }
    if *re > MAX_REYNOLDS {
        warnings.push(Warning::ReynoldsAboveRange {
            reynolds: *re,
            max: MAX_REYNOLDS,
        });
    }
    warnings
}

/// Selects and evaluates the average correlation for a plate.
///
/// # Errors
///
/// Returns [`CorrelationError::FlatPlateNotApplicable`] when neither the
/// laminar nor the turbulent branch covers `(re, pr)`.
pub fn average(re: Reynolds, pr: Prandtl) -> Result<Average, CorrelationError> {
    let (pr_min, pr_max) = PRANDTL_RANGE;
    let pr_third = pr_third(*pr);

    if *re < CRITICAL_REYNOLDS && *pr > pr_min {
        let nu = Nusselt::new(0.664 * re.sqrt() * pr_third)?;
        debug!(re = *re, pr = *pr, nu = *nu, "flat plate: laminar average");
        return Ok(Average::Laminar(nu));
    }

    if (CRITICAL_REYNOLDS..=MAX_REYNOLDS).contains(&*re) && (pr_min..=pr_max).contains(&*pr) {
        let critical_fraction = CRITICAL_REYNOLDS / *re;

        if critical_fraction < 1.0 {
            let laminar = Nusselt::new(0.664 * CRITICAL_REYNOLDS.sqrt() * pr_third)?;
            let total = Nusselt::new((0.037 * re.powf(0.8) - 871.0) * pr_third)?;
            debug!(
                re = *re,
                pr = *pr,
                critical_fraction,
                nu = *total,
                "flat plate: mixed average"
            );
            return Ok(Average::Mixed {
                critical_fraction,
                laminar,
                total,
            });
        }

        let nu = Nusselt::new(0.037 * re.powf(0.8) * pr_third)?;
        debug!(re = *re, pr = *pr, nu = *nu, "flat plate: turbulent average");
        return Ok(Average::Turbulent(nu));
    }

    Err(CorrelationError::FlatPlateNotApplicable {
        reynolds: *re,
        prandtl: *pr,
    })
}

/// Evaluates the local correlation at a position with Reynolds number `re_x`.
///
/// # Errors
///
/// Returns [`CorrelationError::FlatPlateNotApplicable`] when `(re_x, pr)`
/// is outside both branches.
pub fn local(re_x: Reynolds, pr: Prandtl) -> Result<Local, CorrelationError> {
    let (pr_min, pr_max) = PRANDTL_RANGE;

    if *re_x < CRITICAL_REYNOLDS && *pr > pr_min {
        return Ok(Local::Laminar(Nusselt::new(
            0.332 * re_x.sqrt() * pr_third(*pr),
        )?));
    }

    if (CRITICAL_REYNOLDS..=MAX_REYNOLDS).contains(&*re_x) && (pr_min..=pr_max).contains(&*pr) {
        return Ok(Local::Turbulent(Nusselt::new(
            0.0296 * re_x.powf(0.8) * pr_third(*pr),
        )?));
    }

    Err(CorrelationError::FlatPlateNotApplicable {
        reynolds: *re_x,
        prandtl: *pr,
    })
}

/// Local Nusselt number for profile sampling.
///
/// Switches between the laminar and turbulent forms at the critical Reynolds
/// number without any Prandtl or upper Reynolds gate, so a profile can always
/// be drawn even where [`local`] would refuse.
#[must_use]
pub fn profile(re_x: Reynolds, pr: Prandtl) -> Local {
    let pr_third = pr_third(*pr);
    // Both forms are products of positive factors.
    let nu = |value: f64| {
        Nusselt::new(value).expect("positive inputs give a positive Nusselt number")
    };

    if *re_x < CRITICAL_REYNOLDS {
        Local::Laminar(nu(0.332 * re_x.sqrt() * pr_third))
    } else {
        Local::Turbulent(nu(0.0296 * re_x.powf(0.8) * pr_third))
    }
}
