//! Cross flow over a circular cylinder, Reynolds number based on diameter.

use tracing::debug;

use crate::support::dimensionless::{Nusselt, Prandtl, Reynolds};

use super::{CorrelationError, pr_third};

/// One row of the compact correlation `Nu = C Re^m Pr^⅓`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompactRow {
    pub re_min: f64,
    pub re_max: f64,
    pub c: f64,
    pub m: f64,
}

impl CompactRow {
    const fn new(re_min: f64, re_max: f64, c: f64, m: f64) -> Self {
        Self {
            re_min,
            re_max,
            c,
            m,
        }
    }

    fn contains(&self, re: f64) -> bool {
        (self.re_min..=self.re_max).contains(&re)
    }
}

/// Hilpert coefficients; bounds are inclusive and the first matching row wins.
pub const COMPACT_TABLE: [CompactRow; 5] = [
    CompactRow::new(0.4, 4.0, 0.989, 0.330),
    CompactRow::new(4.0, 40.0, 0.911, 0.385),
    CompactRow::new(40.0, 4000.0, 0.683, 0.466),
    CompactRow::new(4000.0, 40_000.0, 0.193, 0.618),
    CompactRow::new(40_000.0, 400_000.0, 0.027, 0.805),
];

/// Which cylinder correlation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CylinderCorrelation {
    #[default]
    ChurchillBernstein,
    /// The tabulated `C Re^m Pr^⅓` form.
    Compact,
}

impl CylinderCorrelation {
    /// Evaluates the selected correlation, with the compact row when used.
    ///
    /// # Errors
    ///
    /// See [`churchill_bernstein`] and [`compact`].
    pub fn evaluate(
        self,
        re: Reynolds,
        pr: Prandtl,
    ) -> Result<(Nusselt, Option<CompactRow>), CorrelationError> {
        match self {
            Self::ChurchillBernstein => Ok((churchill_bernstein(re, pr)?, None)),
            Self::Compact => compact(re, pr).map(|(nu, row)| (nu, Some(row))),
        }
    }
}

/// Churchill-Bernstein correlation, valid over the whole Reynolds range.
///
/// ```text
/// Nu = 0.3 + 0.62 Re^½ Pr^⅓ / [1 + (0.4/Pr)^⅔]^¼ · [1 + (Re/282000)^⅝]^⅘
/// ```
///
/// # Errors
///
/// Returns [`CorrelationError::ChurchillBernsteinPrandtl`] for `Pr ≤ 0.2`.
pub fn churchill_bernstein(re: Reynolds, pr: Prandtl) -> Result<Nusselt, CorrelationError> {
    if *pr <= 0.2 {
        return Err(CorrelationError::ChurchillBernsteinPrandtl { prandtl: *pr });
    }

    let numerator = 0.62 * re.sqrt() * pr_third(*pr);
    let shape = (1.0 + (0.4 / *pr).powf(2.0 / 3.0)).powf(0.25);
    let wake = (1.0 + (*re / 282_000.0).powf(5.0 / 8.0)).powf(4.0 / 5.0);

    let nu = Nusselt::new(0.3 + numerator / shape * wake)?;
    debug!(re = *re, pr = *pr, nu = *nu, "cylinder: Churchill-Bernstein");
    Ok(nu)
}

/// Compact (Hilpert) correlation, also returning the row that was used.
///
/// # Errors
///
/// Returns [`CorrelationError::CompactOutOfRange`] when no row covers `re`.
pub fn compact(re: Reynolds, pr: Prandtl) -> Result<(Nusselt, CompactRow), CorrelationError> {
    let row = COMPACT_TABLE
        .iter()
        .find(|row| row.contains(*re))
        .copied()
        .ok_or(CorrelationError::CompactOutOfRange { reynolds: *re })?;

    let nu = Nusselt::new(row.c * re.powf(row.m) * pr_third(*pr))?;
    debug!(re = *re, pr = *pr, c = row.c, m = row.m, nu = *nu, "cylinder: compact");
    Ok((nu, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintResult;

    #[test]
    fn churchill_bernstein_textbook_case() -> ConstraintResult<()> {
        // Air over a 25 mm cylinder, Re ≈ 6071, Pr ≈ 0.7 (Incropera 7.4).
        let nu = churchill_bernstein(Reynolds::new(6071.0)?, Prandtl::new(0.7)?).unwrap();
        assert_relative_eq!(*nu, 40.6, max_relative = 5e-3);
        Ok(())
    }

    #[test]
    fn churchill_bernstein_rejects_low_prandtl() -> ConstraintResult<()> {
        let err = churchill_bernstein(Reynolds::new(1000.0)?, Prandtl::new(0.2)?).unwrap_err();
        assert_eq!(err, CorrelationError::ChurchillBernsteinPrandtl { prandtl: 0.2 });
        Ok(())
    }

    #[test]
    fn compact_picks_first_matching_row() -> ConstraintResult<()> {
        let pr = Prandtl::new(1.0)?;

        let (nu, row) = compact(Reynolds::new(4.0)?, pr).unwrap();
        assert_relative_eq!(row.c, 0.989);
        assert_relative_eq!(*nu, 0.989 * 4.0_f64.powf(0.330));

        let (_, row) = compact(Reynolds::new(40_000.0)?, pr).unwrap();
        assert_relative_eq!(row.c, 0.193);

        let (nu, row) = compact(Reynolds::new(6071.0)?, Prandtl::new(0.7)?).unwrap();
        assert_relative_eq!(row.m, 0.618);
        assert_relative_eq!(*nu, 0.193 * 6071.0_f64.powf(0.618) * 0.7_f64.cbrt());
        Ok(())
    }

    #[test]
    fn compact_out_of_range() -> ConstraintResult<()> {
        let pr = Prandtl::new(0.7)?;
        assert_eq!(
            compact(Reynolds::new(0.39)?, pr).unwrap_err(),
            CorrelationError::CompactOutOfRange { reynolds: 0.39 }
        );
        assert!(compact(Reynolds::new(400_001.0)?, pr).is_err());
        Ok(())
    }

    #[test]
    fn correlation_selector() -> ConstraintResult<()> {
        let (re, pr) = (Reynolds::new(1e4)?, Prandtl::new(0.7)?);
        assert_eq!(
            CylinderCorrelation::ChurchillBernstein.evaluate(re, pr).unwrap(),
            (churchill_bernstein(re, pr).unwrap(), None)
        );
        let (nu, row) = compact(re, pr).unwrap();
        assert_eq!(
            CylinderCorrelation::Compact.evaluate(re, pr).unwrap(),
            (nu, Some(row))
        );
        Ok(())
    }
}
