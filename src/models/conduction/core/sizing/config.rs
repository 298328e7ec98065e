use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, Power},
    length::meter,
    power::watt,
};

/// Solver configuration for outer-layer sizing.
#[derive(Debug, Clone, Copy)]
pub struct SizingConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the outer-layer thickness.
    pub thickness_tol: Length,

    /// Absolute tolerance on the heat flow residual (achieved - target).
    pub heat_flow_tol: Power,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            thickness_tol: Length::new::<meter>(1e-9),
            heat_flow_tol: Power::new::<watt>(1e-9),
        }
    }
}

impl SizingConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.thickness_tol.get::<meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.heat_flow_tol.get::<watt>(),
        }
    }
}
