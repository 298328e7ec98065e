use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Length, Power};

use crate::models::conduction::core::ConductionError;

/// Errors that can occur while sizing the outermost layer.
#[derive(Debug, Error)]
pub enum SizingError {
    /// The conduction problem itself is invalid.
    #[error("conduction solve failed")]
    Conduction(#[from] ConductionError),

    /// The thickness bracket is empty, reversed, or not strictly positive.
    #[error("invalid thickness bracket [{lower:?}, {upper:?}]")]
    InvalidBracket { lower: Length, upper: Length },

    /// The target heat flow is not between the values at the bracket ends.
    #[error(
        "target heat flow {target:?} is not bracketed: {at_lower:?} at the thin end, {at_upper:?} at the thick end"
    )]
    NotBracketed {
        target: Power,
        at_lower: Power,
        at_upper: Power,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best heat flow residual achieved.
        residual: Power,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
