use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Angle;

/// Errors that can occur during a bracketed inflow-angle solve.
///
/// These never escape a station solve. A failed fallback leaves the
/// fixed-point result in place.
#[derive(Debug, Error)]
pub enum BracketError {
    /// The residual does not change sign anywhere in the scanned range.
    #[error("no sign change in the inflow angle residual")]
    NoSignChange,

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best angle residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// The bracket closed on a pole of the residual, not a root.
    #[error("bracket closed on a discontinuity at {inflow_angle:?}")]
    Discontinuity { inflow_angle: Angle },
}

/// The momentum balance is singular at the requested inflow angle.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("singular momentum balance at {inflow_angle:?}")]
pub(super) struct SingularBalance {
    pub inflow_angle: Angle,
}
