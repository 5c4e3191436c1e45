use twine_solvers::equation::bisection;
use uom::si::{angle::radian, f64::Angle};

/// Solver configuration for the bracketed inflow-angle fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketConfig {
    /// Maximum iteration count for each bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the inflow angle.
    pub phi_tol: Angle,

    /// Absolute tolerance on the angle residual.
    pub residual_tol: f64,

    /// Number of evenly spaced inflow angles scanned for sign changes.
    pub scan_points: usize,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            phi_tol: Angle::new::<radian>(1e-12),
            residual_tol: 1e-12,
            scan_points: 32,
        }
    }
}

impl BracketConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.phi_tol.get::<radian>(),
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
