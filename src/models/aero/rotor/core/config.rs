use std::ops::Deref;

use crate::support::constraint::{
    Constrained, ConstraintError, ConstraintResult, StrictlyPositive, UnitIntervalLowerOpen,
};

use super::bracketed::BracketConfig;

/// Solver configuration for the per-station fixed-point iteration.
#[derive(Debug, Clone, Copy)]
pub struct BemConfig {
    /// Convergence threshold on the unrelaxed change of both induction factors.
    pub tolerance: Constrained<f64, StrictlyPositive>,

    /// Iteration cap before a station is reported as unconverged.
    pub max_iterations: usize,

    /// Under-relaxation factor applied to each induction update.
    pub relaxation: Constrained<f64, UnitIntervalLowerOpen>,

    /// Tip and hub loss model.
    pub tip_loss: TipLoss,

    /// High-induction correction model.
    pub high_induction: HighInduction,

    /// Bracketed re-solve for stations whose fixed point stalls.
    ///
    /// `None` reports stalled stations as they are.
    pub fallback: Option<BracketConfig>,
}

impl BemConfig {
    pub const DEFAULT_TOLERANCE: f64 = 1e-5;
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;
    pub const DEFAULT_RELAXATION: f64 = 0.3;

    /// Returns this configuration with both loss and high-induction
    /// corrections disabled.
    #[must_use]
    pub fn uncorrected(self) -> Self {
        Self {
            tip_loss: TipLoss::None,
            high_induction: HighInduction::None,
            ..self
        }
    }

    /// Returns this configuration with a different relaxation factor.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < relaxation ≤ 1`.
    pub fn with_relaxation(self, relaxation: f64) -> ConstraintResult<Self> {
        Ok(Self {
            relaxation: UnitIntervalLowerOpen::new(relaxation)?,
            ..self
        })
    }

    /// Returns this configuration with a different convergence tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error unless the tolerance is strictly positive.
    pub fn with_tolerance(self, tolerance: f64) -> ConstraintResult<Self> {
        Ok(Self {
            tolerance: StrictlyPositive::new(tolerance)?,
            ..self
        })
    }
}

impl Default for BemConfig {
    fn default() -> Self {
        Self {
            tolerance: StrictlyPositive::new(Self::DEFAULT_TOLERANCE)
                .expect("default tolerance is positive"),
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            relaxation: UnitIntervalLowerOpen::new(Self::DEFAULT_RELAXATION)
                .expect("default relaxation lies in (0, 1]"),
            tip_loss: TipLoss::default(),
            high_induction: HighInduction::default(),
            fallback: None,
        }
    }
}

/// Tip and hub loss model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TipLoss {
    /// Plain momentum theory, `F = 1` everywhere.
    None,

    /// Prandtl's tip loss factor, multiplied by the matching hub loss factor
    /// whenever the rotor has a positive hub radius.
    #[default]
    Prandtl,
}

/// High-induction correction model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HighInduction {
    /// Linear momentum theory at every loading.
    None,

    /// Glauert's empirical thrust relation above a critical axial induction.
    Glauert(CriticalInduction),
}

impl HighInduction {
    /// Glauert correction switching in above `threshold`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < threshold < 0.5`.
    pub fn glauert(threshold: f64) -> ConstraintResult<Self> {
        Ok(Self::Glauert(CriticalInduction::new(threshold)?))
    }
}

impl Default for HighInduction {
    fn default() -> Self {
        Self::Glauert(CriticalInduction::default())
    }
}

/// Axial induction above which the Glauert relation replaces linear momentum.
///
/// Must lie in the open interval `(0, 0.5)`; at one half the empirical curve
/// loses its tangency with momentum theory.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CriticalInduction(f64);

impl CriticalInduction {
    pub const DEFAULT: f64 = 0.4;

    /// Creates a critical induction value.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < value < 0.5`.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let value = StrictlyPositive::new(value)
            .map_err(|err| match err {
                ConstraintError::Zero | ConstraintError::Negative => ConstraintError::BelowMinimum,
                other => other,
            })?
            .into_inner();
        if value >= 0.5 {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(Self(value))
    }
}

impl Default for CriticalInduction {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl Deref for CriticalInduction {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
