//! Results types for per-station blade element momentum solves.

use std::fmt;

use crate::support::{
    airfoil::Coefficients,
    units::{ForcePerLength, TorquePerLength},
};
use uom::si::f64::{Angle, Length, Velocity};

use super::Induction;

/// Solved state and loads at one blade station.
///
/// Every numeric field is finite, whatever the status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationResult {
    /// Radial position of the station.
    pub radius: Length,

    /// Final induction factors.
    pub induction: Induction,

    /// Inflow angle `φ`, measured from the rotor plane.
    pub inflow_angle: Angle,

    /// Angle of attack `α = φ - (twist + pitch)`.
    pub angle_of_attack: Angle,

    /// Local chord Reynolds number.
    pub reynolds: f64,

    /// Relative velocity seen by the blade section.
    pub relative_velocity: Velocity,

    /// Interpolated lift and drag coefficients.
    pub coefficients: Coefficients,

    /// Force coefficient normal to the rotor plane, `Cn`.
    pub normal_coefficient: f64,

    /// Force coefficient in the rotor plane, `Ct`.
    pub tangential_coefficient: f64,

    /// Combined tip and hub loss factor `F`.
    pub loss_factor: f64,

    /// Thrust per unit span, summed over all blades.
    pub thrust_per_length: ForcePerLength,

    /// Torque per unit span, summed over all blades.
    pub torque_per_length: TorquePerLength,

    pub status: StationStatus,

    pub method: SolveMethod,
}

impl StationResult {
    /// Returns `true` only for [`StationStatus::Converged`].
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self.status, StationStatus::Converged { .. })
    }
}

/// How a station solve ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StationStatus {
    /// Induction settled within tolerance.
    Converged { iterations: usize },

    /// The iteration cap was reached.
    ///
    /// The result is the iterate with the smallest residual seen.
    MaxIterReached {
        iterations: usize,

        /// Largest unrelaxed induction change at the reported iterate.
        residual: f64,
    },

    /// The momentum balance has no meaningful solution.
    Degenerate { reason: DegenerateReason },
}

/// Why a station was reported as [`StationStatus::Degenerate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// Zero wind speed with a spinning rotor.
    NoAxialFlow,

    /// Zero rotor speed in a moving stream.
    NoRotation,

    /// A momentum balance denominator vanished.
    SingularMomentum,

    /// An induction update was not finite.
    NonFinite,
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoAxialFlow => "no axial flow",
            Self::NoRotation => "rotor not turning",
            Self::SingularMomentum => "singular momentum balance",
            Self::NonFinite => "non-finite induction",
        })
    }
}

/// Which algorithm produced a station result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SolveMethod {
    /// Relaxed fixed-point iteration on the induction factors.
    #[default]
    FixedPoint,

    /// Bisection on the inflow angle after the fixed point stalled.
    Bracketed,
}
