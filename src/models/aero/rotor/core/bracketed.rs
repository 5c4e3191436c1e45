//! Bracketed inflow-angle solve for stations whose fixed point stalls.
//!
//! At heavy loading the relaxed induction iteration can cycle instead of
//! settling. Written in the inflow angle alone, the blade element momentum
//! balance becomes a scalar root-finding problem: scan `(0, π/2]` for sign
//! changes of the residual, then refine a bracket with bisection.
//!
//! The residual has a pole wherever the balanced axial induction passes
//! through one, so a sign change is not always a root. Brackets are tried
//! nearest-first to the stalled iterate and a solution is only accepted when
//! its residual is actually small.

mod config;
mod error;
mod problem;

pub use config::BracketConfig;
pub use error::BracketError;

use std::f64::consts::FRAC_PI_2;

use twine_solvers::equation::bisection;
use uom::si::{angle::radian, f64::Angle};

use super::{Induction, element::Element};

use problem::{AngleModel, AngleProblem};

/// Lower end of the scanned inflow-angle range, radians.
const MIN_PHI: f64 = 1e-6;

/// Largest residual accepted as a root rather than a pole crossing.
const ACCEPTED_RESIDUAL: f64 = 1e-6;

/// A converged bracketed solution.
#[derive(Debug, Clone, Copy)]
pub(super) struct Bracketed {
    pub induction: Induction,
    pub iterations: usize,
}

/// Solves the station balance in the inflow angle.
///
/// `hint` is the inflow angle of the stalled fixed-point iterate, in radians.
///
/// # Errors
///
/// Returns [`BracketError`] if no sign change exists or no candidate bracket
/// refines to an acceptable root.
pub(super) fn solve(
    element: &Element<'_>,
    config: &BracketConfig,
    hint: f64,
) -> Result<Bracketed, BracketError> {
    let mut brackets = scan(element, config.scan_points);
    if brackets.is_empty() {
        return Err(BracketError::NoSignChange);
    }
    brackets.sort_by(|a, b| distance(*a, hint).total_cmp(&distance(*b, hint)));

    let model = AngleModel::new(element);
    let problem = AngleProblem;
    let mut failure = BracketError::NoSignChange;

    for bracket in brackets {
        let solution = match bisection::solve(
            &model,
            &problem,
            bracket,
            &config.bisection(),
            |event: &bisection::Event<'_, _, _>| {
                // A singular balance inside the bracket; steer toward the
                // opposite end rather than abort.
                if event.result().is_err() {
                    return Some(bisection::Action::assume_positive());
                }
                None
            },
        ) {
            Ok(solution) => solution,
            Err(error) => {
                failure = BracketError::Bisection(error);
                continue;
            }
        };

        if solution.status != bisection::Status::Converged {
            failure = BracketError::MaxIters {
                residual: solution.residual,
                iters: solution.iters,
            };
            continue;
        }

        let output = solution.snapshot.output;
        if output.residual.abs() > ACCEPTED_RESIDUAL {
            failure = BracketError::Discontinuity {
                inflow_angle: Angle::new::<radian>(output.phi),
            };
            continue;
        }

        return Ok(Bracketed {
            induction: output.induction,
            iterations: solution.iters,
        });
    }

    Err(failure)
}

/// Sign-change brackets from an even scan of `(0, π/2]`, in scan order.
fn scan(element: &Element<'_>, points: usize) -> Vec<[f64; 2]> {
    let points = points.max(2);
    #[allow(clippy::cast_precision_loss)]
    let step = (FRAC_PI_2 - MIN_PHI) / (points - 1) as f64;

    #[allow(clippy::cast_precision_loss)]
    let samples: Vec<(f64, Option<f64>)> = (0..points)
        .map(|i| {
            let phi = MIN_PHI + step * i as f64;
            (phi, element.balance_at(phi).map(|balance| balance.residual))
        })
        .collect();

    samples
        .windows(2)
        .filter_map(|pair| match (pair[0], pair[1]) {
            ((lo, Some(r_lo)), (hi, Some(r_hi)))
                if r_lo.signum() != r_hi.signum() || r_lo == 0.0 =>
            {
                Some([lo, hi])
            }
            _ => None,
        })
        .collect()
}

/// Distance from `phi` to the nearest point of `bracket`.
fn distance(bracket: [f64; 2], phi: f64) -> f64 {
    if phi < bracket[0] {
        bracket[0] - phi
    } else if phi > bracket[1] {
        phi - bracket[1]
    } else {
        0.0
    }
}
