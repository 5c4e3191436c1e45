//! Relaxed fixed-point iteration on the induction factors of one station.

use super::{
    BemConfig, DegenerateReason, Induction, SolveMethod, StationResult, StationStatus, bracketed,
    element::{Element, Evaluation},
};

/// One successful pass of the fixed-point map.
#[derive(Debug, Clone, Copy)]
struct Step {
    eval: Evaluation,
    residual: f64,
    update: Induction,
}

/// A pass that could not produce a usable update.
struct Breakdown {
    reason: DegenerateReason,
    /// The evaluation that led to the breakdown, if it was itself finite.
    eval: Option<Evaluation>,
}

/// Solves one station, starting from `seed`.
pub(super) fn solve(element: &Element<'_>, config: &BemConfig, seed: Induction) -> StationResult {
    match (element.has_axial_flow(), element.is_rotating()) {
        (false, false) => {
            return element.result(
                &element.evaluate(Induction::ZERO),
                StationStatus::Converged { iterations: 0 },
                SolveMethod::FixedPoint,
            );
        }
        (false, true) => return freestream(element, DegenerateReason::NoAxialFlow),
        (true, false) => return freestream(element, DegenerateReason::NoRotation),
        (true, true) => {}
    }

    let relaxation = *config.relaxation.as_ref();
    let tolerance = *config.tolerance.as_ref();

    let mut current = if seed.is_finite() {
        seed
    } else {
        Induction::ZERO
    };
    let mut best: Option<Step> = None;
    let mut last: Option<Evaluation> = None;

    for iteration in 1..=config.max_iterations {
        let step = match step(element, current) {
            Ok(step) => step,
            Err(breakdown) => return degenerate(element, breakdown, last),
        };

        if step.residual < tolerance {
            log::debug!(
                "station r={:.4} m converged in {iteration} iterations",
                element.radius(),
            );
            return element.result(
                &step.eval,
                StationStatus::Converged {
                    iterations: iteration,
                },
                SolveMethod::FixedPoint,
            );
        }

        if best.is_none_or(|b| step.residual < b.residual) {
            best = Some(step);
        }
        last = Some(step.eval);
        current = current.relax_toward(step.update, relaxation);
    }

    let best = match best {
        Some(best) => best,
        None => match step(element, current) {
            Ok(step) => step,
            Err(breakdown) => return degenerate(element, breakdown, last),
        },
    };

    if let Some(fallback) = config.fallback {
        match bracketed::solve(element, &fallback, best.eval.phi) {
            Ok(solved) => {
                let eval = element.evaluate(solved.induction);
                if eval.is_finite() {
                    log::warn!(
                        "station r={:.4} m stalled after {} iterations; bracketed in {}",
                        element.radius(),
                        config.max_iterations,
                        solved.iterations,
                    );
                    return element.result(
                        &eval,
                        StationStatus::Converged {
                            iterations: solved.iterations,
                        },
                        SolveMethod::Bracketed,
                    );
                }
            }
            Err(error) => {
                log::debug!("bracketed fallback failed: {error}");
            }
        }
    }

    let result = element.result(
        &best.eval,
        StationStatus::MaxIterReached {
            iterations: config.max_iterations,
            residual: best.residual,
        },
        SolveMethod::FixedPoint,
    );
    log::warn!(
        "station r={:.4} m did not converge in {} iterations (residual {:.3e})",
        element.radius(),
        config.max_iterations,
        best.residual,
    );
    result
}

/// Evaluates the flow at `current` and the induction it implies.
fn step(element: &Element<'_>, current: Induction) -> Result<Step, Breakdown> {
    let eval = element.evaluate(current);
    if !eval.is_finite() {
        return Err(Breakdown {
            reason: DegenerateReason::NonFinite,
            eval: None,
        });
    }

    let Some(update) = element.balance(&eval) else {
        return Err(Breakdown {
            reason: DegenerateReason::SingularMomentum,
            eval: Some(eval),
        });
    };
    if !update.is_finite() {
        return Err(Breakdown {
            reason: DegenerateReason::NonFinite,
            eval: Some(eval),
        });
    }

    Ok(Step {
        eval,
        residual: update.max_change(current),
        update,
    })
}

/// Reports the freestream state for a station with no momentum solution.
fn freestream(element: &Element<'_>, reason: DegenerateReason) -> StationResult {
    let result = element.result(
        &element.evaluate(Induction::ZERO),
        StationStatus::Degenerate { reason },
        SolveMethod::FixedPoint,
    );
    log::warn!(
        "station r={:.4} m is degenerate: {reason}",
        element.radius()
    );
    result
}

fn degenerate(
    element: &Element<'_>,
    breakdown: Breakdown,
    last: Option<Evaluation>,
) -> StationResult {
    let Breakdown { reason, eval } = breakdown;
    let eval = eval
        .or(last)
        .filter(Evaluation::is_finite)
        .unwrap_or_else(|| element.evaluate(Induction::ZERO));

    let result = element.result(
        &eval,
        StationStatus::Degenerate { reason },
        SolveMethod::FixedPoint,
    );
    log::warn!(
        "station r={:.4} m is degenerate: {reason}",
        element.radius()
    );
    result
}
