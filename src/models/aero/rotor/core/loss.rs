use std::f64::consts::FRAC_2_PI;

use super::TipLoss;

/// Lower bound on the combined loss factor.
///
/// At the very tip Prandtl's factor reaches zero, which would zero out the
/// momentum side of both balances.
const MIN_LOSS: f64 = 1e-4;

/// Floor on `|sin φ|` inside the loss exponent.
const MIN_SIN_PHI: f64 = 1e-12;

/// Geometry needed to evaluate tip and hub losses at one station.
#[derive(Debug, Clone, Copy)]
pub(super) struct LossGeometry {
    pub blades: f64,
    pub radius: f64,
    pub tip_radius: f64,
    pub hub_radius: f64,
}

impl LossGeometry {
    /// Combined loss factor `F` in `[MIN_LOSS, 1]` at inflow angle `φ`.
    pub(super) fn factor(&self, model: TipLoss, sin_phi: f64) -> f64 {
        match model {
            TipLoss::None => 1.0,
            TipLoss::Prandtl => {
                let sin_phi = sin_phi.abs().max(MIN_SIN_PHI);
                let tip = prandtl(
                    self.blades * (self.tip_radius - self.radius),
                    self.radius,
                    sin_phi,
                );
                let hub = if self.hub_radius > 0.0 {
                    prandtl(
                        self.blades * (self.radius - self.hub_radius),
                        self.hub_radius,
                        sin_phi,
                    )
                } else {
                    1.0
                };
                (tip * hub).max(MIN_LOSS)
            }
        }
    }
}

/// `2/π acos(exp(-f))` with `f = span / (2 r sin φ)`.
///
/// Stations outside the annulus give a negative span; `f` is clamped at zero
/// so the factor bottoms out instead of leaving the domain of `acos`.
fn prandtl(span: f64, reference_radius: f64, sin_phi: f64) -> f64 {
    let f = (0.5 * span / (reference_radius * sin_phi)).max(0.0);
    FRAC_2_PI * (-f).exp().acos()
}
