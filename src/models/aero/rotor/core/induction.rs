//! Induction factors and the momentum balance that updates them.

use super::HighInduction;

/// Denominators smaller than this make a momentum balance singular.
const SINGULAR: f64 = 1e-12;

/// Axial and tangential induction factors at one blade station.
///
/// Plain `f64` values with no invariants: induction may legitimately exceed
/// one (turbulent wake state) or go negative (propeller-like loading).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Induction {
    /// Axial induction `a`, the fractional slowdown of the wind at the rotor.
    pub axial: f64,

    /// Tangential induction `a'`, the fractional swirl added behind the rotor.
    pub tangential: f64,
}

impl Induction {
    /// No induction, the freestream state.
    pub const ZERO: Self = Self {
        axial: 0.0,
        tangential: 0.0,
    };

    #[must_use]
    pub fn new(axial: f64, tangential: f64) -> Self {
        Self { axial, tangential }
    }

    /// Moves `relaxation` of the way from `self` toward `target`.
    #[must_use]
    pub fn relax_toward(self, target: Self, relaxation: f64) -> Self {
        Self {
            axial: self.axial + relaxation * (target.axial - self.axial),
            tangential: self.tangential + relaxation * (target.tangential - self.tangential),
        }
    }

    /// Largest absolute change between two states.
    #[must_use]
    pub fn max_change(self, other: Self) -> f64 {
        (self.axial - other.axial)
            .abs()
            .max((self.tangential - other.tangential).abs())
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.axial.is_finite() && self.tangential.is_finite()
    }
}

/// Axial induction from the blade element thrust balance.
///
/// Returns `None` when the balance is singular.
pub(super) fn axial(
    solidity: f64,
    normal_coefficient: f64,
    loss: f64,
    sin_phi: f64,
    high_induction: HighInduction,
) -> Option<f64> {
    let blade_load = solidity * normal_coefficient;
    let momentum = 4.0 * loss * sin_phi * sin_phi;

    let denominator = momentum + blade_load;
    if denominator.abs() < SINGULAR {
        return None;
    }
    let a = blade_load / denominator;

    match high_induction {
        HighInduction::Glauert(critical) if a > *critical && blade_load > 0.0 => {
            Some(glauert(momentum / blade_load, *critical))
        }
        _ => Some(a),
    }
}

/// Glauert's empirical axial induction for `k = 4 F sin²φ / (σ Cn)`.
///
/// Solves the quadratic that matches the linear relation in value and slope
/// at `critical`. The discriminant is kept as a product of non-negative
/// factors so it never dips below zero through rounding.
fn glauert(k: f64, critical: f64) -> f64 {
    let b = 1.0 - 2.0 * critical;
    let discriminant = k * (k * b * b + 4.0 * (b + critical * critical));
    0.5 * (2.0 + k * b - discriminant.sqrt())
}

/// Tangential induction from the blade element torque balance.
///
/// Returns `None` when the balance is singular.
pub(super) fn tangential(
    solidity: f64,
    tangential_coefficient: f64,
    loss: f64,
    sin_phi: f64,
    cos_phi: f64,
) -> Option<f64> {
    let blade_load = solidity * tangential_coefficient;
    let denominator = 4.0 * loss * sin_phi * cos_phi - blade_load;
    if denominator.abs() < SINGULAR {
        return None;
    }
    Some(blade_load / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn relaxation_moves_part_way() {
        let from = Induction::new(0.1, 0.01);
        let to = Induction::new(0.3, 0.03);

        let half = from.relax_toward(to, 0.5);
        assert_relative_eq!(half.axial, 0.2);
        assert_relative_eq!(half.tangential, 0.02);

        assert_eq!(from.relax_toward(to, 1.0), to);
    }

    #[test]
    fn max_change_picks_larger_component() {
        let a = Induction::new(0.1, 0.0);
        let b = Induction::new(0.15, -0.2);
        assert_relative_eq!(a.max_change(b), 0.2);
        assert_relative_eq!(b.max_change(a), 0.2);
    }

    #[test]
    fn linear_axial_balance() {
        // σ Cn = 0.1, 4 F sin²φ = 0.4
        let a = axial(0.1, 1.0, 1.0, 0.1_f64.sqrt(), HighInduction::None).unwrap();
        assert_relative_eq!(a, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn glauert_leaves_light_loading_alone() {
        let sin_phi = 0.1_f64.sqrt();
        let linear = axial(0.1, 1.0, 1.0, sin_phi, HighInduction::None).unwrap();
        let corrected = axial(0.1, 1.0, 1.0, sin_phi, HighInduction::default()).unwrap();
        assert_eq!(linear, corrected);
    }

    #[test]
    fn glauert_is_continuous_at_threshold() {
        let critical = 0.4;
        // Linear relation gives a = 1 / (1 + k), so a = a_c at k = 1/a_c - 1.
        let k = 1.0 / critical - 1.0;
        assert_relative_eq!(glauert(k, critical), critical, epsilon = 1e-12);
    }

    #[test]
    fn glauert_reduces_heavy_loading() {
        // σ Cn = 1.0, 4 F sin²φ = 0.2: linear theory gives a ≈ 0.833.
        let sin_phi = 0.05_f64.sqrt();
        let linear = axial(1.0, 1.0, 1.0, sin_phi, HighInduction::None).unwrap();
        let corrected = axial(1.0, 1.0, 1.0, sin_phi, HighInduction::default()).unwrap();
        assert_relative_eq!(linear, 1.0 / 1.2, epsilon = 1e-12);
        assert!(corrected < linear);
        assert!(corrected > 0.4);
        assert!(corrected.is_finite());
    }

    #[test]
    fn glauert_skips_negative_normal_load() {
        // σ Cn = -0.3, 4 F sin²φ = 0.2: linear theory gives a = 3.
        let sin_phi = 0.05_f64.sqrt();
        let a = axial(0.1, -3.0, 1.0, sin_phi, HighInduction::default()).unwrap();
        assert_relative_eq!(a, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn singular_balances() {
        assert!(axial(0.1, 0.0, 1.0, 0.0, HighInduction::None).is_none());
        assert!(tangential(0.1, 0.0, 1.0, 0.0, 1.0).is_none());
    }

    #[test]
    fn tangential_balance() {
        // σ Ct = 0.02, 4 F sinφ cosφ = 2 at φ = 45°.
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let a_prime = tangential(0.1, 0.2, 1.0, s, s).unwrap();
        assert_relative_eq!(a_prime, 0.02 / (2.0 - 0.02), epsilon = 1e-12);
    }
}
