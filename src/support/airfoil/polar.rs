use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use crate::support::interp::{Bracket, lerp, locate};

use super::{AirfoilError, TableDefect};

/// A single tabulated point of an airfoil polar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarSample {
    pub angle_of_attack: Angle,
    pub lift: f64,
    pub drag: f64,
}

impl PolarSample {
    #[must_use]
    pub fn new(angle_of_attack: Angle, lift: f64, drag: f64) -> Self {
        Self {
            angle_of_attack,
            lift,
            drag,
        }
    }

    /// Creates a sample with the angle of attack given in degrees.
    #[must_use]
    pub fn degrees(angle_of_attack: f64, lift: f64, drag: f64) -> Self {
        Self::new(Angle::new::<degree>(angle_of_attack), lift, drag)
    }
}

/// Lift and drag coefficients at one flow condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub lift: f64,
    pub drag: f64,
}

impl Coefficients {
    /// Blends toward `other` by `weight` in `[0, 1]`.
    pub(super) fn blend(self, other: Self, weight: f64) -> Self {
        Self {
            lift: lerp(self.lift, other.lift, weight),
            drag: lerp(self.drag, other.drag, weight),
        }
    }
}

/// Lift and drag coefficients tabulated against angle of attack.
///
/// Invariants, checked by [`Polar::new`]:
///
/// - at least two samples,
/// - angles of attack strictly increasing,
/// - every angle and coefficient finite.
///
/// Angles are stored in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct Polar {
    angles: Vec<f64>,
    lift: Vec<f64>,
    drag: Vec<f64>,
}

impl Polar {
    /// Builds a polar from samples ordered by increasing angle of attack.
    ///
    /// # Errors
    ///
    /// Returns [`AirfoilError::InvalidTable`] if there are fewer than two
    /// samples, if any value is non-finite, or if angles are repeated or out
    /// of order.
    pub fn new(samples: impl IntoIterator<Item = PolarSample>) -> Result<Self, AirfoilError> {
        let samples: Vec<PolarSample> = samples.into_iter().collect();

        if samples.len() < 2 {
            return Err(TableDefect::TooFewSamples {
                count: samples.len(),
            }
            .into());
        }

        let mut angles = Vec::with_capacity(samples.len());
        let mut lift = Vec::with_capacity(samples.len());
        let mut drag = Vec::with_capacity(samples.len());

        for (index, sample) in samples.iter().enumerate() {
            let alpha = sample.angle_of_attack.get::<radian>();
            if !(alpha.is_finite() && sample.lift.is_finite() && sample.drag.is_finite()) {
                return Err(TableDefect::NonFinite { index }.into());
            }

            if let Some(&previous) = angles.last() {
                if alpha == previous {
                    return Err(TableDefect::DuplicateAngle { index }.into());
                }
                if alpha < previous {
                    return Err(TableDefect::NonMonotonic { index }.into());
                }
            }

            angles.push(alpha);
            lift.push(sample.lift);
            drag.push(sample.drag);
        }

        Ok(Self { angles, lift, drag })
    }

    /// Number of tabulated samples (always at least two).
    #[must_use]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Always false; a polar holds at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Smallest and largest tabulated angle of attack.
    #[must_use]
    pub fn angle_range(&self) -> (Angle, Angle) {
        let first = self.angles[0];
        let last = self.angles[self.angles.len() - 1];
        (Angle::new::<radian>(first), Angle::new::<radian>(last))
    }

    /// Iterates over the tabulated samples in angle order.
    pub fn samples(&self) -> impl Iterator<Item = PolarSample> + '_ {
        self.angles
            .iter()
            .zip(&self.lift)
            .zip(&self.drag)
            .map(|((&alpha, &cl), &cd)| PolarSample::new(Angle::new::<radian>(alpha), cl, cd))
    }

    /// Coefficients at `angle`, linear between samples and flat beyond them.
    #[must_use]
    pub fn coefficients(&self, angle: Angle) -> Coefficients {
        self.at_radians(angle.get::<radian>())
    }

    pub(super) fn at_radians(&self, alpha: f64) -> Coefficients {
        let bracket: Bracket = locate(&self.angles, alpha);
        Coefficients {
            lift: bracket.blend(&self.lift),
            drag: bracket.blend(&self.drag),
        }
    }
}
