use uom::si::{angle::radian, f64::Angle};

use crate::support::interp::locate;

use super::{AirfoilError, Coefficients, Polar, TableDefect};

/// Interpolates lift and drag coefficients from one or more airfoil polars.
///
/// The tables are immutable once constructed, so an interpolator can be
/// wrapped in an `Arc` and read concurrently by every blade station that uses
/// the airfoil.
///
/// Queries never fail: angles outside a table are clamped to its end samples,
/// and Reynolds numbers outside the keyed range are clamped to the nearest
/// table.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilInterpolator {
    tables: Tables,
}

#[derive(Debug, Clone, PartialEq)]
enum Tables {
    Single(Polar),
    Reynolds {
        /// Strictly increasing Reynolds numbers, one per polar.
        keys: Vec<f64>,
        polars: Vec<Polar>,
    },
}

impl AirfoilInterpolator {
    /// Creates an interpolator over a single polar.
    ///
    /// Reynolds numbers passed to [`query`](Self::query) are ignored.
    #[must_use]
    pub fn new(polar: Polar) -> Self {
        Self {
            tables: Tables::Single(polar),
        }
    }

    /// Creates an interpolator over polars keyed by Reynolds number.
    ///
    /// Tables may be supplied in any order; they are sorted by Reynolds
    /// number. A single table behaves like [`AirfoilInterpolator::new`].
    ///
    /// # Errors
    ///
    /// Returns [`AirfoilError::Empty`] if `tables` is empty, or
    /// [`AirfoilError::InvalidTable`] if a Reynolds number is not finite and
    /// positive or appears more than once.
    pub fn with_reynolds(tables: Vec<(f64, Polar)>) -> Result<Self, AirfoilError> {
        if tables.is_empty() {
            return Err(AirfoilError::Empty);
        }

        if let Some(index) = tables
            .iter()
            .position(|(re, _)| !(re.is_finite() && *re > 0.0))
        {
            return Err(TableDefect::InvalidReynolds { index }.into());
        }

        let mut indexed: Vec<(usize, (f64, Polar))> = tables.into_iter().enumerate().collect();
        indexed.sort_by(|(_, (a, _)), (_, (b, _))| a.total_cmp(b));

        if let Some(pair) = indexed.windows(2).find(|pair| pair[0].1.0 == pair[1].1.0) {
            let index = pair[0].0.max(pair[1].0);
            return Err(TableDefect::DuplicateReynolds { index }.into());
        }

        let (keys, mut polars): (Vec<f64>, Vec<Polar>) =
            indexed.into_iter().map(|(_, table)| table).unzip();

        if polars.len() == 1 {
            return Ok(Self::new(polars.remove(0)));
        }

        Ok(Self {
            tables: Tables::Reynolds { keys, polars },
        })
    }

    /// Interpolated coefficients at `angle` and, optionally, a Reynolds number.
    ///
    /// With Reynolds-keyed tables and no Reynolds number, the lowest-Reynolds
    /// table is used.
    #[must_use]
    pub fn query(&self, angle: Angle, reynolds: Option<f64>) -> Coefficients {
        let alpha = angle.get::<radian>();

        match &self.tables {
            Tables::Single(polar) => polar.at_radians(alpha),
            Tables::Reynolds { keys, polars } => match reynolds {
                None => polars[0].at_radians(alpha),
                Some(re) => {
                    let bracket = locate(keys, re);
                    let lower = polars[bracket.lower].at_radians(alpha);
                    let upper = polars[bracket.lower + 1].at_radians(alpha);
                    lower.blend(upper, bracket.weight)
                }
            },
        }
    }

    /// Number of polars held by this interpolator.
    #[must_use]
    pub fn table_count(&self) -> usize {
        match &self.tables {
            Tables::Single(_) => 1,
            Tables::Reynolds { polars, .. } => polars.len(),
        }
    }

    /// The Reynolds keys in increasing order, if tables are Reynolds-keyed.
    #[must_use]
    pub fn reynolds_numbers(&self) -> Option<&[f64]> {
        match &self.tables {
            Tables::Single(_) => None,
            Tables::Reynolds { keys, .. } => Some(keys),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::support::airfoil::PolarSample;
    use approx::assert_relative_eq;
    use uom::si::angle::degree;

    fn polar(cl0: f64, cl10: f64) -> Polar {
        Polar::new([
            PolarSample::degrees(0.0, cl0, 0.01),
            PolarSample::degrees(10.0, cl10, 0.02),
        ])
        .unwrap()
    }

    fn deg(value: f64) -> Angle {
        Angle::new::<degree>(value)
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn single_table_ignores_reynolds() {
        let airfoil = AirfoilInterpolator::new(polar(0.2, 1.0));
        let a = airfoil.query(deg(10.0), None);
        let b = airfoil.query(deg(10.0), Some(3.0e6));
        assert_eq!(a, b);
        assert_eq!(a.lift, 1.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn flat_extrapolation_keeps_boundary_values() {
        let airfoil = AirfoilInterpolator::new(polar(0.2, 1.0));

        let above = airfoil.query(deg(20.0), None);
        assert_eq!(above.lift, 1.0);
        assert_eq!(above.drag, 0.02);

        let below = airfoil.query(deg(-30.0), None);
        assert_eq!(below.lift, 0.2);
        assert_eq!(below.drag, 0.01);
    }

    #[test]
    fn blends_linearly_in_reynolds() {
        let airfoil = AirfoilInterpolator::with_reynolds(vec![
            (1.0e6, polar(0.2, 1.0)),
            (2.0e6, polar(0.4, 1.2)),
        ])
        .unwrap();

        let c = airfoil.query(deg(0.0), Some(1.5e6));
        assert_relative_eq!(c.lift, 0.3, epsilon = 1e-12);
        assert_relative_eq!(c.drag, 0.01, epsilon = 1e-12);

        let c = airfoil.query(deg(5.0), Some(1.25e6));
        assert_relative_eq!(c.lift, 0.65, epsilon = 1e-12);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn exact_at_reynolds_keys_and_clamped_outside() {
        let airfoil = AirfoilInterpolator::with_reynolds(vec![
            (2.0e6, polar(0.4, 1.2)),
            (1.0e6, polar(0.2, 1.0)),
        ])
        .unwrap();

        assert_eq!(airfoil.reynolds_numbers(), Some(&[1.0e6, 2.0e6][..]));
        assert_eq!(airfoil.query(deg(0.0), Some(1.0e6)).lift, 0.2);
        assert_eq!(airfoil.query(deg(0.0), Some(2.0e6)).lift, 0.4);
        assert_eq!(airfoil.query(deg(0.0), Some(1.0e3)).lift, 0.2);
        assert_eq!(airfoil.query(deg(0.0), Some(9.0e9)).lift, 0.4);
        assert_eq!(airfoil.query(deg(0.0), None).lift, 0.2);
    }

    #[test]
    fn single_keyed_table_behaves_like_single() {
        let airfoil = AirfoilInterpolator::with_reynolds(vec![(5.0e5, polar(0.2, 1.0))]).unwrap();
        assert_eq!(airfoil.table_count(), 1);
        assert_eq!(airfoil.reynolds_numbers(), None);
    }

    #[test]
    fn rejects_empty_and_bad_keys() {
        assert_eq!(
            AirfoilInterpolator::with_reynolds(vec![]).unwrap_err(),
            AirfoilError::Empty
        );
        assert_eq!(
            AirfoilInterpolator::with_reynolds(vec![
                (1.0e6, polar(0.2, 1.0)),
                (0.0, polar(0.2, 1.0))
            ])
            .unwrap_err(),
            AirfoilError::InvalidTable(TableDefect::InvalidReynolds { index: 1 })
        );
        assert_eq!(
            AirfoilInterpolator::with_reynolds(vec![
                (1.0e6, polar(0.2, 1.0)),
                (f64::NAN, polar(0.2, 1.0))
            ])
            .unwrap_err(),
            AirfoilError::InvalidTable(TableDefect::InvalidReynolds { index: 1 })
        );
        assert_eq!(
            AirfoilInterpolator::with_reynolds(vec![
                (1.0e6, polar(0.2, 1.0)),
                (2.0e6, polar(0.3, 1.0)),
                (1.0e6, polar(0.4, 1.0)),
            ])
            .unwrap_err(),
            AirfoilError::InvalidTable(TableDefect::DuplicateReynolds { index: 2 })
        );
    }

    #[test]
    fn shared_across_threads() {
        let airfoil = Arc::new(AirfoilInterpolator::new(polar(0.2, 1.0)));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let airfoil = Arc::clone(&airfoil);
                std::thread::spawn(move || airfoil.query(deg(2.5 * f64::from(i)), None).lift)
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let expected = 0.2 + 0.08 * 2.5 * i as f64;
            assert_relative_eq!(handle.join().unwrap(), expected, epsilon = 1e-12);
        }
    }
}
