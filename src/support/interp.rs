//! One-dimensional interpolation primitives.
//!
//! These are the building blocks for tabulated data such as airfoil polars:
//! locate the segment that brackets a query, then blend the two end values.
//! Queries outside the tabulated range are clamped to the nearest end
//! (flat extrapolation); nothing here ever extends a trend past the data.

/// A located segment of a strictly increasing knot sequence.
///
/// `weight` is the fractional position within `[knots[lower], knots[lower + 1]]`,
/// always in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Index of the left knot of the segment.
    pub lower: usize,
    /// Fractional position within the segment.
    pub weight: f64,
}

impl Bracket {
    /// Blends the values at `lower` and `lower + 1` of `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is shorter than the knot sequence the bracket was
    /// located in.
    #[must_use]
    pub fn blend(&self, values: &[f64]) -> f64 {
        lerp(values[self.lower], values[self.lower + 1], self.weight)
    }
}

/// Locates `x` within strictly increasing `knots`, clamping outside the range.
///
/// A query below the first knot returns the first segment with weight 0, a
/// query above the last knot returns the last segment with weight 1. A query
/// exactly on a knot returns that knot with weight 0 (or the final knot with
/// weight 1), so blending reproduces tabulated values exactly.
///
/// Callers must supply at least two knots.
/// A `NaN` query is treated as below the range.
///
/// # Example
///
/// ```
/// use twine_bem::support::interp::locate;
///
/// let knots = [0.0, 1.0, 3.0];
/// let b = locate(&knots, 2.0);
/// assert_eq!((b.lower, b.weight), (1, 0.5));
///
/// // Beyond the table the bracket is pinned to the end knot.
/// let b = locate(&knots, 10.0);
/// assert_eq!((b.lower, b.weight), (1, 1.0));
/// ```
#[must_use]
pub fn locate(knots: &[f64], x: f64) -> Bracket {
    debug_assert!(knots.len() >= 2, "interpolation needs at least two knots");

    let last = knots.len() - 1;

    if x.is_nan() || x <= knots[0] {
        return Bracket {
            lower: 0,
            weight: 0.0,
        };
    }
    if x >= knots[last] {
        return Bracket {
            lower: last - 1,
            weight: 1.0,
        };
    }

    // First knot strictly greater than x; guaranteed in 1..=last here.
    let upper = knots.partition_point(|&k| k <= x);
    let lower = upper - 1;

    Bracket {
        lower,
        weight: (x - knots[lower]) / (knots[upper] - knots[lower]),
    }
}

/// Linear blend `(1 - t) * y0 + t * y1`.
///
/// This form is exact at both ends (`t = 0` gives `y0`, `t = 1` gives `y1`).
#[must_use]
pub fn lerp(y0: f64, y1: f64, t: f64) -> f64 {
    (1.0 - t) * y0 + t * y1
}

/// Clamped linear interpolation of `values` over strictly increasing `knots`.
///
/// # Panics
///
/// Panics if `values` is shorter than `knots`.
#[must_use]
pub fn interpolate(knots: &[f64], values: &[f64], x: f64) -> f64 {
    locate(knots, x).blend(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const KNOTS: [f64; 4] = [-2.0, 0.0, 1.0, 5.0];
    const VALUES: [f64; 4] = [0.3, -1.7, 2.9, 0.1];

    #[test]
    #[allow(clippy::float_cmp)]
    fn exact_at_every_knot() {
        for (x, y) in KNOTS.iter().zip(VALUES) {
            assert_eq!(interpolate(&KNOTS, &VALUES, *x), y);
        }
    }

    #[test]
    fn linear_between_knots() {
        assert_relative_eq!(interpolate(&KNOTS, &VALUES, -1.0), -0.7);
        assert_relative_eq!(interpolate(&KNOTS, &VALUES, 3.0), 1.5);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn clamps_outside_range() {
        assert_eq!(interpolate(&KNOTS, &VALUES, -100.0), 0.3);
        assert_eq!(interpolate(&KNOTS, &VALUES, 100.0), 0.1);
        assert_eq!(interpolate(&KNOTS, &VALUES, f64::INFINITY), 0.1);
        assert_eq!(interpolate(&KNOTS, &VALUES, f64::NEG_INFINITY), 0.3);
    }

    #[test]
    fn weight_stays_in_unit_interval() {
        for i in 0..=100 {
            let x = -3.0 + 0.09 * f64::from(i);
            let b = locate(&KNOTS, x);
            assert!((0.0..=1.0).contains(&b.weight), "x={x} gave {b:?}");
            assert!(b.lower + 1 < KNOTS.len());
        }
    }
}
