//! Airfoil polar tables and lift/drag interpolation.
//!
//! A [`Polar`] is a validated table of lift and drag coefficients against
//! angle of attack for one Reynolds number. An [`AirfoilInterpolator`] owns
//! one polar, or several keyed by Reynolds number, and answers coefficient
//! queries at arbitrary angles.
//!
//! # Interpolation rules
//!
//! - Linear in angle of attack between the two bracketing samples.
//! - Exact at tabulated angles.
//! - Flat beyond the table: a query past either end returns the end sample's
//!   coefficients unchanged. Linear extension of a lift curve past stall is
//!   not physical, so it is never attempted.
//! - With Reynolds-keyed tables, each bracketing table is interpolated in
//!   angle and the two results are blended linearly in Reynolds number,
//!   clamped to the nearest table outside the keyed range.
//!
//! # Example
//!
//! ```
//! use twine_bem::support::airfoil::{AirfoilError, AirfoilInterpolator, Polar, PolarSample};
//! use uom::si::{angle::degree, f64::Angle};
//!
//! fn main() -> Result<(), AirfoilError> {
//!     let polar = Polar::new([
//!         PolarSample::degrees(0.0, 0.2, 0.01),
//!         PolarSample::degrees(10.0, 1.0, 0.03),
//!     ])?;
//!     let airfoil = AirfoilInterpolator::new(polar);
//!
//!     let mid = airfoil.query(Angle::new::<degree>(5.0), None);
//!     assert!((mid.lift - 0.6).abs() < 1e-12);
//!
//!     // Past the last sample the coefficients stay flat.
//!     let beyond = airfoil.query(Angle::new::<degree>(20.0), None);
//!     assert_eq!(beyond.lift, 1.0);
//!     Ok(())
//! }
//! ```

mod error;
mod interpolator;
mod polar;

pub use error::{AirfoilError, TableDefect};
pub use interpolator::AirfoilInterpolator;
pub use polar::{Coefficients, Polar, PolarSample};
