//! Numeric invariants checked once, when a value enters the crate.
//!
//! Rotor inputs carry physical invariants: chords and radii are strictly
//! positive, wind speed cannot be negative, a relaxation factor lives in
//! `(0, 1]`, angles must be finite. Wrapping those values in
//! [`Constrained<T, C>`] moves the check to the boundary so the numerical
//! core can rely on them without re-validating.
//!
//! # Markers
//!
//! - [`Finite`]: Neither infinite nor `NaN`
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitIntervalLowerOpen`]: `0 < x ≤ 1`
//!
//! Markers are generic over the wrapped type, so the same marker guards a
//! bare `f64`, a `usize` blade count or a [`uom`] quantity such as `Length`.
//! A new invariant is a zero-sized marker implementing [`Constraint<T>`].

mod finite;
mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use finite::{Finite, FiniteValue};
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalLowerOpen};

/// A check applied to a value before it may be wrapped.
pub trait Constraint<T> {
    /// Checks that `value` satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// Result of a constrained construction.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value of type `T` known to satisfy constraint `C`.
///
/// The only way in is [`Constrained::new`] (or a marker's own `new`), so
/// holding one is proof the check passed.
///
/// # Example
///
/// ```
/// use twine_bem::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::meter};
///
/// let chord = Constrained::<_, StrictlyPositive>::new(Length::new::<meter>(1.2)).unwrap();
/// assert_eq!(chord.into_inner().get::<meter>(), 1.2);
///
/// assert!(StrictlyPositive::new(Length::new::<meter>(0.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the violation reported by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: FiniteValue, C: Constraint<T>> Constrained<T, C> {
    /// Rejects infinities, then checks `value` against `C`.
    ///
    /// Sign constraints alone accept `+inf`; physical inputs go through here.
    ///
    /// ```
    /// use twine_bem::support::constraint::{Constrained, ConstraintError, NonNegative};
    ///
    /// assert!(Constrained::<f64, NonNegative>::new(f64::INFINITY).is_ok());
    /// assert_eq!(
    ///     Constrained::<f64, NonNegative>::new_finite(f64::INFINITY),
    ///     Err(ConstraintError::Infinite)
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] or [`ConstraintError::Infinite`]
    /// for non-finite values, otherwise the violation reported by `C`.
    pub fn new_finite(value: T) -> Result<Self, ConstraintError> {
        <Finite as Constraint<T>>::check(&value)?;
        Self::new(value)
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
