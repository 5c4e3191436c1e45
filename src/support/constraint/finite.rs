use uom::si::{Dimension, Quantity, Units};

use super::{Constrained, Constraint, ConstraintError};

/// Floating-point values that can report whether they are finite.
pub trait FiniteValue {
    fn is_nan(&self) -> bool;
    fn is_infinite(&self) -> bool;
}

impl FiniteValue for f64 {
    fn is_nan(&self) -> bool {
        f64::is_nan(*self)
    }

    fn is_infinite(&self) -> bool {
        f64::is_infinite(*self)
    }
}

impl<D, U> FiniteValue for Quantity<D, U, f64>
where
    D: Dimension + ?Sized,
    U: Units<f64> + ?Sized,
{
    fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    fn is_infinite(&self) -> bool {
        self.value.is_infinite()
    }
}

/// Marker type enforcing that a value is finite.
///
/// Twist and pitch angles may take any sign but must be real numbers. Other
/// physical inputs pair this with a sign constraint through
/// [`Constrained::new_finite`].
///
/// # Examples
///
/// ```
/// use twine_bem::support::constraint::Finite;
/// use uom::si::{angle::degree, f64::Angle};
///
/// assert!(Finite::new(Angle::new::<degree>(-4.0)).is_ok());
/// assert!(Finite::new(f64::INFINITY).is_err());
/// assert!(Finite::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] for `NaN` and
    /// [`ConstraintError::Infinite`] for either infinity.
    pub fn new<T: FiniteValue>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: FiniteValue> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}
