//! Numeric invariants checked once, at construction.
//!
//! A [`Constrained<T, C>`] can only be built from a value that passes the
//! marker's [`Constraint<T>`] check, so downstream code can rely on the
//! invariant without re-validating it.
//!
//! # Provided constraints
//!
//! - [`AboveAbsoluteZero`]: Finite and above 0 K (ambient temperatures)
//! - [`Finite`]: Neither infinite nor `NaN` (heat flows)
//! - [`NonNegative`]: Zero or greater (loss coefficients, irradiance)
//! - [`StrictlyPositive`]: Greater than zero (areas, mass flows, pressures)
//! - [`UnitIntervalLowerOpen`]: `0 < x ≤ 1` (pressure ratios)
//!
//! Every marker also rejects `NaN`, which is how an unset numeric slot is
//! caught before it reaches a solver.

mod above_absolute_zero;
mod finite;
mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use above_absolute_zero::AboveAbsoluteZero;
pub use finite::{Finite, FiniteValue};
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalLowerOpen};

/// A numeric invariant implemented by a zero-sized marker type.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is not finite")]
    NotFinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_collector::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{area::square_meter, f64::Area};
///
/// let area = Constrained::<_, StrictlyPositive>::new(Area::new::<square_meter>(10.0)).unwrap();
/// assert_eq!(area.into_inner().get::<square_meter>(), 10.0);
///
/// assert!(StrictlyPositive::new(Area::new::<square_meter>(0.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
