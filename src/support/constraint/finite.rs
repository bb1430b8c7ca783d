use uom::si::f64::{HeatFluxDensity, Power, ThermodynamicTemperature};

use super::{Constrained, Constraint, ConstraintError};

/// Exposes the raw magnitude checked by [`Finite`].
pub trait FiniteValue {
    fn raw(&self) -> f64;
}

impl FiniteValue for f64 {
    fn raw(&self) -> f64 {
        *self
    }
}

macro_rules! finite_quantity {
    ($($quantity:ty),*) => {
        $(
            impl FiniteValue for $quantity {
                fn raw(&self) -> f64 {
                    self.value
                }
            }
        )*
    };
}

finite_quantity!(Power, HeatFluxDensity, ThermodynamicTemperature);

/// Marker type for values that are neither infinite nor `NaN`.
///
/// Signed quantities such as a heat flow can take any finite value.
///
/// # Examples
///
/// ```
/// use twine_collector::support::constraint::Finite;
///
/// assert!(Finite::new(-8000.0).is_ok());
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
    /// [`ConstraintError::NotFinite`] for an infinite value.
    pub fn new<T: FiniteValue>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: FiniteValue> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        let raw = value.raw();
        if raw.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if raw.is_infinite() {
            Err(ConstraintError::NotFinite)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::power::watt;

    #[test]
    fn heat_flows_of_either_sign() {
        assert!(Finite::new(Power::new::<watt>(8000.0)).is_ok());
        assert!(Finite::new(Power::new::<watt>(-250.0)).is_ok());

        assert_eq!(
            Finite::new(Power::new::<watt>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
        assert_eq!(
            Finite::new(Power::new::<watt>(f64::NEG_INFINITY)),
            Err(ConstraintError::NotFinite)
        );
    }
}
