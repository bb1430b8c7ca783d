use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::{Constrained, Constraint, ConstraintError, Finite};

/// Marker type for finite absolute temperatures above 0 K.
///
/// # Examples
///
/// ```
/// use twine_collector::support::constraint::AboveAbsoluteZero;
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
///
/// let t = ThermodynamicTemperature::new::<degree_celsius>(-10.0);
/// assert!(AboveAbsoluteZero::new(t).is_ok());
///
/// let t = ThermodynamicTemperature::new::<degree_celsius>(-500.0);
/// assert!(AboveAbsoluteZero::new(t).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveAbsoluteZero;

impl AboveAbsoluteZero {
    /// Constructs a [`Constrained<ThermodynamicTemperature, AboveAbsoluteZero>`].
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] at or below 0 K, and the
    /// [`Finite`] errors for `NaN` or infinite temperatures.
    pub fn new(
        value: ThermodynamicTemperature,
    ) -> Result<Constrained<ThermodynamicTemperature, AboveAbsoluteZero>, ConstraintError> {
        Constrained::<ThermodynamicTemperature, AboveAbsoluteZero>::new(value)
    }
}

impl Constraint<ThermodynamicTemperature> for AboveAbsoluteZero {
    fn check(value: &ThermodynamicTemperature) -> Result<(), ConstraintError> {
        <Finite as Constraint<ThermodynamicTemperature>>::check(value)?;
        if value.get::<kelvin>() > 0.0 {
            Ok(())
        } else {
            Err(ConstraintError::BelowMinimum)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn ambient_temperatures() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(30.0);
        assert_eq!(AboveAbsoluteZero::new(t).unwrap().into_inner(), t);

        assert_eq!(
            AboveAbsoluteZero::new(ThermodynamicTemperature::new::<kelvin>(0.0)),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            AboveAbsoluteZero::new(ThermodynamicTemperature::new::<kelvin>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
        assert_eq!(
            AboveAbsoluteZero::new(ThermodynamicTemperature::new::<kelvin>(f64::INFINITY)),
            Err(ConstraintError::NotFinite)
        );
    }
}
