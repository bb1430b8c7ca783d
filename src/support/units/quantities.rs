use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, N3, P1, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Quadratic heat loss coefficient, W/m²·K² in SI.
///
/// Multiplying by the square of a temperature interval yields a heat flux
/// density (W/m²).
pub type QuadraticLossCoefficient = Quantity<ISQ<Z0, P1, N3, Z0, N2, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`QuadraticLossCoefficient`] from a value in W/m²·K².
///
/// [`uom`] has no unit definitions for this dimension, so the value is stored
/// directly in base SI units.
///
/// ```
/// use twine_collector::support::units::quadratic_loss_coefficient;
///
/// let k2 = quadratic_loss_coefficient(0.005);
/// assert_eq!(k2.value, 0.005);
/// ```
#[must_use]
pub fn quadratic_loss_coefficient(watt_per_square_meter_kelvin_squared: f64) -> QuadraticLossCoefficient {
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value: watt_per_square_meter_kelvin_squared,
    }
}
