use crate::support::thermo::{PropertyError, State};
use crate::support::units::SpecificEnthalpy;

use super::ThermoModel;

/// Capability for evaluating specific enthalpy.
///
/// The collector energy balance only ever uses enthalpy differences, so the
/// reference state is the model's choice.
pub trait HasEnthalpy: ThermoModel {
    /// Returns the specific enthalpy for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the enthalpy cannot be calculated.
    fn enthalpy(&self, state: &State<Self::Fluid>) -> Result<SpecificEnthalpy, PropertyError>;
}
