use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// Inputs are ordinary Rust types, usually tuples that start with the fluid:
/// `(Fluid, ThermodynamicTemperature)` or `(Fluid, SpecificEnthalpy)` for a
/// liquid whose pressure dependence is neglected.
/// A model that doesn't implement `StateFrom<Input>` simply can't be used
/// where that input is required, so unsupported combinations fail at compile
/// time rather than at run time.
///
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
/// [`SpecificEnthalpy`]: crate::support::units::SpecificEnthalpy
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}
