use std::convert::Infallible;

use uom::si::{
    f64::{MassDensity, SpecificHeatCapacity, TemperatureInterval, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::{
    thermo::{
        PropertyError, State,
        capability::{HasEnthalpy, StateFrom, ThermoModel},
    },
    units::{SpecificEnthalpy, TemperatureDifference},
};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(super) struct TestFluid;

/// Constant-cp liquid with `h = 0` at 0 K.
#[derive(Debug, Clone, Copy)]
pub(super) struct TestThermoModel {
    cp: SpecificHeatCapacity,
    density: MassDensity,
}

impl TestThermoModel {
    pub(super) fn new() -> Self {
        Self {
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1000.0),
            density: MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
        }
    }

    pub(super) fn cp(&self) -> SpecificHeatCapacity {
        self.cp
    }
}

impl ThermoModel for TestThermoModel {
    type Fluid = TestFluid;
}

impl HasEnthalpy for TestThermoModel {
    fn enthalpy(&self, state: &State<Self::Fluid>) -> Result<SpecificEnthalpy, PropertyError> {
        let t_ref = ThermodynamicTemperature::new::<kelvin>(0.0);
        Ok(self.cp * state.temperature.minus(t_ref))
    }
}

impl StateFrom<(TestFluid, ThermodynamicTemperature)> for TestThermoModel {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, temperature): (TestFluid, ThermodynamicTemperature),
    ) -> Result<State<TestFluid>, Self::Error> {
        Ok(State::new(temperature, self.density, fluid))
    }
}

impl StateFrom<(TestFluid, SpecificEnthalpy)> for TestThermoModel {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, enthalpy): (TestFluid, SpecificEnthalpy),
    ) -> Result<State<TestFluid>, Self::Error> {
        let t_ref = ThermodynamicTemperature::new::<kelvin>(0.0);
        let delta_t: TemperatureInterval = enthalpy / self.cp;
        Ok(State::new(t_ref + delta_t, self.density, fluid))
    }
}

pub(super) fn state(temp_celsius: f64) -> State<TestFluid> {
    State::new(
        ThermodynamicTemperature::new::<degree_celsius>(temp_celsius),
        MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
        TestFluid,
    )
}
