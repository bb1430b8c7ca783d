//! Problem formulation for the absorption-driven outlet temperature.

use std::{convert::Infallible, marker::PhantomData};

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{HeatFluxDensity, Power, ThermodynamicTemperature},
    power::watt,
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::thermal::solar_collector::core::{
        Absorber, Anchor, Known, RadiationBalance, SolveError, traits::CollectorThermoModel,
    },
    support::{thermo::State, units::SpecificEnthalpy},
};

/// Both sides of the collector balance at a trial outlet temperature.
#[derive(Debug, Clone)]
pub(super) struct OutletBalance<Fluid> {
    pub(super) outlet: State<Fluid>,
    pub(super) outlet_enthalpy: SpecificEnthalpy,
    pub(super) radiation: RadiationBalance,
}

/// Model adapter exposing the outlet temperature as the sole input.
pub(super) struct OutletModel<'a, Fluid, Thermo> {
    known: &'a Known<Fluid>,
    irradiance: HeatFluxDensity,
    absorber: Absorber,
    thermo: &'a Thermo,
}

impl<'a, Fluid, Thermo> OutletModel<'a, Fluid, Thermo> {
    pub(super) fn new(
        known: &'a Known<Fluid>,
        irradiance: HeatFluxDensity,
        absorber: Absorber,
        thermo: &'a Thermo,
    ) -> Self {
        Self {
            known,
            irradiance,
            absorber,
            thermo,
        }
    }
}

impl<Fluid, Thermo> Model for OutletModel<'_, Fluid, Thermo>
where
    Fluid: Clone,
    Thermo: CollectorThermoModel<Fluid>,
{
    type Input = ThermodynamicTemperature;
    type Output = OutletBalance<Fluid>;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let outlet = self
            .thermo
            .state_from((self.known.inlet.fluid.clone(), *input))
            .map_err(|err| SolveError::thermo_failed("outlet state from temperature", err))?;

        let outlet_enthalpy = self
            .thermo
            .enthalpy(&outlet)
            .map_err(|err| SolveError::thermo_failed("outlet enthalpy", err))?;

        let radiation =
            self.absorber
                .balance(self.irradiance, self.known.inlet.temperature, *input);

        Ok(OutletBalance {
            outlet,
            outlet_enthalpy,
            radiation,
        })
    }
}

/// Equation problem balancing the fluid side against the radiation side.
///
/// Both residual forms increase with the outlet temperature:
/// - mass flow anchor: `ṁ·(h_out − h_in) − Q_useful`
/// - heat flow anchor: `Q − Q_useful`
pub(super) struct OutletProblem<Fluid> {
    anchor: Anchor,
    inlet_enthalpy: SpecificEnthalpy,
    _fluid: PhantomData<Fluid>,
}

impl<Fluid> OutletProblem<Fluid> {
    pub(super) fn new(anchor: Anchor, inlet_enthalpy: SpecificEnthalpy) -> Self {
        Self {
            anchor,
            inlet_enthalpy,
            _fluid: PhantomData,
        }
    }
}

impl<Fluid> EquationProblem<1> for OutletProblem<Fluid> {
    type Input = ThermodynamicTemperature;
    type Output = OutletBalance<Fluid>;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let useful: Power = output.radiation.useful_heat();
        let fluid_side: Power = match self.anchor {
            Anchor::MassFlow(m_dot) => m_dot * (output.outlet_enthalpy - self.inlet_enthalpy),
            Anchor::HeatFlow(q_dot) => q_dot,
        };
        Ok([(fluid_side - useful).get::<watt>()])
    }
}
