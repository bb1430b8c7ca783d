//! Incompressible liquid model with constant heat capacity.
//!
//! `Incompressible` treats a liquid as having constant density and constant
//! specific heat, which is the usual engineering approximation for water
//! heated well below its boiling point.
//!
//! # Assumptions
//!
//! - Density is constant (`ρ = ρ_ref`)
//! - `cp` is constant
//! - Pressure effects on enthalpy are neglected
//!
//! # Reference State
//!
//! Enthalpy is reported relative to a reference state (`T_ref`, `h_ref`).

use std::marker::PhantomData;

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{MassDensity, SpecificHeatCapacity, TemperatureInterval, ThermodynamicTemperature},
        thermodynamic_temperature::{degree_celsius, kelvin},
    },
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{
        PropertyError, State,
        capability::{HasEnthalpy, StateFrom, ThermoModel},
    },
    units::{SpecificEnthalpy, TemperatureDifference},
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IncompressibleParametersError {
    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },
    #[error("invalid reference density: {rho_ref:?}")]
    ReferenceDensity { rho_ref: MassDensity },
}

/// Constant parameters for the [`Incompressible`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncompressibleParameters {
    pub cp: SpecificHeatCapacity,
    pub density: MassDensity,
    pub reference_temperature: ThermodynamicTemperature,
    pub reference_enthalpy: SpecificEnthalpy,
}

impl IncompressibleParameters {
    /// Creates parameters referenced to `h = 0` at 25°C.
    #[must_use]
    pub fn new(cp: SpecificHeatCapacity, density: MassDensity) -> Self {
        Self {
            cp,
            density,
            reference_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
            reference_enthalpy: SpecificEnthalpy::ZERO,
        }
    }
}

/// Fluid constants required by the [`Incompressible`] model.
pub trait IncompressibleFluid {
    /// Returns the constant parameters for use with [`Incompressible`].
    fn parameters() -> IncompressibleParameters;
}

/// Incompressible liquid model with constant density and constant heat capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incompressible<Fluid> {
    cp: SpecificHeatCapacity,
    rho: MassDensity,
    t_ref: ThermodynamicTemperature,
    h_ref: SpecificEnthalpy,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for Incompressible<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid> Incompressible<Fluid> {
    /// Creates an incompressible model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`IncompressibleParametersError`] if any required constant is invalid.
    pub fn new() -> Result<Self, IncompressibleParametersError>
    where
        Fluid: IncompressibleFluid,
    {
        let parameters = Fluid::parameters();

        let cp = parameters.cp;
        if StrictlyPositive::check(&cp.value).is_err() {
            return Err(IncompressibleParametersError::Cp { cp });
        }

        let rho_ref = parameters.density;
        if StrictlyPositive::check(&rho_ref.value).is_err() {
            return Err(IncompressibleParametersError::ReferenceDensity { rho_ref });
        }

        Ok(Self {
            cp,
            rho: rho_ref,
            t_ref: parameters.reference_temperature,
            h_ref: parameters.reference_enthalpy,
            _marker: PhantomData,
        })
    }

    /// Constant specific heat of the liquid.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        self.cp
    }

    fn check_temperature(temperature: ThermodynamicTemperature) -> Result<(), PropertyError> {
        if temperature.get::<kelvin>() > 0.0 {
            Ok(())
        } else {
            Err(PropertyError::BelowAbsoluteZero {
                temperature_k: temperature.get::<kelvin>(),
            })
        }
    }
}

impl<Fluid> HasEnthalpy for Incompressible<Fluid> {
    /// Computes enthalpy using `h = h₀ + c·(T − T₀)`.
    fn enthalpy(&self, state: &State<Fluid>) -> Result<SpecificEnthalpy, PropertyError> {
        Ok(self.h_ref + self.cp * state.temperature.minus(self.t_ref))
    }
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature)> for Incompressible<Fluid> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature): (Fluid, ThermodynamicTemperature),
    ) -> Result<State<Fluid>, Self::Error> {
        Self::check_temperature(temperature)?;
        Ok(State::new(temperature, self.rho, fluid))
    }
}

/// Inverts `h = h₀ + c·(T − T₀)` for the temperature.
impl<Fluid> StateFrom<(Fluid, SpecificEnthalpy)> for Incompressible<Fluid> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, enthalpy): (Fluid, SpecificEnthalpy),
    ) -> Result<State<Fluid>, Self::Error> {
        let delta_t: TemperatureInterval = (enthalpy - self.h_ref) / self.cp;
        let temperature = self.t_ref + delta_t;
        Self::check_temperature(temperature)?;
        Ok(State::new(temperature, self.rho, fluid))
    }
}
