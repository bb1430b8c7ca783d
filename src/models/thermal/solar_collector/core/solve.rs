//! Dispatch of a collector solve by parametrization.

mod error;

pub use error::SolveError;

use uom::si::f64::{MassRate, Power, ThermodynamicTemperature};

use crate::support::{thermo::State, units::SpecificEnthalpy};

use super::{
    FluidSide, Given, IterationConfig, Known, Results,
    absorption::{Absorbed, absorption_driven},
    traits::CollectorThermoModel,
};

/// Solves the collector energy balance for the given parametrization.
///
/// Heat-driven and flow-driven solves close directly from
/// `Q = ṁ·(h_out − h_in)`. Absorption-driven solves iterate on the outlet
/// temperature.
///
/// # Errors
///
/// Returns [`SolveError`] on non-physical results, thermodynamic model
/// failures, or if the outlet temperature iteration fails.
pub(super) fn solve<Fluid: Clone>(
    known: &Known<Fluid>,
    given: &Given,
    config: &IterationConfig,
    thermo: &impl CollectorThermoModel<Fluid>,
) -> Result<Results<Fluid>, SolveError> {
    let inlet_enthalpy = thermo
        .enthalpy(&known.inlet)
        .map_err(|err| SolveError::thermo_failed("inlet enthalpy", err))?;

    let parametrization = given.parametrization();
    let mut irradiance = None;
    let mut radiation = None;

    let (outlet, outlet_enthalpy, m_dot, q_dot) = match *given {
        Given::HeatDriven {
            q_dot,
            fixed: FluidSide::MassFlow(m_dot),
        } => {
            let outlet_enthalpy = inlet_enthalpy + q_dot / m_dot;
            let outlet = thermo
                .state_from((known.inlet.fluid.clone(), outlet_enthalpy))
                .map_err(|err| SolveError::thermo_failed("outlet state from enthalpy", err))?;
            (outlet, outlet_enthalpy, m_dot, q_dot)
        }

        Given::HeatDriven {
            q_dot,
            fixed: FluidSide::OutletTemperature(outlet_temperature),
        } => {
            let (outlet, outlet_enthalpy) = outlet_at(known, outlet_temperature, thermo)?;
            let m_dot = derived_mass_flow(q_dot, outlet_enthalpy - inlet_enthalpy)?;
            (outlet, outlet_enthalpy, m_dot, q_dot)
        }

        Given::FlowDriven {
            m_dot,
            outlet_temperature,
        } => {
            let (outlet, outlet_enthalpy) = outlet_at(known, outlet_temperature, thermo)?;
            (outlet, outlet_enthalpy, m_dot, m_dot * (outlet_enthalpy - inlet_enthalpy))
        }

        Given::AbsorptionDriven {
            irradiance: e,
            absorber,
            anchor,
        } => {
            let Absorbed {
                outlet,
                outlet_enthalpy,
                m_dot,
                q_dot,
                radiation: balance,
            } = absorption_driven(known, inlet_enthalpy, e, absorber, anchor, config, thermo)?;

            irradiance = Some(e);
            radiation = Some(balance);
            (outlet, outlet_enthalpy, m_dot, q_dot)
        }
    };

    let pressure_ratio = known.pressure_ratio.into_inner();

    Ok(Results {
        parametrization,
        inlet: known.inlet.clone(),
        outlet,
        inlet_enthalpy,
        outlet_enthalpy,
        inlet_pressure: known.inlet_pressure,
        outlet_pressure: known.inlet_pressure * pressure_ratio,
        pressure_ratio,
        m_dot,
        q_dot,
        irradiance,
        radiation,
    })
}

fn outlet_at<Fluid: Clone>(
    known: &Known<Fluid>,
    outlet_temperature: ThermodynamicTemperature,
    thermo: &impl CollectorThermoModel<Fluid>,
) -> Result<(State<Fluid>, SpecificEnthalpy), SolveError> {
    let outlet = thermo
        .state_from((known.inlet.fluid.clone(), outlet_temperature))
        .map_err(|err| SolveError::thermo_failed("outlet state from temperature", err))?;
    let outlet_enthalpy = thermo
        .enthalpy(&outlet)
        .map_err(|err| SolveError::thermo_failed("outlet enthalpy", err))?;
    Ok((outlet, outlet_enthalpy))
}

/// Mass flow `Q / Δh`, which must be positive and finite.
fn derived_mass_flow(q_dot: Power, dh: SpecificEnthalpy) -> Result<MassRate, SolveError> {
    let m_dot: MassRate = q_dot / dh;
    if m_dot.value.is_finite() && m_dot.value > 0.0 {
        Ok(m_dot)
    } else {
        Err(SolveError::NonPhysicalMassFlow { m_dot, q_dot })
    }
}
