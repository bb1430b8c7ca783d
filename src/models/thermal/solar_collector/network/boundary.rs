//! Translation of network attributes into a collector problem.

use uom::si::{
    f64::{MassRate, Power, Pressure, ThermodynamicTemperature},
    ratio::ratio,
};

use crate::{
    models::thermal::solar_collector::core::{
        Absorber, Anchor, AnchorKind, Attr, CollectorThermoModel, FluidSide, FluidUnknown, Given,
        Known, LossCoefficients, Parametrization, Presence,
    },
    support::{
        constraint::{
            AboveAbsoluteZero, ConstraintError, Finite, NonNegative, StrictlyPositive,
            UnitIntervalLowerOpen,
        },
        thermo::State,
    },
};

use super::{Collector, Connection, NetworkError, SolveMode};

/// Relative tolerance for two fixed values describing the same quantity.
const AGREEMENT_TOL: f64 = 1e-6;

/// A fully specified collector problem.
pub(super) struct Problem<Fluid> {
    pub(super) known: Known<Fluid>,
    pub(super) given: Given,
}

/// The solve an attribute error belongs to.
#[derive(Debug, Clone, Copy)]
pub(in crate::models::thermal::solar_collector) struct Scope {
    pub(in crate::models::thermal::solar_collector) mode: SolveMode,
    pub(in crate::models::thermal::solar_collector) parametrization: Parametrization,
}

impl Scope {
    pub(in crate::models::thermal::solar_collector) fn missing(
        self,
        what: &'static str,
    ) -> NetworkError {
        NetworkError::MissingBoundary {
            mode: self.mode,
            parametrization: self.parametrization,
            what,
        }
    }

    fn inconsistent(self, what: &'static str) -> NetworkError {
        NetworkError::Inconsistent {
            mode: self.mode,
            parametrization: self.parametrization,
            what,
        }
    }

    pub(in crate::models::thermal::solar_collector) fn invalid(
        self,
        attribute: &'static str,
    ) -> impl FnOnce(ConstraintError) -> NetworkError {
        move |source| NetworkError::Constraint {
            mode: self.mode,
            parametrization: self.parametrization,
            attribute,
            source,
        }
    }

    fn required<T: Copy>(self, attr: Attr<T>, what: &'static str) -> Result<T, NetworkError> {
        attr.fixed().ok_or_else(|| self.missing(what))
    }
}

/// Which selector inputs the attributes fix.
pub(super) fn presence(inlet: &Connection, outlet: &Connection, collector: &Collector) -> Presence {
    Presence {
        heat_flow: collector.q_dot.is_fixed(),
        irradiance: collector.irradiance.is_fixed(),
        outlet_temperature: outlet.temperature.is_fixed() || outlet.enthalpy.is_fixed(),
        mass_flow: inlet.m_dot.is_fixed() || outlet.m_dot.is_fixed(),
    }
}

/// Validates the attributes and builds the problem for the selected parametrization.
pub(super) fn resolve<Fluid: Clone>(
    mode: SolveMode,
    fluid: &Fluid,
    thermo: &impl CollectorThermoModel<Fluid>,
    inlet: &Connection,
    outlet: &Connection,
    collector: &Collector,
) -> Result<Problem<Fluid>, NetworkError> {
    let parametrization = Parametrization::select(presence(inlet, outlet, collector))
        .map_err(|source| NetworkError::Parametrization { mode, source })?;
    let scope = Scope {
        mode,
        parametrization,
    };

    let inlet_pressure = scope.required(inlet.pressure, "inlet pressure")?;
    let inlet_pressure = StrictlyPositive::new(inlet_pressure)
        .map_err(scope.invalid("inlet pressure"))?
        .into_inner();

    let inlet_state = port_state(scope, fluid, thermo, inlet, Port::Inlet)?
        .ok_or_else(|| scope.missing("inlet temperature or enthalpy"))?;

    let known = Known {
        inlet: inlet_state,
        inlet_pressure,
        pressure_ratio: UnitIntervalLowerOpen::new(pressure_ratio(
            scope,
            inlet_pressure,
            collector.pr,
            outlet.pressure,
        )?)
        .map_err(scope.invalid("pressure ratio"))?,
    };

    let given = match parametrization {
        Parametrization::HeatDriven { unknown } => {
            let q_dot = heat_flow(scope, collector)?;
            let fixed = match unknown {
                FluidUnknown::OutletTemperature => {
                    FluidSide::MassFlow(mass_flow(scope, inlet, outlet)?)
                }
                FluidUnknown::MassFlow => {
                    FluidSide::OutletTemperature(outlet_temperature(scope, fluid, thermo, outlet)?)
                }
            };
            Given::HeatDriven { q_dot, fixed }
        }

        Parametrization::AbsorptionDriven { anchor } => {
            let irradiance = scope.required(collector.irradiance, "irradiance")?;
            let irradiance = NonNegative::new(irradiance)
                .and_then(|e| Finite::new(e.into_inner()))
                .map_err(scope.invalid("irradiance"))?
                .into_inner();

            let anchor = match anchor {
                AnchorKind::MassFlow => Anchor::MassFlow(mass_flow(scope, inlet, outlet)?),
                AnchorKind::HeatFlow => Anchor::HeatFlow(heat_flow(scope, collector)?),
            };

            Given::AbsorptionDriven {
                irradiance,
                absorber: absorber(scope, collector)?,
                anchor,
            }
        }

        Parametrization::FlowDriven => Given::FlowDriven {
            m_dot: mass_flow(scope, inlet, outlet)?,
            outlet_temperature: outlet_temperature(scope, fluid, thermo, outlet)?,
        },
    };

    Ok(Problem { known, given })
}

#[derive(Debug, Clone, Copy)]
enum Port {
    Inlet,
    Outlet,
}

/// Builds a port state from its fixed temperature or enthalpy.
///
/// Returns `None` if neither is fixed.
fn port_state<Fluid: Clone>(
    scope: Scope,
    fluid: &Fluid,
    thermo: &impl CollectorThermoModel<Fluid>,
    connection: &Connection,
    port: Port,
) -> Result<Option<State<Fluid>>, NetworkError> {
    let (from_temperature, from_enthalpy, inconsistent) = match port {
        Port::Inlet => (
            "inlet state from temperature",
            "inlet state from enthalpy",
            "inlet temperature and enthalpy",
        ),
        Port::Outlet => (
            "outlet state from temperature",
            "outlet state from enthalpy",
            "outlet temperature and enthalpy",
        ),
    };

    match (connection.temperature.fixed(), connection.enthalpy.fixed()) {
        (None, None) => Ok(None),

        (Some(temperature), enthalpy) => {
            let state = thermo
                .state_from((fluid.clone(), temperature))
                .map_err(|err| thermo_failed(from_temperature, err))?;

            if let Some(h_fixed) = enthalpy {
                let h = thermo
                    .enthalpy(&state)
                    .map_err(|err| thermo_failed(from_temperature, err))?;
                if !agree(h.value, h_fixed.value) {
                    return Err(scope.inconsistent(inconsistent));
                }
            }

            Ok(Some(state))
        }

        (None, Some(enthalpy)) => thermo
            .state_from((fluid.clone(), enthalpy))
            .map(Some)
            .map_err(|err| thermo_failed(from_enthalpy, err)),
    }
}

fn outlet_temperature<Fluid: Clone>(
    scope: Scope,
    fluid: &Fluid,
    thermo: &impl CollectorThermoModel<Fluid>,
    outlet: &Connection,
) -> Result<ThermodynamicTemperature, NetworkError> {
    port_state(scope, fluid, thermo, outlet, Port::Outlet)?
        .map(|state| state.temperature)
        .ok_or_else(|| scope.missing("outlet temperature or enthalpy"))
}

/// The fixed heat flow, which may have either sign.
fn heat_flow(scope: Scope, collector: &Collector) -> Result<Power, NetworkError> {
    let q_dot = scope.required(collector.q_dot, "heat flow")?;
    Finite::new(q_dot)
        .map(|q_dot| q_dot.into_inner())
        .map_err(scope.invalid("heat flow"))
}

/// The single mass flow through the source-collector-sink path.
fn mass_flow(scope: Scope, inlet: &Connection, outlet: &Connection) -> Result<MassRate, NetworkError> {
    let m_dot = match (inlet.m_dot.fixed(), outlet.m_dot.fixed()) {
        (Some(a), Some(b)) if !agree(a.value, b.value) => {
            return Err(scope.inconsistent("mass flow between inlet and outlet"));
        }
        (Some(m_dot), _) | (None, Some(m_dot)) => m_dot,
        (None, None) => return Err(scope.missing("mass flow")),
    };

    StrictlyPositive::new(m_dot)
        .map(|m_dot| m_dot.into_inner())
        .map_err(scope.invalid("mass flow"))
}

/// Closes `p_out = pr·p_in` from whichever side is fixed.
fn pressure_ratio(
    scope: Scope,
    inlet_pressure: Pressure,
    pr: Attr<f64>,
    outlet_pressure: Attr<Pressure>,
) -> Result<f64, NetworkError> {
    match (pr.fixed(), outlet_pressure.fixed()) {
        (Some(pr), None) => Ok(pr),
        (None, Some(p_out)) => Ok((p_out / inlet_pressure).get::<ratio>()),
        (Some(pr), Some(p_out)) => {
            if agree((inlet_pressure * pr).value, p_out.value) {
                Ok(pr)
            } else {
                Err(scope.inconsistent("outlet pressure and pressure ratio"))
            }
        }
        (None, None) => Err(scope.missing("pressure ratio or outlet pressure")),
    }
}

fn absorber(scope: Scope, collector: &Collector) -> Result<Absorber, NetworkError> {
    let area = scope.required(collector.area, "absorber area")?;
    let linear = scope.required(collector.lkf_lin, "linear loss coefficient")?;
    let quadratic = scope.required(collector.lkf_quad, "quadratic loss coefficient")?;
    let ambient_temperature = scope.required(collector.t_amb, "ambient temperature")?;

    Ok(Absorber {
        area: StrictlyPositive::new(area)
            .map_err(scope.invalid("absorber area"))?
            .into_inner(),
        loss: LossCoefficients {
            linear: NonNegative::new(linear)
                .map_err(scope.invalid("linear loss coefficient"))?
                .into_inner(),
            quadratic: NonNegative::new(quadratic)
                .map_err(scope.invalid("quadratic loss coefficient"))?
                .into_inner(),
        },
        ambient_temperature: AboveAbsoluteZero::new(ambient_temperature)
            .map_err(scope.invalid("ambient temperature"))?
            .into_inner(),
    })
}

fn thermo_failed(
    context: &'static str,
    err: impl std::error::Error + Send + Sync + 'static,
) -> NetworkError {
    NetworkError::ThermoModelFailed {
        context,
        source: Box::new(err),
    }
}

fn agree(a: f64, b: f64) -> bool {
    (a - b).abs() <= AGREEMENT_TOL * a.abs().max(b.abs()).max(1.0)
}
