//! Iterative solver for the absorption-driven parametrization.
//!
//! With the irradiance fixed, the outlet temperature appears on both sides
//! of the balance (through the enthalpy rise and through the mean collector
//! temperature), so it is found by bisection around the inlet temperature.

mod config;
mod error;
mod problem;

pub use config::IterationConfig;
pub use error::IterationError;

use tracing::trace;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{HeatFluxDensity, MassRate, Power},
    power::watt,
    thermodynamic_temperature::kelvin,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::{thermo::State, units::SpecificEnthalpy};

use super::{Absorber, Anchor, Known, RadiationBalance, SolveError, traits::CollectorThermoModel};

use problem::{OutletModel, OutletProblem};

/// Lowest outlet temperature tried, in kelvin.
const MIN_TEMPERATURE_KELVIN: f64 = 1.0;

/// Outlet values found by the absorption-driven solve.
#[derive(Debug, Clone)]
pub(super) struct Absorbed<Fluid> {
    pub(super) outlet: State<Fluid>,
    pub(super) outlet_enthalpy: SpecificEnthalpy,
    pub(super) m_dot: MassRate,
    pub(super) q_dot: Power,
    pub(super) radiation: RadiationBalance,
}

/// Solves for the outlet temperature that balances absorption, ambient loss,
/// and the fluid-side enthalpy rise.
///
/// # Errors
///
/// Returns [`SolveError`] on thermodynamic model failures, a non-physical
/// derived mass flow, or if the iteration fails to converge.
pub(super) fn absorption_driven<Fluid: Clone>(
    known: &Known<Fluid>,
    inlet_enthalpy: SpecificEnthalpy,
    irradiance: HeatFluxDensity,
    absorber: Absorber,
    anchor: Anchor,
    config: &IterationConfig,
    thermo: &impl CollectorThermoModel<Fluid>,
) -> Result<Absorbed<Fluid>, SolveError> {
    let t_in = known.inlet.temperature.get::<kelvin>();
    let half_width = config.bracket_half_width.get::<delta_kelvin>();
    let bracket = [
        (t_in - half_width).max(MIN_TEMPERATURE_KELVIN),
        t_in + half_width,
    ];

    let model = OutletModel::new(known, irradiance, absorber, thermo);
    let problem = OutletProblem::new(anchor, inlet_enthalpy);

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Property failures happen at the cold end of the bracket, where
            // the fluid side falls short of the useful heat.
            if event.result().is_err() {
                trace!("outlet temperature evaluation failed, assuming negative residual");
                return Some(bisection::Action::assume_negative());
            }
            None
        },
    )
    .map_err(IterationError::from)?;

    if solution.status != bisection::Status::Converged {
        return Err(IterationError::MaxIters {
            residual: Power::new::<watt>(solution.residual),
            iters: solution.iters,
        }
        .into());
    }

    let balance = solution.snapshot.output;
    let dh = balance.outlet_enthalpy - inlet_enthalpy;

    let (m_dot, q_dot) = match anchor {
        Anchor::MassFlow(m_dot) => (m_dot, m_dot * dh),
        Anchor::HeatFlow(q_dot) => {
            let m_dot: MassRate = q_dot / dh;
            if !(m_dot.value.is_finite() && m_dot.value > 0.0) {
                return Err(SolveError::NonPhysicalMassFlow { m_dot, q_dot });
            }
            (m_dot, q_dot)
        }
    };

    Ok(Absorbed {
        outlet: balance.outlet,
        outlet_enthalpy: balance.outlet_enthalpy,
        m_dot,
        q_dot,
        radiation: balance.radiation,
    })
}
