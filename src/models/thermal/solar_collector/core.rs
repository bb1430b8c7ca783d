//! Steady-state energy balance of a single solar thermal collector.
//!
//! The collector sits between a fluid source and a sink. Two relations close
//! its balance:
//!
//! - the fluid side, `Q = ṁ·(h_out − h_in)`, always holds;
//! - the radiation side, `Q = A·(E − k₁·ΔT − k₂·ΔT²)` with
//!   `ΔT = (T_in + T_out)/2 − T_amb`, holds only when the irradiance `E` is known.
//!
//! Which quantities are fixed decides the [`Parametrization`], and a
//! [`Given`] carries the fixed values for one solve.

mod absorption;
mod attr;
mod balance;
mod given;
mod parametrization;
mod results;
mod solve;
mod traits;

#[cfg(test)]
mod test_support;

pub use absorption::{IterationConfig, IterationError};
pub use attr::Attr;
pub use balance::{Absorber, LossCoefficients, RadiationBalance, efficiency};
pub use given::{Anchor, FluidSide, Given};
pub use parametrization::{
    AnchorKind, FluidUnknown, Parametrization, ParametrizationError, Presence,
};
pub use results::Results;
pub use solve::SolveError;
pub use traits::CollectorThermoModel;

use uom::si::f64::Pressure;

use crate::support::{
    constraint::{Constrained, UnitIntervalLowerOpen},
    thermo::State,
};

/// Boundary values that hold in every parametrization.
#[derive(Debug, Clone)]
pub struct Known<Fluid> {
    /// Inlet state supplied by the source.
    pub inlet: State<Fluid>,

    /// Inlet pressure.
    pub inlet_pressure: Pressure,

    /// Outlet-to-inlet pressure ratio.
    pub pressure_ratio: Constrained<f64, UnitIntervalLowerOpen>,
}

/// Solves the collector energy balance for one parametrization.
///
/// # Errors
///
/// Returns a [`SolveError`] on thermodynamic model failures, non-physical
/// derived values, or if the outlet temperature iteration fails.
pub fn solve<Fluid: Clone>(
    known: &Known<Fluid>,
    given: &Given,
    config: &IterationConfig,
    thermo: &impl CollectorThermoModel<Fluid>,
) -> Result<Results<Fluid>, SolveError> {
    solve::solve(known, given, config, thermo)
}
