use thiserror::Error;
use uom::si::f64::{MassRate, Power};

use crate::{
    models::thermal::solar_collector::core::IterationError,
    support::constraint::ConstraintError,
};

/// Errors that can occur while solving the collector energy balance.
#[derive(Debug, Error)]
pub enum SolveError {
    /// A thermodynamic model operation failed.
    ///
    /// This failure can be from property evaluation or state construction.
    #[error("thermodynamic model failed: {context}")]
    ThermoModelFailed {
        /// Operation context for the thermodynamic model failure.
        context: String,

        /// Underlying thermodynamic model error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An operating condition is outside its physical range.
    #[error("invalid {attribute}")]
    Constraint {
        attribute: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The derived mass flow is not positive and finite.
    ///
    /// Happens when the heat flow and the enthalpy rise disagree in sign,
    /// or the enthalpy rise vanishes.
    #[error("non-physical mass flow: m_dot={m_dot:?} for q_dot={q_dot:?}")]
    NonPhysicalMassFlow { m_dot: MassRate, q_dot: Power },

    /// The outlet temperature iteration failed.
    #[error("outlet temperature iteration failed")]
    Iteration(#[from] IterationError),
}

impl SolveError {
    /// Creates a thermo model failure error with context.
    pub(in crate::models::thermal::solar_collector::core) fn thermo_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ThermoModelFailed {
            context: context.into(),
            source: Box::new(err),
        }
    }
}
