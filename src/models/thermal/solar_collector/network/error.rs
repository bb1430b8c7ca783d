use std::{fmt, path::PathBuf};

use thiserror::Error;

use crate::{
    models::thermal::solar_collector::core::{Parametrization, ParametrizationError, SolveError},
    support::constraint::ConstraintError,
};

/// Network solver mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMode {
    /// Sizing solve from a fully specified operating point.
    Design,

    /// Operating solve against a design reference.
    Offdesign,
}

impl fmt::Display for SolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Design => f.write_str("design"),
            Self::Offdesign => f.write_str("offdesign"),
        }
    }
}

/// Errors that can occur while solving a collector network.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The attribute set does not resolve to a single parametrization.
    #[error("{mode} solve is ill-posed: {source}")]
    Parametrization {
        mode: SolveMode,
        #[source]
        source: ParametrizationError,
    },

    /// A value the active parametrization needs is free.
    #[error("{mode} solve ({parametrization}) is missing {what}")]
    MissingBoundary {
        mode: SolveMode,
        parametrization: Parametrization,
        what: &'static str,
    },

    /// Two fixed attributes contradict each other.
    #[error("{mode} solve ({parametrization}) has an inconsistent {what}")]
    Inconsistent {
        mode: SolveMode,
        parametrization: Parametrization,
        what: &'static str,
    },

    /// A fixed attribute is outside its physical range.
    #[error("{mode} solve ({parametrization}) has an invalid {attribute}")]
    Constraint {
        mode: SolveMode,
        parametrization: Parametrization,
        attribute: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A thermodynamic model failed while resolving boundary states.
    #[error("thermodynamic model failed while resolving {context}")]
    ThermoModelFailed {
        context: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The collector energy balance could not be solved.
    #[error("{mode} solve failed ({parametrization})")]
    Solve {
        mode: SolveMode,
        parametrization: Parametrization,
        #[source]
        source: SolveError,
    },

    /// No successful design solve is available.
    #[error("no design solution available; run a design solve first")]
    NotDesigned,
}

/// Errors from saving or loading a [`DesignSnapshot`](super::DesignSnapshot).
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored value is not physically meaningful.
    #[error("invalid snapshot field `{field}` in {}", path.display())]
    Invalid { field: &'static str, path: PathBuf },
}
