use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Power;

/// Errors from the absorption-driven outlet temperature iteration.
#[derive(Debug, Error)]
pub enum IterationError {
    /// The bisection solver encountered an error.
    ///
    /// Includes brackets without a sign change, which means no outlet
    /// temperature within the search range balances the collector.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best heat flow residual achieved.
        residual: Power,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
