use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

/// Solver configuration for the absorption-driven outlet temperature iteration.
#[derive(Debug, Clone, Copy)]
pub struct IterationConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the outlet temperature search variable.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance for the heat flow residual.
    pub heat_tol: Power,

    /// Half-width of the outlet temperature bracket around the inlet temperature.
    ///
    /// The lower end is additionally held above absolute zero.
    pub bracket_half_width: TemperatureInterval,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            heat_tol: Power::new::<watt>(1e-6),
            bracket_half_width: TemperatureInterval::new::<delta_kelvin>(400.0),
        }
    }
}

impl IterationConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.heat_tol.get::<watt>(),
        }
    }
}
