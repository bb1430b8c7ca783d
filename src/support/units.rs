//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, pressure, power).
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait subtracts one absolute temperature from
//! another to get a temperature interval, and averages two absolute temperatures:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use twine_collector::support::units::TemperatureDifference;
//!
//! let t_in = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let t_out = ThermodynamicTemperature::new::<degree_celsius>(120.0);
//!
//! let mean = t_in.midpoint(t_out);
//! assert!((mean.get::<degree_celsius>() - 70.0).abs() < 1e-12);
//! ```
//!
//! ## Quadratic loss coefficients
//!
//! Collector loss curves use a second-order coefficient in W/(m²·K²), which has
//! no named quantity in [`uom`]. See [`QuadraticLossCoefficient`].

mod quantities;
mod temperature_difference;

pub use quantities::{QuadraticLossCoefficient, SpecificEnthalpy, quadratic_loss_coefficient};
pub use temperature_difference::TemperatureDifference;
