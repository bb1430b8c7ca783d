use thiserror::Error;
use uom::si::{
    f64::{HeatFluxDensity, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    thermodynamic_temperature::degree_celsius,
};

use crate::models::thermal::solar_collector::network::NetworkError;

/// Reasons a [`SweepGrid`](super::SweepGrid) axis is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("{axis} axis is empty")]
    Empty { axis: &'static str },

    #[error("{axis} axis value {index} is not finite")]
    NotFinite { axis: &'static str, index: usize },

    #[error("{axis} axis is not strictly ascending at value {index}")]
    NotAscending { axis: &'static str, index: usize },

    #[error("irradiance levels must be positive")]
    NonPositiveIrradiance,

    #[error("ambient temperatures must be above absolute zero")]
    BelowAbsoluteZero,
}

/// A grid point failed and aborted the sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error(
        "sweep aborted at E = {} W/m², Tamb = {} °C",
        irradiance.get::<watt_per_square_meter>(),
        ambient_temperature.get::<degree_celsius>()
    )]
    Point {
        irradiance: HeatFluxDensity,
        ambient_temperature: ThermodynamicTemperature,
        #[source]
        source: NetworkError,
    },
}
