//! Radiation-side energy balance.

use uom::{
    ConstZero,
    si::{
        f64::{Area, HeatFluxDensity, HeatTransfer, Power, ThermodynamicTemperature},
        ratio::ratio,
    },
};

use crate::support::units::{QuadraticLossCoefficient, TemperatureDifference};

/// Coefficients of the collector's ambient loss curve.
///
/// Loss per unit area is `k₁·ΔT + k₂·ΔT²`, where `ΔT` is the mean collector
/// temperature minus the ambient temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossCoefficients {
    /// Linear coefficient `k₁`.
    pub linear: HeatTransfer,

    /// Quadratic coefficient `k₂`.
    pub quadratic: QuadraticLossCoefficient,
}

/// Absorber geometry, loss curve, and surroundings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Absorber {
    pub area: Area,
    pub loss: LossCoefficients,
    pub ambient_temperature: ThermodynamicTemperature,
}

impl Absorber {
    /// Evaluates the radiation balance for the given irradiance and fluid temperatures.
    #[must_use]
    pub fn balance(
        &self,
        irradiance: HeatFluxDensity,
        inlet_temperature: ThermodynamicTemperature,
        outlet_temperature: ThermodynamicTemperature,
    ) -> RadiationBalance {
        let mean_temperature = inlet_temperature.midpoint(outlet_temperature);
        let delta_t = mean_temperature.minus(self.ambient_temperature);

        let loss_flux: HeatFluxDensity =
            self.loss.linear * delta_t + self.loss.quadratic * delta_t * delta_t;

        RadiationBalance {
            mean_temperature,
            absorbed: irradiance * self.area,
            ambient_loss: loss_flux * self.area,
        }
    }
}

/// Absorbed and lost power at one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiationBalance {
    /// Mean of the inlet and outlet fluid temperatures.
    pub mean_temperature: ThermodynamicTemperature,

    /// Incident power on the absorber, `E·A`.
    pub absorbed: Power,

    /// Power lost to the surroundings.
    ///
    /// Negative when the ambient is warmer than the collector.
    pub ambient_loss: Power,
}

impl RadiationBalance {
    /// Useful heat delivered to the fluid, `E·A − loss`.
    #[must_use]
    pub fn useful_heat(&self) -> Power {
        self.absorbed - self.ambient_loss
    }
}

/// Thermal efficiency `Q / (E·A)`, excluding optical losses.
///
/// Returns `None` when no power is absorbed, since the ratio is undefined.
/// Negative values are returned as-is; net heat loss is the caller's call.
#[must_use]
pub fn efficiency(q_dot: Power, absorbed: Power) -> Option<f64> {
    if absorbed > Power::ZERO {
        Some((q_dot / absorbed).get::<ratio>())
    } else {
        None
    }
}
