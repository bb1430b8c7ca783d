//! Resolved collector operating point.

use std::fmt;

use uom::si::{
    f64::{HeatFluxDensity, MassRate, Power, Pressure},
    heat_flux_density::watt_per_square_meter,
    mass_rate::kilogram_per_second,
    power::watt,
    pressure::bar,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{thermo::State, units::SpecificEnthalpy};

use super::{Parametrization, RadiationBalance, efficiency};

/// Fully resolved collector and connection values after a solve.
#[derive(Debug, Clone)]
pub struct Results<Fluid> {
    /// Parametrization the values were solved under.
    pub parametrization: Parametrization,

    pub inlet: State<Fluid>,
    pub outlet: State<Fluid>,
    pub inlet_enthalpy: SpecificEnthalpy,
    pub outlet_enthalpy: SpecificEnthalpy,
    pub inlet_pressure: Pressure,
    pub outlet_pressure: Pressure,

    /// Outlet-to-inlet pressure ratio.
    pub pressure_ratio: f64,

    pub m_dot: MassRate,

    /// Heat flow into the fluid.
    pub q_dot: Power,

    /// Irradiance, when it took part in the solve.
    pub irradiance: Option<HeatFluxDensity>,

    /// Radiation balance, when it took part in the solve.
    pub radiation: Option<RadiationBalance>,
}

impl<Fluid> Results<Fluid> {
    /// Thermal efficiency `Q / (E·A)`.
    ///
    /// Returns `None` unless the radiation balance was solved with positive
    /// absorbed power.
    #[must_use]
    pub fn efficiency(&self) -> Option<f64> {
        self.radiation
            .and_then(|radiation| efficiency(self.q_dot, radiation.absorbed))
    }
}

impl<Fluid> fmt::Display for Results<Fluid> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "solar collector: {}", self.parametrization)?;
        writeln!(f, "  {:<10} {:>12} {:>12} {:>14}", "", "p [bar]", "T [°C]", "m [kg/s]")?;
        writeln!(
            f,
            "  {:<10} {:>12.4} {:>12.3} {:>14.6}",
            "inlet",
            self.inlet_pressure.get::<bar>(),
            self.inlet.temperature.get::<degree_celsius>(),
            self.m_dot.get::<kilogram_per_second>(),
        )?;
        writeln!(
            f,
            "  {:<10} {:>12.4} {:>12.3} {:>14.6}",
            "outlet",
            self.outlet_pressure.get::<bar>(),
            self.outlet.temperature.get::<degree_celsius>(),
            self.m_dot.get::<kilogram_per_second>(),
        )?;
        writeln!(f, "  pr = {:.4}", self.pressure_ratio)?;
        writeln!(f, "  Q  = {:.2} W", self.q_dot.get::<watt>())?;

        match (self.irradiance, self.radiation) {
            (Some(irradiance), Some(radiation)) => {
                writeln!(f, "  E  = {:.2} W/m²", irradiance.get::<watt_per_square_meter>())?;
                writeln!(
                    f,
                    "  absorbed = {:.2} W, ambient loss = {:.2} W",
                    radiation.absorbed.get::<watt>(),
                    radiation.ambient_loss.get::<watt>(),
                )?;
                match self.efficiency() {
                    Some(eta) => writeln!(f, "  eta = {eta:.4}"),
                    None => writeln!(f, "  eta = undefined"),
                }
            }
            _ => writeln!(f, "  E  = not determined"),
        }
    }
}
