use uom::si::f64::{
    Area, HeatFluxDensity, HeatTransfer, MassRate, Power, Pressure, ThermodynamicTemperature,
};

use crate::{
    models::thermal::solar_collector::core::Attr,
    support::units::{QuadraticLossCoefficient, SpecificEnthalpy},
};

/// Fluid attributes on a link between two ports.
///
/// Temperature and enthalpy describe the same property for the liquid; fixing
/// both is allowed only if they agree.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Connection {
    pub pressure: Attr<Pressure>,
    pub temperature: Attr<ThermodynamicTemperature>,
    pub enthalpy: Attr<SpecificEnthalpy>,
    pub m_dot: Attr<MassRate>,
}

/// Collector attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Collector {
    /// Outlet-to-inlet pressure ratio.
    pub pr: Attr<f64>,

    /// Heat flow into the fluid.
    pub q_dot: Attr<Power>,

    /// Linear loss coefficient.
    pub lkf_lin: Attr<HeatTransfer>,

    /// Quadratic loss coefficient.
    pub lkf_quad: Attr<QuadraticLossCoefficient>,

    /// Absorber area.
    pub area: Attr<Area>,

    /// Ambient temperature.
    pub t_amb: Attr<ThermodynamicTemperature>,

    /// Irradiance on the absorber.
    pub irradiance: Attr<HeatFluxDensity>,
}
