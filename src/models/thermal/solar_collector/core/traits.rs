//! Internal traits for collector solving.

use uom::si::f64::ThermodynamicTemperature;

use crate::support::{
    thermo::capability::{HasEnthalpy, StateFrom, ThermoModel},
    units::SpecificEnthalpy,
};

/// Required thermo model bounds for the collector energy balance.
///
/// The collector neglects the pressure dependence of liquid properties, so
/// states are built from temperature or enthalpy alone.
pub trait CollectorThermoModel<Fluid>:
    ThermoModel<Fluid = Fluid>
    + HasEnthalpy
    + StateFrom<(Fluid, ThermodynamicTemperature)>
    + StateFrom<(Fluid, SpecificEnthalpy)>
{
}

impl<Fluid, T> CollectorThermoModel<Fluid> for T where
    T: ThermoModel<Fluid = Fluid>
        + HasEnthalpy
        + StateFrom<(Fluid, ThermodynamicTemperature)>
        + StateFrom<(Fluid, SpecificEnthalpy)>
{
}
