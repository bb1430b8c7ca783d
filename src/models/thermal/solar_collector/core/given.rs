use uom::si::f64::{HeatFluxDensity, MassRate, Power, ThermodynamicTemperature};

use super::{Absorber, AnchorKind, FluidUnknown, Parametrization};

/// Fixed values for one collector solve, shaped by its parametrization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Given {
    /// Heat flow and one fluid-side quantity.
    HeatDriven { q_dot: Power, fixed: FluidSide },

    /// Irradiance on a known absorber, pinned by mass flow or heat flow.
    AbsorptionDriven {
        irradiance: HeatFluxDensity,
        absorber: Absorber,
        anchor: Anchor,
    },

    /// Mass flow and outlet temperature.
    FlowDriven {
        m_dot: MassRate,
        outlet_temperature: ThermodynamicTemperature,
    },
}

/// The fluid-side quantity fixed in a heat-driven solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FluidSide {
    MassFlow(MassRate),
    OutletTemperature(ThermodynamicTemperature),
}

/// The quantity fixed alongside the irradiance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    MassFlow(MassRate),
    HeatFlow(Power),
}

impl Given {
    /// Returns the parametrization these values describe.
    #[must_use]
    pub fn parametrization(&self) -> Parametrization {
        match self {
            Self::HeatDriven {
                fixed: FluidSide::MassFlow(_),
                ..
            } => Parametrization::HeatDriven {
                unknown: FluidUnknown::OutletTemperature,
            },
            Self::HeatDriven {
                fixed: FluidSide::OutletTemperature(_),
                ..
            } => Parametrization::HeatDriven {
                unknown: FluidUnknown::MassFlow,
            },
            Self::AbsorptionDriven { anchor, .. } => Parametrization::AbsorptionDriven {
                anchor: match anchor {
                    Anchor::MassFlow(_) => AnchorKind::MassFlow,
                    Anchor::HeatFlow(_) => AnchorKind::HeatFlow,
                },
            },
            Self::FlowDriven { .. } => Parametrization::FlowDriven,
        }
    }
}
