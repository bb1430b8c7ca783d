use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The determinate ways of specifying a collector operating point.
///
/// Every variant fixes enough of the heat flow, irradiance, outlet
/// temperature and mass flow to close the energy balance, and names what the
/// solve must find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Parametrization {
    /// Heat flow fixed, no radiation balance.
    ///
    /// The fluid-side balance yields the `unknown`.
    HeatDriven { unknown: FluidUnknown },

    /// Irradiance fixed, outlet temperature free.
    ///
    /// The radiation balance and the fluid-side balance are solved together
    /// for the outlet temperature, pinned by the `anchor`.
    AbsorptionDriven { anchor: AnchorKind },

    /// Outlet temperature and mass flow fixed.
    ///
    /// The heat flow follows from the fluid side and the irradiance is left
    /// undetermined.
    FlowDriven,
}

/// The fluid-side quantity a heat-driven solve finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluidUnknown {
    OutletTemperature,
    MassFlow,
}

/// The quantity fixed alongside the irradiance in an absorption-driven solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    /// Mass flow fixed; heat flow and outlet temperature are found.
    MassFlow,

    /// Heat flow fixed; outlet temperature and mass flow are found.
    HeatFlow,
}

/// Which of the selector inputs are currently fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presence {
    pub heat_flow: bool,
    pub irradiance: bool,
    pub outlet_temperature: bool,
    pub mass_flow: bool,
}

/// Reasons an attribute set does not resolve to one parametrization.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParametrizationError {
    /// Too few quantities are fixed.
    #[error("underdetermined: {hint}")]
    Underdetermined { hint: &'static str },

    /// Too many quantities are fixed.
    #[error("overdetermined: {hint}")]
    Overdetermined { hint: &'static str },

    /// Irradiance and outlet temperature are fixed together.
    #[error("irradiance cannot be fixed together with the outlet temperature; free one of them")]
    IrradianceWithOutletTemperature,
}

impl Parametrization {
    /// Classifies the active parametrization from the fixed quantities.
    ///
    /// # Errors
    ///
    /// Returns a [`ParametrizationError`] describing why the combination is
    /// not determinate.
    pub fn select(presence: Presence) -> Result<Self, ParametrizationError> {
        let Presence {
            heat_flow,
            irradiance,
            outlet_temperature,
            mass_flow,
        } = presence;

        if irradiance {
            if outlet_temperature {
                return Err(ParametrizationError::IrradianceWithOutletTemperature);
            }
            return match (heat_flow, mass_flow) {
                (false, true) => Ok(Self::AbsorptionDriven {
                    anchor: AnchorKind::MassFlow,
                }),
                (true, false) => Ok(Self::AbsorptionDriven {
                    anchor: AnchorKind::HeatFlow,
                }),
                (true, true) => Err(ParametrizationError::Overdetermined {
                    hint: "with irradiance fixed, fix either the heat flow or the mass flow, not both",
                }),
                (false, false) => Err(ParametrizationError::Underdetermined {
                    hint: "with irradiance fixed, also fix the heat flow or the mass flow",
                }),
            };
        }

        match (heat_flow, outlet_temperature, mass_flow) {
            (true, false, true) => Ok(Self::HeatDriven {
                unknown: FluidUnknown::OutletTemperature,
            }),
            (true, true, false) => Ok(Self::HeatDriven {
                unknown: FluidUnknown::MassFlow,
            }),
            (true, true, true) => Err(ParametrizationError::Overdetermined {
                hint: "heat flow, outlet temperature and mass flow are all fixed; free one",
            }),
            (true, false, false) => Err(ParametrizationError::Underdetermined {
                hint: "with the heat flow fixed, also fix the outlet temperature or the mass flow",
            }),
            (false, true, true) => Ok(Self::FlowDriven),
            (false, _, _) => Err(ParametrizationError::Underdetermined {
                hint: "fix the heat flow, the irradiance, or both the outlet temperature and the mass flow",
            }),
        }
    }
}

impl fmt::Display for Parametrization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeatDriven {
                unknown: FluidUnknown::OutletTemperature,
            } => f.write_str("heat-driven (solving outlet temperature)"),
            Self::HeatDriven {
                unknown: FluidUnknown::MassFlow,
            } => f.write_str("heat-driven (solving mass flow)"),
            Self::AbsorptionDriven {
                anchor: AnchorKind::MassFlow,
            } => f.write_str("absorption-driven (fixed mass flow)"),
            Self::AbsorptionDriven {
                anchor: AnchorKind::HeatFlow,
            } => f.write_str("absorption-driven (fixed heat flow)"),
            Self::FlowDriven => f.write_str("flow-driven"),
        }
    }
}
