//! Capability traits used to query and construct thermodynamic states.

mod properties;
mod state_from;

pub use properties::HasEnthalpy;
pub use state_from::StateFrom;

/// Base trait for thermodynamic property models.
///
/// Names the fluid type the model operates on; capability traits build on it.
pub trait ThermoModel {
    type Fluid;
}
