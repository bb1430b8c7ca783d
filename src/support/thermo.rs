//! Thermodynamic states and property models.
//!
//! Models expose what they can compute through capability traits (see
//! [`capability`]), so a component states exactly which properties it needs
//! and any model providing them can be plugged in.

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;
