//! Thermodynamic property models.

pub mod incompressible;

pub use incompressible::Incompressible;
