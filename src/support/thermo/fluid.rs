//! Canonical fluid identifiers.
//!
//! A fluid type names a substance, and each model defines how that name is
//! interpreted through trait implementations (e.g., constants for the
//! [`Incompressible`](super::model::Incompressible) model).

mod water;

pub use water::Water;
