//! # Twine Collector
//!
//! Steady-state solar thermal collector modeling for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! A single collector sits between a fluid source and a sink. Its energy
//! balance can be closed three ways (heat-driven, absorption-driven, or
//! flow-driven), and a design solution can be reused as the reference for
//! offdesign sweeps over irradiance and ambient temperature.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific models, including the solar collector, its
//!   source-collector-sink network, and the offdesign efficiency sweep.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//! Model-specific utility code stays in the model's internal `core` module
//! until a second model needs it.

pub mod models;
pub mod support;
