//! Thermal systems models.
//!
//! This module contains models for solar thermal collectors and the
//! tooling used to evaluate them over ranges of operating conditions.

pub mod solar_collector;
