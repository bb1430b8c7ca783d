use thiserror::Error;

/// Errors from evaluating liquid properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// A temperature or enthalpy maps to a state at or below absolute zero.
    #[error("temperature {temperature_k} K is not above absolute zero")]
    BelowAbsoluteZero { temperature_k: f64 },
}
