//! Error types for building and stepping a bell simulation.

use thiserror::Error;

/// Errors raised while validating a scenario or advancing the physics.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A constant or parameter failed validation at construction.
    #[error("invalid configuration: {field} = {value} ({reason})")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },

    /// The state became non-finite after a frame.
    #[error("simulation diverged at t = {time}: angle = {angle}, velocity = {velocity}")]
    Diverged {
        time: f64,
        angle: f64,
        velocity: f64,
    },
}

/// Fails with [`SimError::InvalidConfig`] unless `value` is finite and strictly positive
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig { field, value, reason: "must be finite and > 0" })
    }
}

/// Fails unless `value` lies in the open interval (0, π)
pub(crate) fn require_angle(field: &'static str, value: f64) -> Result<(), SimError> {
    if value > 0.0 && value < std::f64::consts::PI {
        Ok(())
    } else {
        Err(SimError::InvalidConfig { field, value, reason: "must lie in (0, pi)" })
    }
}

/// Fails unless `value` is finite
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidConfig { field, value, reason: "must be finite" })
    }
}
