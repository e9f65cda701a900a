//! Framework error type.
//!
//! No I/O happens inside the models, so every error here is a construction
//! error: the caller asked for something that cannot be simulated.  Numeric
//! degeneracy during a tick (a zero-length velocity that must be rescaled)
//! is recovered in place and never surfaces as an error.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `abm-core` and the model crates.
#[derive(Debug, Error)]
pub enum AbmError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("agent {0} appears more than once in the initial population")]
    DuplicateAgent(AgentId),

    #[error("population must contain at least one agent")]
    EmptyPopulation,
}

/// Shorthand result type for all `abm-*` crates.
pub type AbmResult<T> = Result<T, AbmError>;

/// Fail with `InvalidConfiguration` unless `value` is finite and `>= 0`.
///
/// Shared by the model parameter validators.
pub fn ensure_non_negative(name: &str, value: f64) -> AbmResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AbmError::InvalidConfiguration(format!(
            "{name} must be a non-negative finite number, got {value}"
        )));
    }
    Ok(())
}
