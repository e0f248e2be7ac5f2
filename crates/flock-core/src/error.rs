//! Framework error type.
//!
//! The kernel itself never fails: degenerate parameters propagate as
//! NaN/Inf.  These errors come from the driver side, which validates
//! parameters before a tick is dispatched.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `flock-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FlockError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParam {
        name:   &'static str,
        value:  f32,
        reason: &'static str,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `flock-*` crates.
pub type FlockResult<T> = Result<T, FlockError>;
