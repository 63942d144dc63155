use std::error::Error as StdError;

use thiserror::Error;

use crate::{ConfigError, Time};

/// Errors that can occur while stepping or solving.
///
/// Step rejection by an adaptive method is not an error: it is routine
/// accuracy control and never reaches the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("ode function returned {actual} components at t = {time}, expected {expected}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        time: Time,
    },

    #[error("step size must be finite and non-zero, got {0}")]
    InvalidStepSize(f64),

    #[error("ode function error: {0}")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    /// Boxes an error raised by the ODE function.
    pub fn function<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Function(Box::new(err))
    }
}
