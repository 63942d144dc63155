use thiserror::Error;

use crate::{State, Time};

/// Default error tolerance for adaptive methods.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default lower bound on the adaptive step size.
pub const DEFAULT_MIN_STEP: f64 = 1e-10;

/// Default upper bound on the adaptive step size.
pub const DEFAULT_MAX_STEP: f64 = 0.1;

/// Upper bound on [`SolverConfig::capacity_hint`].
const MAX_CAPACITY_HINT: usize = 1 << 20;

/// Configuration for one integration run.
///
/// Fixed-step methods use `step_size` for every step (shortening only the last
/// one so the run ends exactly at `time_end`). Adaptive methods treat
/// `step_size` as the initial guess and keep each trial step within
/// `[min_step, max_step]` while holding the estimated error below `tolerance`.
///
/// A config is validated when it is built, so an invalid config never reaches
/// a stepper. `time_end <= time_start` is allowed and produces a solution that
/// holds only the initial step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    time_start: Time,
    time_end: Time,
    step_size: f64,
    initial_state: State,
    tolerance: f64,
    min_step: f64,
    max_step: f64,
}

/// Errors that can occur when validating a [`SolverConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("initial state must have at least one component")]
    EmptyState,

    #[error("time_start and time_end must be finite")]
    Time,

    #[error("step_size must be finite and positive, got {0}")]
    StepSize(f64),

    #[error("tolerance must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("min_step must be finite and positive, got {0}")]
    MinStep(f64),

    #[error("max_step must not be NaN")]
    MaxStep,

    #[error("min_step ({min}) must not exceed max_step ({max})")]
    StepBounds { min: f64, max: f64 },
}

impl SolverConfig {
    /// Creates a config with the default tolerance and step bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial state is empty, either time is not
    /// finite, or `step_size` is not finite and positive.
    pub fn new(
        time_start: Time,
        time_end: Time,
        step_size: f64,
        initial_state: State,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            time_start,
            time_end,
            step_size,
            initial_state,
            tolerance: DEFAULT_TOLERANCE,
            min_step: DEFAULT_MIN_STEP,
            max_step: DEFAULT_MAX_STEP,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns the config with a new error tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self, ConfigError> {
        self.tolerance = tolerance;
        self.validate()?;
        Ok(self)
    }

    /// Returns the config with new adaptive step-size bounds.
    ///
    /// `max_step` may be `f64::INFINITY` to leave the step size unbounded above.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_step` is not finite and positive, `max_step`
    /// is NaN, or `min_step > max_step`.
    pub fn with_step_bounds(mut self, min_step: f64, max_step: f64) -> Result<Self, ConfigError> {
        self.min_step = min_step;
        self.max_step = max_step;
        self.validate()?;
        Ok(self)
    }

    /// Checks every invariant of the config.
    ///
    /// Constructors call this already; it is public so configs obtained some
    /// other way (deserialization, for example) can be checked before use.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_state.is_empty() {
            return Err(ConfigError::EmptyState);
        }
        if !self.time_start.is_finite() || !self.time_end.is_finite() {
            return Err(ConfigError::Time);
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(ConfigError::StepSize(self.step_size));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::Tolerance(self.tolerance));
        }
        if !self.min_step.is_finite() || self.min_step <= 0.0 {
            return Err(ConfigError::MinStep(self.min_step));
        }
        if self.max_step.is_nan() {
            return Err(ConfigError::MaxStep);
        }
        if self.min_step > self.max_step {
            return Err(ConfigError::StepBounds {
                min: self.min_step,
                max: self.max_step,
            });
        }
        Ok(())
    }

    /// Returns the start of the integration interval.
    #[must_use]
    pub fn time_start(&self) -> Time {
        self.time_start
    }

    /// Returns the end of the integration interval.
    #[must_use]
    pub fn time_end(&self) -> Time {
        self.time_end
    }

    /// Returns the fixed step size, or the initial guess for adaptive methods.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the state at `time_start`.
    #[must_use]
    pub fn initial_state(&self) -> &[f64] {
        &self.initial_state
    }

    /// Returns the dimension of the system.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.initial_state.len()
    }

    /// Returns the error tolerance for adaptive methods.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the smallest step an adaptive method may take.
    #[must_use]
    pub fn min_step(&self) -> f64 {
        self.min_step
    }

    /// Returns the largest step an adaptive method may take.
    #[must_use]
    pub fn max_step(&self) -> f64 {
        self.max_step
    }

    /// Estimates how many steps a run will record, including the initial one.
    ///
    /// Used to pre-size the solution history. The estimate is exact for
    /// fixed-step methods when the interval is a multiple of `step_size` and
    /// only a hint for adaptive methods. Long runs are capped so the hint
    /// never reserves more than about a million steps up front.
    #[must_use]
    pub fn capacity_hint(&self) -> usize {
        let span = self.time_end - self.time_start;
        if span <= 0.0 {
            return 1;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (span / self.step_size) as usize;
        steps.saturating_add(1).min(MAX_CAPACITY_HINT)
    }
}
