use crate::{Action, Error, Event, Observer, OdeFunction, Solution, SolverConfig, State, Time};

/// The interface shared by every integration method.
///
/// Fixed-step and adaptive methods both implement `Stepper`; callers that
/// only need a trajectory depend on this trait rather than a concrete method.
pub trait Stepper {
    /// Returns a human-readable name for the method.
    fn name(&self) -> &'static str;

    /// Returns the order of accuracy of the state the method advances with.
    fn order(&self) -> u32;

    /// Advances `y` from `t` by a single step of size `h`.
    ///
    /// This is stateless and performs no error control, even for adaptive
    /// methods.
    ///
    /// # Errors
    ///
    /// Returns an error if `h` is zero or not finite, if the ODE function
    /// fails, or if it returns a derivative of the wrong dimension.
    fn step<F: OdeFunction>(&self, f: &F, t: Time, y: &[f64], h: f64) -> Result<State, Error>;

    /// Integrates from `time_start` to `time_end`, reporting to an observer.
    ///
    /// The observer receives an [`Event`] for the initial step, every
    /// accepted step, and every rejected adaptive trial. Returning
    /// [`Action::StopEarly`] ends the run with the steps accepted so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid, the ODE function fails, or
    /// it returns a derivative whose dimension differs from the initial state.
    fn solve_observed<F, Obs>(
        &self,
        f: &F,
        config: &SolverConfig,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: OdeFunction,
        Obs: for<'a> Observer<Event<'a>, Action>;

    /// Integrates from `time_start` to `time_end`.
    ///
    /// This is a convenience wrapper around [`Stepper::solve_observed`] that
    /// uses a no-op observer.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid, the ODE function fails, or
    /// it returns a derivative whose dimension differs from the initial state.
    fn solve<F: OdeFunction>(&self, f: &F, config: &SolverConfig) -> Result<Solution, Error> {
        self.solve_observed(f, config, ())
    }
}
