use odestep_core::{
    Action, Error, Event, Observer, OdeFunction, Solution, SolverConfig, State, Stepper, Time,
};

use crate::evaluate::{check_step_size, evaluate, offset};

use super::march::march;

/// Forward Euler, the first-order explicit method.
///
/// ```text
/// y_{n+1} = y_n + h·f(y_n, t_n)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl Stepper for Euler {
    fn name(&self) -> &'static str {
        "Euler"
    }

    fn order(&self) -> u32 {
        1
    }

    fn step<F: OdeFunction>(&self, f: &F, t: Time, y: &[f64], h: f64) -> Result<State, Error> {
        check_step_size(h)?;
        let k1 = evaluate(f, y, t)?;
        Ok(offset(y, h, &[(1.0, &k1)]))
    }

    fn solve_observed<F, Obs>(
        &self,
        f: &F,
        config: &SolverConfig,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: OdeFunction,
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        march(self, 1, f, config, observer)
    }
}
