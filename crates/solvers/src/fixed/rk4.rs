use odestep_core::{
    Action, Error, Event, Observer, OdeFunction, Solution, SolverConfig, State, Stepper, Time,
};

use crate::evaluate::{check_step_size, evaluate, offset};

use super::march::march;

/// The classical fourth-order Runge-Kutta method.
///
/// ```text
/// k₁ = f(y_n, t_n)
/// k₂ = f(y_n + h/2·k₁, t_n + h/2)
/// k₃ = f(y_n + h/2·k₂, t_n + h/2)
/// k₄ = f(y_n + h·k₃, t_n + h)
/// y_{n+1} = y_n + h/6·(k₁ + 2k₂ + 2k₃ + k₄)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl Stepper for Rk4 {
    fn name(&self) -> &'static str {
        "RK4"
    }

    fn order(&self) -> u32 {
        4
    }

    fn step<F: OdeFunction>(&self, f: &F, t: Time, y: &[f64], h: f64) -> Result<State, Error> {
        check_step_size(h)?;

        let half = h / 2.0;
        let k1 = evaluate(f, y, t)?;
        let k2 = evaluate(f, &offset(y, half, &[(1.0, &k1)]), t + half)?;
        let k3 = evaluate(f, &offset(y, half, &[(1.0, &k2)]), t + half)?;
        let k4 = evaluate(f, &offset(y, h, &[(1.0, &k3)]), t + h)?;

        Ok(offset(
            y,
            h / 6.0,
            &[(1.0, &k1), (2.0, &k2), (2.0, &k3), (1.0, &k4)],
        ))
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
        march(self, 4, f, config, observer)
    }
}
