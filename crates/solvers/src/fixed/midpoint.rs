use odestep_core::{
    Action, Error, Event, Observer, OdeFunction, Solution, SolverConfig, State, Stepper, Time,
};

use crate::evaluate::{check_step_size, evaluate, offset};

use super::march::march;

/// The explicit midpoint method, a second-order Runge-Kutta method.
///
/// ```text
/// k₁ = f(y_n, t_n)
/// k₂ = f(y_n + h/2·k₁, t_n + h/2)
/// y_{n+1} = y_n + h·k₂
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Midpoint;

impl Stepper for Midpoint {
    fn name(&self) -> &'static str {
        "RK2 (midpoint)"
    }

    fn order(&self) -> u32 {
        2
    }

    fn step<F: OdeFunction>(&self, f: &F, t: Time, y: &[f64], h: f64) -> Result<State, Error> {
        check_step_size(h)?;

        let k1 = evaluate(f, y, t)?;
        let k2 = evaluate(f, &offset(y, 0.5 * h, &[(1.0, &k1)]), t + 0.5 * h)?;

        Ok(offset(y, h, &[(1.0, &k2)]))
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
        march(self, 2, f, config, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn integrates_linear_time_exactly() {
        // dy/dt = t is integrated exactly by any second-order method.
        let f = |_y: &[f64], t: f64| vec![t];
        let config = SolverConfig::new(0.0, 2.0, 0.25, vec![0.0]).expect("valid config");

        let solution = Midpoint.solve(&f, &config).expect("should solve");

        assert_relative_eq!(solution.last().state[0], 2.0, epsilon = 1e-12);
        assert_eq!(solution.stats.evaluations, 16);
    }

    #[test]
    fn single_step_matches_hand_computation() {
        // k1 = -1, midpoint y = 0.95, k2 = -0.95, y1 = 1 - 0.095.
        let f = |y: &[f64], _t: f64| vec![-y[0]];

        let next = Midpoint.step(&f, 0.0, &[1.0], 0.1).expect("step");

        assert_relative_eq!(next[0], 0.905, epsilon = 1e-15);
    }

    #[test]
    fn reports_name_and_order() {
        assert_eq!(Midpoint.name(), "RK2 (midpoint)");
        assert_eq!(Midpoint.order(), 2);
    }
}
