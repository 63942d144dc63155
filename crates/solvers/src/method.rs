use std::{fmt, str::FromStr};

use odestep_core::{
    Action, Error, Event, Observer, OdeFunction, Solution, SolverConfig, State, Stepper, Time,
};

use crate::{Euler, Midpoint, Rk4, Rkf45};

/// Any of the available integration methods, chosen at runtime.
///
/// `Method` implements [`Stepper`] by forwarding to the concrete method, so
/// it can be used anywhere a stepper is expected. It parses from the names a
/// command line or config file would use:
///
/// ```
/// use odestep_core::Stepper;
/// use odestep_solvers::Method;
///
/// let method: Method = "rk45".parse()?;
/// assert_eq!(method, Method::Rkf45);
/// assert_eq!(method.name(), "RKF45");
/// # Ok::<(), odestep_solvers::ParseMethodError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// See [`Euler`].
    Euler,
    /// See [`Midpoint`].
    Midpoint,
    /// See [`Rk4`].
    Rk4,
    /// See [`Rkf45`].
    Rkf45,
}

impl Method {
    /// Every method, from lowest to highest order.
    pub const ALL: [Method; 4] = [Method::Euler, Method::Midpoint, Method::Rk4, Method::Rkf45];

    /// Returns `true` for methods that control their own step size.
    #[must_use]
    pub fn is_adaptive(self) -> bool {
        matches!(self, Method::Rkf45)
    }
}

impl Stepper for Method {
    fn name(&self) -> &'static str {
        match self {
            Method::Euler => Euler.name(),
            Method::Midpoint => Midpoint.name(),
            Method::Rk4 => Rk4.name(),
            Method::Rkf45 => Rkf45.name(),
        }
    }

    fn order(&self) -> u32 {
        match self {
            Method::Euler => Euler.order(),
            Method::Midpoint => Midpoint.order(),
            Method::Rk4 => Rk4.order(),
            Method::Rkf45 => Rkf45.order(),
        }
    }

    fn step<F: OdeFunction>(&self, f: &F, t: Time, y: &[f64], h: f64) -> Result<State, Error> {
        match self {
            Method::Euler => Euler.step(f, t, y, h),
            Method::Midpoint => Midpoint.step(f, t, y, h),
            Method::Rk4 => Rk4.step(f, t, y, h),
            Method::Rkf45 => Rkf45.step(f, t, y, h),
        }
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
        match self {
            Method::Euler => Euler.solve_observed(f, config, observer),
            Method::Midpoint => Midpoint.solve_observed(f, config, observer),
            Method::Rk4 => Rk4.solve_observed(f, config, observer),
            Method::Rkf45 => Rkf45.solve_observed(f, config, observer),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known method.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("unknown method `{0}` (expected euler, rk2, midpoint, rk4, rk45, or rkf45)")]
pub struct ParseMethodError(String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "rk2" | "midpoint" => Ok(Method::Midpoint),
            "rk4" => Ok(Method::Rk4),
            "rk45" | "rkf45" => Ok(Method::Rkf45),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn parses_known_names_in_any_case() {
        assert_eq!("euler".parse(), Ok(Method::Euler));
        assert_eq!("RK2".parse(), Ok(Method::Midpoint));
        assert_eq!("Midpoint".parse(), Ok(Method::Midpoint));
        assert_eq!(" rk4 ".parse(), Ok(Method::Rk4));
        assert_eq!("RKF45".parse(), Ok(Method::Rkf45));
        assert_eq!("rk45".parse(), Ok(Method::Rkf45));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "dopri5".parse::<Method>().unwrap_err();
        assert_eq!(err, ParseMethodError("dopri5".into()));
        assert!(err.to_string().contains("`dopri5`"));
    }

    #[test]
    fn display_uses_method_name() {
        let names: Vec<_> = Method::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["Euler", "RK2 (midpoint)", "RK4", "RKF45"]);
    }

    #[test]
    fn forwards_to_concrete_methods() {
        let f = |y: &[f64], _t: f64| vec![-y[0]];
        let config = SolverConfig::new(0.0, 1.0, 0.1, vec![1.0]).expect("valid config");

        for method in Method::ALL {
            let via_enum = method.solve(&f, &config).expect("should solve");
            let direct = match method {
                Method::Euler => Euler.solve(&f, &config),
                Method::Midpoint => Midpoint.solve(&f, &config),
                Method::Rk4 => Rk4.solve(&f, &config),
                Method::Rkf45 => Rkf45.solve(&f, &config),
            }
            .expect("should solve");

            assert_eq!(via_enum, direct, "{method}");
        }
    }

    #[test]
    fn only_rkf45_is_adaptive() {
        let adaptive: Vec<_> = Method::ALL.into_iter().filter(|m| m.is_adaptive()).collect();
        assert_eq!(adaptive, [Method::Rkf45]);
    }

    #[test]
    fn orders_increase_through_all() {
        let orders: Vec<_> = Method::ALL.iter().map(Stepper::order).collect();
        assert_eq!(orders, [1, 2, 4, 4]);

        let f = |y: &[f64], _t: f64| vec![y[0]];
        let next = Method::Rk4.step(&f, 0.0, &[1.0], 0.1).expect("step");
        assert_relative_eq!(next[0], 0.1_f64.exp(), epsilon = 1e-6);
    }
}
