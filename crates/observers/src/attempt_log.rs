use odestep_core::{Event, Observer, Time};

/// How a trial step was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The step met the tolerance, or the method has no error control.
    Accepted,
    /// The step missed the tolerance but was accepted at `min_step`.
    Forced,
    /// The step was discarded and retried with a smaller size.
    Rejected,
}

/// One trial step seen by an [`AttemptLog`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attempt {
    /// Time reached for accepted steps, or the retry time for rejections.
    pub time: Time,
    pub h: f64,
    pub error: Option<f64>,
    pub outcome: Outcome,
}

/// Records every accept/reject decision made during a run.
///
/// The initial step is not an attempt and is not recorded. Pass
/// `&mut AttemptLog` to keep the log after the run finishes:
///
/// ```
/// use odestep_core::{SolverConfig, Stepper};
/// use odestep_observers::{AttemptLog, Outcome};
/// use odestep_solvers::Rkf45;
///
/// let f = |y: &[f64], _t: f64| vec![-y[0]];
/// let config = SolverConfig::new(0.0, 1.0, 0.1, vec![1.0])?.with_tolerance(1e-8)?;
///
/// let mut log = AttemptLog::new();
/// let solution = Rkf45.solve_observed(&f, &config, &mut log)?;
///
/// assert_eq!(log.count(Outcome::Accepted), solution.stats.accepted);
/// assert_eq!(log.count(Outcome::Rejected), solution.stats.rejected);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// The log never stops a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttemptLog {
    attempts: Vec<Attempt>,
}

impl AttemptLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded attempts in the order they were made.
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Returns how many attempts had the given outcome.
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.attempts
            .iter()
            .filter(|attempt| attempt.outcome == outcome)
            .count()
    }

    /// Returns the step sizes of accepted and forced attempts.
    pub fn accepted_step_sizes(&self) -> impl Iterator<Item = f64> + '_ {
        self.attempts
            .iter()
            .filter(|attempt| attempt.outcome != Outcome::Rejected)
            .map(|attempt| attempt.h)
    }

    fn record(&mut self, event: &Event<'_>) {
        let attempt = match *event {
            Event::Initial { .. } => return,
            Event::Accepted {
                step,
                h,
                error,
                forced,
                ..
            } => Attempt {
                time: step.time,
                h,
                error,
                outcome: if forced {
                    Outcome::Forced
                } else {
                    Outcome::Accepted
                },
            },
            Event::Rejected { time, h, error } => Attempt {
                time,
                h,
                error: Some(error),
                outcome: Outcome::Rejected,
            },
        };
        self.attempts.push(attempt);
    }
}

impl<A> Observer<Event<'_>, A> for AttemptLog {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut AttemptLog` to be passed to steppers that take an observer
/// by value, so the log can be read after the run completes.
impl<A> Observer<Event<'_>, A> for &mut AttemptLog {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        self.record(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use odestep_core::{Action, SolverConfig, Step, Stepper};
    use odestep_solvers::{Rk4, Rkf45};

    fn feed(log: &mut AttemptLog, event: &Event<'_>) -> Option<Action> {
        log.observe(event)
    }

    #[test]
    fn skips_initial_and_classifies_the_rest() {
        let mut log = AttemptLog::new();
        let start = Step::new(vec![1.0], 0.0);
        let next = Step::new(vec![0.9], 0.1);

        feed(&mut log, &Event::Initial { step: &start });
        feed(
            &mut log,
            &Event::Rejected {
                time: 0.0,
                h: 0.2,
                error: 1e-3,
            },
        );
        feed(
            &mut log,
            &Event::Accepted {
                index: 1,
                step: &next,
                h: 0.1,
                error: Some(1e-7),
                forced: false,
            },
        );
        feed(
            &mut log,
            &Event::Accepted {
                index: 2,
                step: &next,
                h: 0.1,
                error: Some(1e-2),
                forced: true,
            },
        );

        let outcomes: Vec<_> = log.attempts().iter().map(|a| a.outcome).collect();
        assert_eq!(
            outcomes,
            [Outcome::Rejected, Outcome::Accepted, Outcome::Forced]
        );
        assert_eq!(log.attempts()[0].error, Some(1e-3));
        assert_eq!(log.count(Outcome::Forced), 1);
        assert_eq!(log.accepted_step_sizes().collect::<Vec<_>>(), [0.1, 0.1]);
    }

    #[test]
    fn matches_adaptive_stats() {
        let f = |y: &[f64], _t: f64| vec![-y[0]];
        let config = SolverConfig::new(0.0, 2.0, 1.0, vec![1.0])
            .and_then(|config| config.with_step_bounds(1e-10, 1.0))
            .and_then(|config| config.with_tolerance(1e-8))
            .expect("valid config");

        let mut log = AttemptLog::new();
        let solution = Rkf45
            .solve_observed(&f, &config, &mut log)
            .expect("should solve");

        assert!(log.count(Outcome::Rejected) > 0);
        assert_eq!(log.count(Outcome::Accepted), solution.stats.accepted);
        assert_eq!(log.count(Outcome::Rejected), solution.stats.rejected);
        assert_eq!(log.count(Outcome::Forced), solution.stats.forced);

        // Accepted step sizes sum to the distance covered.
        let covered: f64 = log.accepted_step_sizes().sum();
        assert_relative_eq!(covered, solution.last().time, epsilon = 1e-12);
    }

    #[test]
    fn fixed_step_attempts_have_no_error() {
        let f = |_y: &[f64], _t: f64| vec![1.0];
        let config = SolverConfig::new(0.0, 1.0, 0.25, vec![0.0]).expect("valid config");

        let mut log = AttemptLog::new();
        Rk4.solve_observed(&f, &config, &mut log)
            .expect("should solve");

        assert_eq!(log.attempts().len(), 4);
        assert!(log.attempts().iter().all(|a| a.error.is_none()));
        let times: Vec<_> = log.attempts().iter().map(|a| a.time).collect();
        assert_eq!(times, [0.25, 0.5, 0.75, 1.0]);
    }
}
