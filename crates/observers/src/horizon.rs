use odestep_core::{Observer, Time};

use crate::traits::{CanStopEarly, HasTime};

/// Stops a run once it reaches a time limit or has taken enough steps.
///
/// A step is counted whenever an event moves time past the latest time seen
/// so far, so rejected adaptive trials (which retry from the same time) are
/// not counted. The run stops on the event that crosses either limit; that
/// step is kept in the history.
///
/// ```
/// use odestep_core::{SolverConfig, Status, Stepper};
/// use odestep_observers::Horizon;
/// use odestep_solvers::Euler;
///
/// let f = |_y: &[f64], _t: f64| vec![1.0];
/// let config = SolverConfig::new(0.0, 100.0, 0.5, vec![0.0])?;
///
/// let solution = Euler.solve_observed(&f, &config, Horizon::at_time(2.0))?;
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert_eq!(solution.last().time, 2.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Horizon {
    time_limit: Option<Time>,
    max_steps: Option<usize>,
    steps: usize,
    latest: Option<Time>,
}

impl Horizon {
    /// Stops at the first event at or after `time_limit`.
    #[must_use]
    pub fn at_time(time_limit: Time) -> Self {
        Self {
            time_limit: Some(time_limit),
            ..Self::default()
        }
    }

    /// Stops once `max_steps` steps have been taken.
    #[must_use]
    pub fn after_steps(max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
            ..Self::default()
        }
    }

    /// Adds a step limit; the run stops at whichever limit comes first.
    #[must_use]
    pub fn or_after_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Returns how many steps have been counted.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Horizon {
    fn observe(&mut self, event: &E) -> Option<A> {
        let time = event.time();

        match self.latest {
            Some(latest) if time > latest => {
                self.steps += 1;
                self.latest = Some(time);
            }
            Some(_) => {}
            None => self.latest = Some(time),
        }

        let past_time = self.time_limit.is_some_and(|limit| time >= limit);
        let past_steps = self.max_steps.is_some_and(|max| self.steps >= max);
        (past_time || past_steps).then(A::stop_early)
    }
}
