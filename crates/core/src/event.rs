use crate::{Step, Time};

/// Events emitted by a stepper during an integration run.
///
/// Every run emits [`Event::Initial`] first, then one [`Event::Accepted`] per
/// step appended to the history. Adaptive methods also emit
/// [`Event::Rejected`] for each trial step they discard before retrying at
/// the same time with a smaller step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// The initial step, recorded before any integration.
    Initial {
        /// The initial state at `time_start`.
        step: &'a Step,
    },

    /// A step was accepted and appended to the history.
    Accepted {
        /// Position in the history (1 for the first integration step).
        index: usize,

        /// The accepted step.
        step: &'a Step,

        /// The step size that produced it.
        h: f64,

        /// The error estimate, or `None` for fixed-step methods.
        error: Option<f64>,

        /// Whether the step was accepted only because `h` reached `min_step`.
        forced: bool,
    },

    /// An adaptive trial step was discarded.
    Rejected {
        /// The time the trial started from (and will be retried from).
        time: Time,

        /// The rejected step size.
        h: f64,

        /// The error estimate that exceeded the tolerance.
        error: f64,
    },
}

impl Event<'_> {
    /// Returns the time the event refers to.
    ///
    /// For accepted steps this is the time reached; for rejections it is the
    /// time the trial started from.
    #[must_use]
    pub fn time(&self) -> Time {
        match self {
            Self::Initial { step } | Self::Accepted { step, .. } => step.time,
            Self::Rejected { time, .. } => *time,
        }
    }

    /// Returns the step size of the attempt, if the event has one.
    #[must_use]
    pub fn step_size(&self) -> Option<f64> {
        match self {
            Self::Initial { .. } => None,
            Self::Accepted { h, .. } | Self::Rejected { h, .. } => Some(*h),
        }
    }

    /// Returns the error estimate of the attempt, if the method computed one.
    #[must_use]
    pub fn error(&self) -> Option<f64> {
        match self {
            Self::Initial { .. } => None,
            Self::Accepted { error, .. } => *error,
            Self::Rejected { error, .. } => Some(*error),
        }
    }
}

/// Control actions an observer may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run and return the history accumulated so far.
    StopEarly,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_cover_every_variant() {
        let step = Step::new(vec![1.0], 0.5);

        let initial = Event::Initial { step: &step };
        assert_eq!(initial.time(), 0.5);
        assert_eq!(initial.step_size(), None);
        assert_eq!(initial.error(), None);

        let accepted = Event::Accepted {
            index: 1,
            step: &step,
            h: 0.5,
            error: None,
            forced: false,
        };
        assert_eq!(accepted.time(), 0.5);
        assert_eq!(accepted.step_size(), Some(0.5));
        assert_eq!(accepted.error(), None);

        let rejected = Event::Rejected {
            time: 0.0,
            h: 0.25,
            error: 1e-3,
        };
        assert_eq!(rejected.time(), 0.0);
        assert_eq!(rejected.step_size(), Some(0.25));
        assert_eq!(rejected.error(), Some(1e-3));
    }
}
