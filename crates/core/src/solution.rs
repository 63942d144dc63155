use crate::{Step, Time};

/// Indicates how an integration run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Reached `time_end` (or the range was degenerate).
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Counters collected during one integration run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Steps appended to the history, excluding the initial step.
    pub accepted: usize,

    /// Adaptive trial steps discarded because their error exceeded the tolerance.
    pub rejected: usize,

    /// Accepted steps taken at the minimum step size with the error still
    /// above the tolerance. Counted in `accepted` as well.
    pub forced: usize,

    /// Calls made to the ODE function.
    pub evaluations: usize,
}

/// The result of one integration run.
///
/// `history` is ordered by strictly increasing time and always starts with the
/// initial state at `time_start`, copied exactly from the config.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// Every accepted step, including the initial one.
    pub history: Vec<Step>,

    /// Step and evaluation counters.
    pub stats: Stats,
}

impl Solution {
    /// Returns the initial step.
    ///
    /// # Panics
    ///
    /// Panics if the history is empty, which no stepper produces.
    #[must_use]
    pub fn first(&self) -> &Step {
        &self.history[0]
    }

    /// Returns the last accepted step.
    ///
    /// # Panics
    ///
    /// Panics if the history is empty, which no stepper produces.
    #[must_use]
    pub fn last(&self) -> &Step {
        &self.history[self.history.len() - 1]
    }

    /// Returns the number of recorded steps, including the initial one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` if no steps were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Iterates over the recorded steps in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.history.iter()
    }

    /// Iterates over the recorded times.
    pub fn times(&self) -> impl Iterator<Item = Time> + '_ {
        self.history.iter().map(|step| step.time)
    }

    /// Consumes the solution and returns its history.
    #[must_use]
    pub fn into_history(self) -> Vec<Step> {
        self.history
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.history.iter()
    }
}
