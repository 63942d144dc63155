use crate::{State, Time};

/// One accepted sample of a trajectory: the state reached at a time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub state: State,
    pub time: Time,
}

impl Step {
    /// Creates a new step from a state and the time it was reached.
    #[must_use]
    pub fn new(state: State, time: Time) -> Self {
        Self { state, time }
    }
}
