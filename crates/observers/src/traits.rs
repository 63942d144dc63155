//! Capability traits for generic observers.
//!
//! These traits abstract over event and action types, so an observer can be
//! written once and reused with any event that exposes the data it needs.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that refer to a point in time
//! - [`HasErrorEstimate`] — events that may carry a local error estimate
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use odestep_core::Observer;
//! use odestep_observers::traits::{CanStopEarly, HasErrorEstimate};
//!
//! /// Gives up once the error estimate has exceeded a ceiling too often.
//! struct Patience {
//!     ceiling: f64,
//!     allowed: usize,
//!     seen: usize,
//! }
//!
//! impl<E: HasErrorEstimate, A: CanStopEarly> Observer<E, A> for Patience {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.error_estimate().is_some_and(|error| error > self.ceiling) {
//!             self.seen += 1;
//!         }
//!         (self.seen > self.allowed).then(A::stop_early)
//!     }
//! }
//! ```

use odestep_core::{Action, Event, Time};

/// An event that refers to a point in time.
pub trait HasTime {
    /// Returns the time of this event.
    fn time(&self) -> Time;
}

/// An event that may carry a local error estimate.
pub trait HasErrorEstimate {
    /// Returns the error estimate, or `None` if the method computed none.
    fn error_estimate(&self) -> Option<f64>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the stepper early.
    fn stop_early() -> Self;
}

impl HasTime for Event<'_> {
    fn time(&self) -> Time {
        Event::time(self)
    }
}

impl HasErrorEstimate for Event<'_> {
    fn error_estimate(&self) -> Option<f64> {
        self.error()
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
