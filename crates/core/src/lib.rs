//! Core traits and types for the odestep ODE integrators.
//!
//! This crate defines the shared abstractions that steppers, observers, and
//! callers build on:
//!
//! - [`OdeFunction`] — the right-hand side `dy/dt = f(y, t)` of a first-order system
//! - [`SolverConfig`] — validated integration bounds, step sizes, and tolerance
//! - [`Step`] and [`Solution`] — the accepted samples of one integration run
//! - [`Observer`] — receives [`Event`]s during a run and may return an [`Action`]
//! - [`Stepper`] — the interface every integration method implements
//!
//! Numerical methods live in `odestep-solvers`.
//!
//! # Features
//!
//! - `serde` — derives `Serialize`/`Deserialize` for [`SolverConfig`],
//!   [`Step`], [`Solution`], [`Status`], and [`Stats`].

mod config;
mod error;
mod event;
mod ode;
mod observer;
mod solution;
mod step;
mod stepper;

pub use config::{ConfigError, DEFAULT_MAX_STEP, DEFAULT_MIN_STEP, DEFAULT_TOLERANCE, SolverConfig};
pub use error::Error;
pub use event::{Action, Event};
pub use ode::{Fallible, OdeFunction, State, Time};
pub use observer::Observer;
pub use solution::{Solution, Stats, Status};
pub use step::Step;
pub use stepper::Stepper;
