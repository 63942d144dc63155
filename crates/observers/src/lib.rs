//! Reusable observers for the odestep framework.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any stepper in `odestep-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasTime`], [`HasErrorEstimate`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`AttemptLog`] — records every accepted, forced, and rejected attempt
//! - [`Horizon`] — stops a run at a time limit or after a number of steps
//!
//! [`Observer`]: odestep_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasErrorEstimate`]: traits::HasErrorEstimate
//! [`CanStopEarly`]: traits::CanStopEarly

mod attempt_log;
mod horizon;

pub mod traits;

pub use attempt_log::{Attempt, AttemptLog, Outcome};
pub use horizon::Horizon;
