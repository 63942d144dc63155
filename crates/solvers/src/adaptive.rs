//! Adaptive step-size integration with an embedded Runge-Kutta pair.
//!
//! # Algorithm
//!
//! [`Rkf45`] uses Fehlberg's embedded 4(5) pair: one set of six derivative
//! evaluations yields both a fourth-order and a fifth-order estimate of the
//! next state. Their difference estimates the local truncation error, which
//! drives a closed loop:
//!
//! 1. Clamp the trial step so it neither overshoots `time_end` nor leaves
//!    `[min_step, max_step]`.
//! 2. Compute both estimates with [`embedded_step`] and reduce their
//!    difference to one number with [`mixed_max_norm`].
//! 3. Accept the fourth-order estimate if the error is within `tolerance`,
//!    or if the step is already at `min_step` (a *forced* accept), then grow
//!    the step with [`next_step_size`].
//! 4. Otherwise discard the trial, shrink the step with [`next_step_size`],
//!    and retry from the same time.
//!
//! # Limitations
//!
//! - **Mixed error norm**: the error is the worst component of
//!   `|y5 - y4| / (|y5| + 1e-10)`, which behaves like a relative error for
//!   large components and an absolute error scaled by `1e10` near zero.
//!   There is no separate absolute tolerance.
//! - **Forced accepts**: once the step reaches `min_step` the method accepts
//!   it regardless of the error. These steps are counted in
//!   [`Stats::forced`](odestep_core::Stats::forced) and flagged on their
//!   events, but the run still completes successfully.
//! - **Final step overshoot**: if the distance left to `time_end` is shorter
//!   than `min_step`, the final step is raised to `min_step` and the last
//!   recorded time lands past `time_end` by less than `min_step`.
//! - **No retry cap**: rejected trials are retried until the step reaches
//!   `min_step` or the error falls below the tolerance. An ODE function whose
//!   error never settles can keep the loop running.
//!
//! # Observer Events
//!
//! In addition to [`Event::Initial`] and [`Event::Accepted`], the loop emits
//! [`Event::Rejected`] for every discarded trial. Observers may return
//! [`Action::StopEarly`] after any event.
//!
//! [`Event::Initial`]: odestep_core::Event::Initial
//! [`Event::Accepted`]: odestep_core::Event::Accepted
//! [`Event::Rejected`]: odestep_core::Event::Rejected
//! [`Action::StopEarly`]: odestep_core::Action::StopEarly

mod controller;
mod error_norm;
mod fehlberg;
mod rkf45;

pub use controller::{MAX_FACTOR, MIN_FACTOR, SAFETY, next_step_size};
pub use error_norm::{SCALE_FLOOR, mixed_max_norm};
pub use fehlberg::embedded_step;
pub use rkf45::Rkf45;
