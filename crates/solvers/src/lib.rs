//! Integrators for the odestep framework.
//!
//! Every method implements [`Stepper`] from `odestep-core`, so callers can
//! switch methods without changing how they build configs or read solutions.
//!
//! # Methods
//!
//! - [`fixed`] — explicit fixed-step methods: [`Euler`], [`Midpoint`], [`Rk4`]
//! - [`adaptive`] — the embedded Runge-Kutta-Fehlberg 4(5) method, [`Rkf45`]
//! - [`Method`] — a tagged variant over all of the above for runtime selection
//!
//! # Example
//!
//! ```
//! use odestep_core::{SolverConfig, Stepper};
//! use odestep_solvers::Rkf45;
//!
//! let decay = |y: &[f64], _t: f64| vec![-0.5 * y[0]];
//! let config = SolverConfig::new(0.0, 5.0, 0.1, vec![10.0])?;
//!
//! let solution = Rkf45.solve(&decay, &config)?;
//!
//! let expected = 10.0 * (-2.5_f64).exp();
//! assert!((solution.last().state[0] - expected).abs() < 1e-6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Logging
//!
//! Adaptive runs log through the [`log`] facade: accepted steps at `trace`,
//! rejected and forced steps at `debug`, and a `warn` summary when a run had
//! to accept steps above the tolerance. No logger is installed here.
//!
//! [`Stepper`]: odestep_core::Stepper

mod evaluate;
mod method;

pub mod adaptive;
pub mod fixed;

pub use adaptive::Rkf45;
pub use evaluate::evaluate;
pub use fixed::{Euler, Midpoint, Rk4};
pub use method::{Method, ParseMethodError};
