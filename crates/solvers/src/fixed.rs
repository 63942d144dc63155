//! Explicit fixed-step methods.
//!
//! Each method advances the state with a fixed linear combination of
//! derivative samples:
//!
//! ```text
//! Euler     y_{n+1} = y_n + h·f(y_n, t_n)
//! Midpoint  y_{n+1} = y_n + h·f(y_n + h/2·k₁, t_n + h/2)
//! RK4       y_{n+1} = y_n + h/6·(k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! All three share the same marching loop: starting from the initial state,
//! take steps of `step_size` until `time_end` is reached, shortening the last
//! step so the run ends exactly on `time_end`. There is no error control;
//! `tolerance`, `min_step`, and `max_step` in the config are ignored.
//!
//! Every accepted step is reported to the observer as
//! [`Event::Accepted`](odestep_core::Event::Accepted) with `error: None`.

mod euler;
mod march;
mod midpoint;
mod rk4;

pub use euler::Euler;
pub use midpoint::Midpoint;
pub use rk4::Rk4;
