use std::convert::Infallible;

/// Scalar time, the independent variable of an integration run.
pub type Time = f64;

/// An ordered, fixed-dimension sequence of real numbers.
///
/// The dimension of a run is set by the initial state and must be preserved
/// by every evaluation of the [`OdeFunction`].
pub type State = Vec<f64>;

/// The right-hand side of a first-order ODE system `dy/dt = f(y, t)`.
///
/// Implementations must be pure: steppers evaluate the function several times
/// per step (six times for an adaptive trial) and rely on identical inputs
/// producing identical derivatives. Higher-order problems are expressed by
/// augmenting the state, for example position and velocity.
///
/// Closures of the form `Fn(&[f64], Time) -> State` implement this trait
/// directly. Wrap closures that can fail in [`Fallible`].
pub trait OdeFunction {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the derivative of `y` at time `t`.
    ///
    /// The returned state must have the same dimension as `y`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be evaluated.
    fn call(&self, y: &[f64], t: Time) -> Result<State, Self::Error>;
}

/// Blanket implementation for infallible derivative closures.
impl<F> OdeFunction for F
where
    F: Fn(&[f64], Time) -> State,
{
    type Error = Infallible;

    fn call(&self, y: &[f64], t: Time) -> Result<State, Infallible> {
        Ok(self(y, t))
    }
}

/// Adapts a closure returning `Result<State, E>` into an [`OdeFunction`].
///
/// Errors returned by the closure propagate unchanged to the caller of the
/// stepper; they are never retried.
///
/// ```
/// use odestep_core::{Fallible, OdeFunction};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("negative concentration")]
/// struct Negative;
///
/// let f = Fallible(|y: &[f64], _t: f64| {
///     if y[0] < 0.0 { Err(Negative) } else { Ok(vec![-y[0]]) }
/// });
///
/// assert!(f.call(&[1.0], 0.0).is_ok());
/// assert!(f.call(&[-1.0], 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> OdeFunction for Fallible<F>
where
    F: Fn(&[f64], Time) -> Result<State, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, y: &[f64], t: Time) -> Result<State, E> {
        (self.0)(y, t)
    }
}
