use odestep_core::{Error, OdeFunction, State, Time};

/// Evaluates the ODE function once and checks the derivative's dimension.
///
/// Every stage of every method goes through this function, so a function
/// that changes dimension mid-run is caught on the first offending call.
///
/// # Errors
///
/// Returns [`Error::Function`] if the ODE function fails, or
/// [`Error::DimensionMismatch`] if the derivative's length differs from `y`'s.
pub fn evaluate<F: OdeFunction>(f: &F, y: &[f64], t: Time) -> Result<State, Error> {
    let derivative = f.call(y, t).map_err(Error::function)?;

    if derivative.len() != y.len() {
        return Err(Error::DimensionMismatch {
            expected: y.len(),
            actual: derivative.len(),
            time: t,
        });
    }

    Ok(derivative)
}

/// Returns `y + h * Σ cᵢ·kᵢ`, summing the weighted stages left to right.
///
/// Zero-weight stages are simply left out of `terms`.
pub(crate) fn offset<K>(y: &[f64], h: f64, terms: &[(f64, &K)]) -> State
where
    K: AsRef<[f64]> + ?Sized,
{
    y.iter()
        .enumerate()
        .map(|(i, yi)| {
            let slope = terms
                .iter()
                .map(|&(c, k)| c * k.as_ref()[i])
                .reduce(|acc, term| acc + term)
                .unwrap_or(0.0);
            yi + h * slope
        })
        .collect()
}

/// Checks that a single-step size is usable.
pub(crate) fn check_step_size(h: f64) -> Result<(), Error> {
    if h == 0.0 || !h.is_finite() {
        return Err(Error::InvalidStepSize(h));
    }
    Ok(())
}
