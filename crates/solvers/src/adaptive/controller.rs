/// Safety factor applied to the optimal step-size ratio.
pub const SAFETY: f64 = 0.9;

/// Smallest factor a single update can shrink the step by.
pub const MIN_FACTOR: f64 = 0.1;

/// Largest factor a single update can grow the step by.
pub const MAX_FACTOR: f64 = 5.0;

const EXPONENT: f64 = 0.25;

/// Proposes the next step size from the current step's error estimate.
///
/// ```text
/// error == 0:  h_next = 2h
/// otherwise:   h_next = h · clamp(0.9 · (tolerance / error)^¼, 0.1, 5.0)
/// ```
///
/// The same rule shrinks the step after a rejection and grows it after an
/// acceptance. Bounds on the step itself (`min_step`, `max_step`) are
/// applied by the caller before the next trial.
#[must_use]
pub fn next_step_size(h: f64, error: f64, tolerance: f64) -> f64 {
    if error == 0.0 {
        return 2.0 * h;
    }

    let factor = SAFETY * (tolerance / error).powf(EXPONENT);
    h * factor.clamp(MIN_FACTOR, MAX_FACTOR)
}
