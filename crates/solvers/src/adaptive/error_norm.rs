/// Keeps the scaled error finite when a component of the fifth-order
/// estimate is zero.
pub const SCALE_FLOOR: f64 = 1e-10;

/// Reduces the difference between two estimates to a single error value.
///
/// Returns the largest `|y5[i] - y4[i]| / (|y5[i]| + SCALE_FLOOR)` over all
/// components, or `0.0` for empty states.
///
/// The result is a relative error where `|y5[i]|` is large and an absolute
/// error amplified by `1 / SCALE_FLOOR` where it is near zero. A `NaN`
/// component does not raise the maximum.
#[must_use]
pub fn mixed_max_norm(y4: &[f64], y5: &[f64]) -> f64 {
    debug_assert_eq!(y4.len(), y5.len());

    y4.iter()
        .zip(y5)
        .map(|(low, high)| (high - low).abs() / (high.abs() + SCALE_FLOOR))
        .fold(0.0, f64::max)
}
