//! Observed order of accuracy for the fixed-step methods.
//!
//! Halving the step should divide the global error by roughly `2^order`.

use odestep_core::{SolverConfig, Stepper};
use odestep_solvers::{Euler, Midpoint, Rk4};

const STEPS: [f64; 3] = [0.1, 0.05, 0.025];

fn global_errors<S: Stepper>(stepper: &S) -> Vec<f64> {
    let f = |y: &[f64], _t: f64| vec![-y[0]];
    let exact = (-1.0_f64).exp();

    STEPS
        .iter()
        .map(|&h| {
            let config = SolverConfig::new(0.0, 1.0, h, vec![1.0]).expect("valid config");
            let solution = stepper.solve(&f, &config).expect("should solve");
            (solution.last().state[0] - exact).abs()
        })
        .collect()
}

fn assert_ratios_within(errors: &[f64], low: f64, high: f64) {
    for pair in errors.windows(2) {
        let ratio = pair[0] / pair[1];
        assert!(
            (low..=high).contains(&ratio),
            "error ratio {ratio} outside [{low}, {high}] for errors {errors:?}",
        );
    }
}

#[test]
fn euler_is_first_order() {
    assert_ratios_within(&global_errors(&Euler), 1.8, 2.2);
}

#[test]
fn midpoint_is_second_order() {
    assert_ratios_within(&global_errors(&Midpoint), 3.5, 4.5);
}

#[test]
fn rk4_is_fourth_order() {
    assert_ratios_within(&global_errors(&Rk4), 12.0, 20.0);
}
