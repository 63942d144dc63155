//! Property tests over randomized decay problems and controller inputs.

use odestep_core::{SolverConfig, Stepper};
use odestep_solvers::{
    Method, Rkf45,
    adaptive::{MAX_FACTOR, MIN_FACTOR, SAFETY, next_step_size},
};
use proptest::prelude::*;

fn decay_problem() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    let magnitude = 0.1..10.0;
    let sign = prop::bool::ANY.prop_map(|negative| if negative { -1.0 } else { 1.0 });
    (
        0.1..2.0_f64,
        (magnitude, sign).prop_map(|(m, s): (f64, f64)| m * s),
        0.01..3.0_f64,
        1e-3..0.5_f64,
    )
}

proptest! {
    #[test]
    fn adaptive_tracks_exponential_decay((rate, y0, span, h0) in decay_problem()) {
        let f = move |y: &[f64], _t: f64| vec![-rate * y[0]];
        let config = SolverConfig::new(0.0, span, h0, vec![y0]).unwrap();

        let solution = Rkf45.solve(&f, &config).unwrap();
        let last = solution.last();
        let exact = y0 * (-rate * last.time).exp();

        prop_assert!(((last.state[0] - exact) / exact).abs() < 1e-4);
    }

    #[test]
    fn adaptive_history_is_consistent((rate, y0, span, h0) in decay_problem()) {
        let f = move |y: &[f64], _t: f64| vec![-rate * y[0]];
        let config = SolverConfig::new(0.0, span, h0, vec![y0]).unwrap();

        let solution = Rkf45.solve(&f, &config).unwrap();
        let stats = solution.stats;

        prop_assert_eq!(&solution.first().state, &vec![y0]);
        prop_assert_eq!(solution.len(), stats.accepted + 1);
        prop_assert_eq!(stats.evaluations, 6 * (stats.accepted + stats.rejected));
        prop_assert!(solution.last().time >= span);
        prop_assert!(solution.last().time < span + config.min_step() + 1e-12);
        for (a, b) in solution.times().zip(solution.times().skip(1)) {
            prop_assert!(a < b);
            prop_assert!(b - a <= config.max_step() + 1e-15);
        }
    }

    #[test]
    fn fixed_steps_never_exceed_step_size(
        (rate, y0, span, h) in decay_problem(),
        method in prop::sample::select(vec![Method::Euler, Method::Midpoint, Method::Rk4]),
    ) {
        let f = move |y: &[f64], _t: f64| vec![-rate * y[0]];
        let config = SolverConfig::new(0.0, span, h, vec![y0]).unwrap();

        let solution = method.solve(&f, &config).unwrap();

        prop_assert!((solution.last().time - span).abs() < 1e-12);
        for (a, b) in solution.times().zip(solution.times().skip(1)) {
            prop_assert!(a < b);
            prop_assert!(b - a <= h * (1.0 + 1e-12));
        }
    }
}

proptest! {
    #[test]
    fn controller_factor_stays_clamped(
        h in 1e-8..1.0_f64,
        error in 1e-16..1e3_f64,
        tolerance in 1e-12..1e-2_f64,
    ) {
        let next = next_step_size(h, error, tolerance);

        prop_assert!(next >= MIN_FACTOR * h * (1.0 - 1e-12));
        prop_assert!(next <= MAX_FACTOR * h * (1.0 + 1e-12));
        if error <= tolerance {
            prop_assert!(next >= SAFETY * h * (1.0 - 1e-12));
        } else {
            prop_assert!(next < h);
        }
    }
}
