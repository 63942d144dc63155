//! Integrates the undamped oscillator `x'' = -ω²x` over several periods and
//! reports how well each method conserves energy.

use std::f64::consts::PI;

use odestep_core::{SolverConfig, Stepper};
use odestep_solvers::Method;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let omega = 2.0 * PI;
    let oscillator = move |y: &[f64], _t: f64| vec![y[1], -omega * omega * y[0]];
    let energy = |y: &[f64]| 0.5 * y[1] * y[1] + 0.5 * omega * omega * y[0] * y[0];

    let periods = 10.0;
    let config = SolverConfig::new(0.0, periods, 0.01, vec![1.0, 0.0])?;
    let initial_energy = energy(config.initial_state());

    println!("x'' = -(2π)² x over {periods} periods, x(0) = 1, v(0) = 0\n");
    println!(
        "{:<16} {:>8} {:>14} {:>14} {:>14}",
        "method", "steps", "x(end)", "v(end)", "energy drift",
    );

    for method in Method::ALL {
        let solution = method.solve(&oscillator, &config)?;
        let last = solution.last();
        let drift = (energy(&last.state) - initial_energy) / initial_energy;

        println!(
            "{:<16} {:>8} {:>14.8} {:>14.8} {:>14.2e}",
            method.to_string(),
            solution.stats.accepted,
            last.state[0],
            last.state[1],
            drift,
        );
    }

    Ok(())
}
