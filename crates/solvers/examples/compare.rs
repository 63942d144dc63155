//! Compares accuracy, work, and wall time of every method on `dy/dt = -y`.

use std::time::Instant;

use odestep_core::{SolverConfig, Stepper};
use odestep_solvers::Method;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let problem = |y: &[f64], _t: f64| vec![-y[0]];
    let config = SolverConfig::new(0.0, 5.0, 0.1, vec![1.0])?;
    let exact = (-config.time_end()).exp();

    println!("dy/dt = -y, y(0) = 1, t in [0, 5], h = 0.1\n");
    println!(
        "{:<16} {:>14} {:>12} {:>8} {:>9} {:>8} {:>10}",
        "method", "y(5)", "error", "steps", "rejected", "evals", "time (ms)",
    );
    println!("{}", "-".repeat(84));

    for method in Method::ALL {
        let start = Instant::now();
        let solution = method.solve(&problem, &config)?;
        let elapsed = start.elapsed().as_secs_f64() * 1e3;

        let value = solution.last().state[0];
        println!(
            "{:<16} {:>14.10} {:>12.2e} {:>8} {:>9} {:>8} {:>10.3}",
            method.to_string(),
            value,
            (value - exact).abs(),
            solution.stats.accepted,
            solution.stats.rejected,
            solution.stats.evaluations,
            elapsed,
        );
    }

    Ok(())
}
