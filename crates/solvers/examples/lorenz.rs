//! Integrates the Lorenz system in its chaotic regime and prints the
//! trajectory as whitespace-separated `t x y z` rows.
//!
//! Pipe the output to a file to plot it, e.g. with gnuplot:
//! `splot 'lorenz.dat' u 2:3:4 w l`.

use odestep_core::{SolverConfig, Stepper};
use odestep_solvers::Rk4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (sigma, rho, beta) = (10.0, 28.0, 8.0 / 3.0);
    let lorenz = move |y: &[f64], _t: f64| {
        vec![
            sigma * (y[1] - y[0]),
            y[0] * (rho - y[2]) - y[1],
            y[0] * y[1] - beta * y[2],
        ]
    };

    let config = SolverConfig::new(0.0, 50.0, 0.01, vec![1.0, 1.0, 1.0])?;
    let solution = Rk4.solve(&lorenz, &config)?;

    let last = solution.last();
    println!("# Lorenz attractor, sigma = {sigma}, rho = {rho}, beta = {beta:.4}");
    println!(
        "# {} steps, final state ({:.6}, {:.6}, {:.6})",
        solution.stats.accepted, last.state[0], last.state[1], last.state[2],
    );
    for step in &solution {
        println!(
            "{} {} {} {}",
            step.time, step.state[0], step.state[1], step.state[2],
        );
    }

    Ok(())
}
