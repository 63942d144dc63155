//! Integrates `dy/dt = -k·y` with every method and prints the error at each
//! sampled time.

use odestep_core::{SolverConfig, Stepper};
use odestep_solvers::Method;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let k = 0.5;
    let y0 = 10.0;
    let decay = move |y: &[f64], _t: f64| vec![-k * y[0]];
    let exact = |t: f64| y0 * (-k * t).exp();

    let config = SolverConfig::new(0.0, 5.0, 0.5, vec![y0])?;

    println!("dy/dt = -{k} y, y(0) = {y0}\n");

    for method in Method::ALL {
        let solution = method.solve(&decay, &config)?;

        println!("{method} ({} steps)", solution.stats.accepted);
        println!("{:>8} {:>14} {:>14} {:>12}", "t", "y", "exact", "error");
        for step in &solution {
            let expected = exact(step.time);
            println!(
                "{:>8.4} {:>14.8} {:>14.8} {:>12.2e}",
                step.time,
                step.state[0],
                expected,
                (step.state[0] - expected).abs(),
            );
        }
        println!();
    }

    Ok(())
}
