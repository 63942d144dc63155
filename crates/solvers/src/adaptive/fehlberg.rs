use odestep_core::{Error, OdeFunction, State, Time};

use crate::evaluate::{evaluate, offset};

/// Computes Fehlberg's embedded fourth- and fifth-order estimates of `y(t + h)`.
///
/// Both estimates are built from the same six stages, so the error estimate
/// costs no extra evaluations:
///
/// ```text
/// k₁ = f(y, t)
/// k₂ = f(y + h·(¼k₁), t + h/4)
/// k₃ = f(y + h·(3/32·k₁ + 9/32·k₂), t + 3h/8)
/// k₄ = f(y + h·(1932/2197·k₁ − 7200/2197·k₂ + 7296/2197·k₃), t + 12h/13)
/// k₅ = f(y + h·(439/216·k₁ − 8k₂ + 3680/513·k₃ − 845/4104·k₄), t + h)
/// k₆ = f(y + h·(−8/27·k₁ + 2k₂ − 3544/2565·k₃ + 1859/4104·k₄ − 11/40·k₅), t + h/2)
///
/// y₄ = y + h·(25/216·k₁ + 1408/2565·k₃ + 2197/4104·k₄ − 1/5·k₅)
/// y₅ = y + h·(16/135·k₁ + 6656/12825·k₃ + 28561/56430·k₄ − 9/50·k₅ + 2/55·k₆)
/// ```
///
/// Returns `(y4, y5)`. The ODE function is called exactly six times.
///
/// # Errors
///
/// Returns an error if the ODE function fails or returns a derivative of the
/// wrong dimension. No further stages are evaluated after a failure.
pub fn embedded_step<F: OdeFunction>(
    f: &F,
    t: Time,
    y: &[f64],
    h: f64,
) -> Result<(State, State), Error> {
    let k1 = evaluate(f, y, t)?;

    let k2 = evaluate(f, &offset(y, h, &[(1.0 / 4.0, &k1)]), t + h / 4.0)?;

    let k3 = evaluate(
        f,
        &offset(y, h, &[(3.0 / 32.0, &k1), (9.0 / 32.0, &k2)]),
        t + 3.0 * h / 8.0,
    )?;

    let k4 = evaluate(
        f,
        &offset(
            y,
            h,
            &[
                (1932.0 / 2197.0, &k1),
                (-7200.0 / 2197.0, &k2),
                (7296.0 / 2197.0, &k3),
            ],
        ),
        t + 12.0 * h / 13.0,
    )?;

    let k5 = evaluate(
        f,
        &offset(
            y,
            h,
            &[
                (439.0 / 216.0, &k1),
                (-8.0, &k2),
                (3680.0 / 513.0, &k3),
                (-845.0 / 4104.0, &k4),
            ],
        ),
        t + h,
    )?;

    let k6 = evaluate(
        f,
        &offset(
            y,
            h,
            &[
                (-8.0 / 27.0, &k1),
                (2.0, &k2),
                (-3544.0 / 2565.0, &k3),
                (1859.0 / 4104.0, &k4),
                (-11.0 / 40.0, &k5),
            ],
        ),
        t + h / 2.0,
    )?;

    let y4 = offset(
        y,
        h,
        &[
            (25.0 / 216.0, &k1),
            (1408.0 / 2565.0, &k3),
            (2197.0 / 4104.0, &k4),
            (-1.0 / 5.0, &k5),
        ],
    );

    let y5 = offset(
        y,
        h,
        &[
            (16.0 / 135.0, &k1),
            (6656.0 / 12825.0, &k3),
            (28561.0 / 56430.0, &k4),
            (-9.0 / 50.0, &k5),
            (2.0 / 55.0, &k6),
        ],
    );

    Ok((y4, y5))
}
