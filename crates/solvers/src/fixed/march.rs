use odestep_core::{
    Action, Error, Event, Observer, OdeFunction, Solution, SolverConfig, Stats, Status, Step,
    Stepper,
};

/// Marches a fixed-step method from `time_start` to `time_end`.
///
/// # Algorithm
///
/// 1. Record the initial step and emit [`Event::Initial`].
/// 2. While `t < time_end`:
///    - Take `h = min(step_size, time_end - t)`.
///    - Advance the state with [`Stepper::step`].
///    - Record the step and emit [`Event::Accepted`].
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 3. Return the solution with the full history.
pub(crate) fn march<S, F, Obs>(
    stepper: &S,
    stages: usize,
    f: &F,
    config: &SolverConfig,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S: Stepper,
    F: OdeFunction,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;

    let time_end = config.time_end();
    let mut history = Vec::with_capacity(config.capacity_hint());
    let mut stats = Stats::default();

    history.push(Step::new(
        config.initial_state().to_vec(),
        config.time_start(),
    ));
    let initial = Event::Initial { step: &history[0] };
    if let Some(Action::StopEarly) = observer.observe(&initial) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            stats,
        });
    }

    let mut t = config.time_start();
    let mut y = config.initial_state().to_vec();

    while t < time_end {
        let h = config.step_size().min(time_end - t);

        y = stepper.step(f, t, &y, h)?;
        t += h;
        stats.accepted += 1;
        stats.evaluations += stages;

        history.push(Step::new(y.clone(), t));

        let event = Event::Accepted {
            index: stats.accepted,
            step: &history[stats.accepted],
            h,
            error: None,
            forced: false,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                stats,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        stats,
    })
}
