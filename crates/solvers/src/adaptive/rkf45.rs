use log::{debug, trace, warn};
use odestep_core::{
    Action, Error, Event, Observer, OdeFunction, Solution, SolverConfig, State, Stats, Status,
    Step, Stepper, Time,
};

use crate::evaluate::check_step_size;

use super::{controller::next_step_size, error_norm::mixed_max_norm, fehlberg::embedded_step};

/// Derivative evaluations per trial step, accepted or not.
const STAGES: usize = 6;

/// The Runge-Kutta-Fehlberg 4(5) method with adaptive step-size control.
///
/// [`Stepper::step`] takes a single uncontrolled step and returns the
/// fourth-order estimate. [`Stepper::solve`] runs the full accept/reject
/// loop described in the [module docs](super).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rkf45;

impl Stepper for Rkf45 {
    fn name(&self) -> &'static str {
        "RKF45"
    }

    fn order(&self) -> u32 {
        4
    }

    fn step<F: OdeFunction>(&self, f: &F, t: Time, y: &[f64], h: f64) -> Result<State, Error> {
        check_step_size(h)?;
        let (y4, _y5) = embedded_step(f, t, y, h)?;
        Ok(y4)
    }

    fn solve_observed<F, Obs>(
        &self,
        f: &F,
        config: &SolverConfig,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: OdeFunction,
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        config.validate()?;

        let time_end = config.time_end();
        let tolerance = config.tolerance();
        let min_step = config.min_step();
        let max_step = config.max_step();

        let mut history = Vec::with_capacity(config.capacity_hint());
        let mut stats = Stats::default();

        history.push(Step::new(
            config.initial_state().to_vec(),
            config.time_start(),
        ));
        if let Some(Action::StopEarly) = observer.observe(&Event::Initial { step: &history[0] }) {
            return Ok(stopped(history, stats));
        }

        let mut t = config.time_start();
        let mut y = config.initial_state().to_vec();
        let mut h = config.step_size();

        while t < time_end {
            h = h.min(time_end - t).clamp(min_step, max_step);

            let (y4, y5) = embedded_step(f, t, &y, h)?;
            stats.evaluations += STAGES;
            let error = mixed_max_norm(&y4, &y5);

            if error <= tolerance || h <= min_step {
                let forced = error > tolerance;
                if forced {
                    stats.forced += 1;
                    debug!("forced accept at t = {t}: h = {h:e}, error = {error:e}");
                }

                y = y4;
                t += h;
                stats.accepted += 1;
                history.push(Step::new(y.clone(), t));
                trace!("accepted step to t = {t}: h = {h:e}, error = {error:e}");

                let event = Event::Accepted {
                    index: stats.accepted,
                    step: &history[stats.accepted],
                    h,
                    error: Some(error),
                    forced,
                };
                if let Some(Action::StopEarly) = observer.observe(&event) {
                    return Ok(stopped(history, stats));
                }

                if error > 0.0 && h > min_step {
                    h = next_step_size(h, error, tolerance);
                }
            } else {
                stats.rejected += 1;
                debug!("rejected step at t = {t}: h = {h:e}, error = {error:e}");

                let event = Event::Rejected { time: t, h, error };
                if let Some(Action::StopEarly) = observer.observe(&event) {
                    return Ok(stopped(history, stats));
                }

                h = next_step_size(h, error, tolerance);
            }
        }

        if stats.forced > 0 {
            warn!(
                "{} of {} steps were accepted at min_step ({min_step:e}) above tolerance ({tolerance:e})",
                stats.forced, stats.accepted,
            );
        }

        Ok(Solution {
            status: Status::Complete,
            history,
            stats,
        })
    }
}

fn stopped(history: Vec<Step>, stats: Stats) -> Solution {
    Solution {
        status: Status::StoppedByObserver,
        history,
        stats,
    }
}
