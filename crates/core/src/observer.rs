/// Receives stepper events and decides whether the run should continue.
///
/// Observers let callers watch an integration (log step sizes, count
/// rejections, record diagnostics) or halt it, without changing how the
/// stepper itself works.
///
/// Returning `Some(action)` requests a stepper-specific action; `None` lets
/// the run continue unchanged. Closures taking `&E` implement `Observer`, and
/// `()` is a no-op observer that never acts.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Action, Event, Step};

    fn feed<Obs>(observer: &mut Obs, steps: &[Step]) -> Vec<Option<Action>>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        steps
            .iter()
            .map(|step| observer.observe(&Event::Initial { step }))
            .collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        let steps = [Step::new(vec![0.0], 0.0), Step::new(vec![1.0], 1.0)];
        assert_eq!(feed(&mut (), &steps), vec![None, None]);
    }

    #[test]
    fn closure_observer_can_stop() {
        let steps = [Step::new(vec![0.0], 0.0), Step::new(vec![1.0], 1.0)];
        let mut seen = 0;

        let actions = feed(
            &mut |event: &Event<'_>| {
                seen += 1;
                (event.time() >= 1.0).then_some(Action::StopEarly)
            },
            &steps,
        );

        assert_eq!(actions, vec![None, Some(Action::StopEarly)]);
        assert_eq!(seen, 2);
    }
}
