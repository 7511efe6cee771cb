use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_STEPS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::replay_steps::ports::drawing_sink::DrawingSink;
use crate::core::data::step::{PenState, Step};

/// Feeds a step sequence into a drawing sink: pen-up steps relocate,
/// pen-down steps draw, and any heading a step carries is forwarded.
pub fn replay_steps<I, S>(steps: I, sink: &mut S)
where
    I: IntoIterator<Item = Step>,
    S: DrawingSink + ?Sized,
{
    match replay_steps_cancelable(steps, sink, &NeverCancel) {
        Ok(()) => (),
        Err(Cancelled) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    }
}

/// Like [`replay_steps`], but checks a cancellation token every
/// [`CANCEL_CHECK_INTERVAL_STEPS`] steps and stops pulling when it fires.
///
/// Returning [`Cancelled`] is expected control flow, not a failure to
/// report; the sink simply keeps whatever was drawn so far.
pub fn replay_steps_cancelable<I, S, C>(steps: I, sink: &mut S, cancel: &C) -> Result<(), Cancelled>
where
    I: IntoIterator<Item = Step>,
    S: DrawingSink + ?Sized,
    C: CancelToken + ?Sized,
{
    for (i, step) in steps.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_STEPS == 0 && cancel.is_cancelled() {
            return Err(Cancelled);
        }

        match step.pen {
            PenState::Up => sink.move_to(step.position),
            PenState::Down => sink.line_to(step.position, step.colour),
        }

        if let Some(heading) = step.heading {
            sink.set_heading(heading);
        }
    }

    Ok(())
}
