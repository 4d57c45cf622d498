use crux_core::{render::render, Command};

use crate::commands::timer::TimerOutput;
use crate::events::Event;
use crate::model::Model;
use crate::types::{Feedback, SUCCESS_FEEDBACK_MILLIS};
use crate::{Effect, TimerCmd};

/// Handle UI-related events (feedback expiry, clear messages)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::FeedbackExpired { generation } => {
            if model.expire_feedback(generation) {
                render()
            } else {
                log::debug!("ignoring expiry of superseded feedback {generation}");
                Command::done()
            }
        }
        Event::ClearFeedback => {
            if model.clear_feedback() {
                render()
            } else {
                Command::done()
            }
        }
        _ => unreachable!("Non-UI event passed to UI handler"),
    }
}

/// Show a feedback message
///
/// Success messages get a one-shot timer; when it elapses the message is
/// cleared unless a newer one has replaced it in the meantime.
pub fn show_feedback(model: &mut Model, feedback: Feedback) -> Command<Effect, Event> {
    let expires = feedback.expires();
    let generation = model.set_feedback(feedback);

    if !expires {
        return render();
    }

    Command::all([
        render(),
        TimerCmd::start(generation, SUCCESS_FEEDBACK_MILLIS)
            .build()
            .then_send(|TimerOutput::Elapsed { id }| Event::FeedbackExpired { generation: id }),
    ])
}
