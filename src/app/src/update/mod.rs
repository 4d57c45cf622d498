mod form;
mod ui;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Form domain
        Event::MacAddressChanged { .. } | Event::AddEndpoint | Event::AddEndpointResponse(_) => {
            form::handle(event, model)
        }

        // UI actions domain
        Event::FeedbackExpired { .. } | Event::ClearFeedback => ui::handle(event, model),
    }
}
