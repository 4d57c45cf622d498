use serde::{Deserialize, Serialize};

use crate::types::AddEndpointResponse;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Form input
    MacAddressChanged {
        value: String,
    },

    // Form actions
    AddEndpoint,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    AddEndpointResponse(Result<AddEndpointResponse, String>),

    // Timer responses (internal events)
    #[serde(skip)]
    FeedbackExpired {
        generation: u64,
    },

    // UI actions
    ClearFeedback,
}
