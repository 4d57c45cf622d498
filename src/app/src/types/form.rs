use serde::{Deserialize, Serialize};

/// Label of the submit button while idle
pub const ADD_BUTTON_LABEL: &str = "Add Endpoint";

/// Label of the submit button while a request is in flight
pub const ADD_BUTTON_BUSY_LABEL: &str = "Adding...";

/// State of the `add-button` element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddButtonState {
    pub disabled: bool,
    pub label: String,
}

impl Default for AddButtonState {
    fn default() -> Self {
        Self {
            disabled: false,
            label: ADD_BUTTON_LABEL.to_string(),
        }
    }
}

impl AddButtonState {
    pub fn set_busy(&mut self) {
        self.disabled = true;
        self.label = ADD_BUTTON_BUSY_LABEL.to_string();
    }

    /// Restore the idle state regardless of what happened in between
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_busy(&self) -> bool {
        self.disabled
    }
}
