use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Form state
    /// Raw content of the `mac-address` input
    pub mac_address: String,
    pub add_button: AddButtonState,

    // UI state
    pub feedback: Option<Feedback>,
    /// Bumped on every new feedback so stale expiry timers can be ignored
    pub feedback_generation: u64,
}

impl Model {
    /// Replace the current feedback message
    ///
    /// Returns the generation identifying this message.
    pub fn set_feedback(&mut self, feedback: Feedback) -> u64 {
        self.feedback_generation = self.feedback_generation.wrapping_add(1);
        self.feedback = Some(feedback);
        self.feedback_generation
    }

    /// Clear the feedback message if it is still the one identified by `generation`
    ///
    /// Returns whether anything changed.
    pub fn expire_feedback(&mut self, generation: u64) -> bool {
        if generation != self.feedback_generation || self.feedback.is_none() {
            return false;
        }
        self.feedback = None;
        true
    }

    /// Clear the feedback message unconditionally
    ///
    /// Returns whether a message was shown.
    pub fn clear_feedback(&mut self) -> bool {
        self.feedback.take().is_some()
    }

    /// Trimmed content of the input field
    pub fn trimmed_mac_address(&self) -> &str {
        self.mac_address.trim()
    }

    pub fn is_submitting(&self) -> bool {
        self.add_button.is_busy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_feedback_invalidates_older_generation() {
        let mut model = Model::default();

        let first = model.set_feedback(Feedback::success("first"));
        let second = model.set_feedback(Feedback::error("second"));

        assert!(!model.expire_feedback(first));
        assert_eq!(model.feedback, Some(Feedback::error("second")));
        assert!(model.expire_feedback(second));
        assert_eq!(model.feedback, None);
    }

    #[test]
    fn expire_twice_is_a_no_op() {
        let mut model = Model::default();
        let generation = model.set_feedback(Feedback::success("done"));

        assert!(model.expire_feedback(generation));
        assert!(!model.expire_feedback(generation));
    }

    #[test]
    fn clear_reports_whether_a_message_was_removed() {
        let mut model = Model::default();
        assert!(!model.clear_feedback());

        model.set_feedback(Feedback::error("failed"));
        assert!(model.clear_feedback());
        assert_eq!(model.feedback, None);
    }

    #[test]
    fn default_button_is_idle() {
        let model = Model::default();
        assert!(!model.is_submitting());
        assert_eq!(model.add_button.label, ADD_BUTTON_LABEL);
    }
}
