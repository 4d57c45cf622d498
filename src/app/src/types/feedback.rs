use serde::{Deserialize, Serialize};

/// How long a success message stays visible before it is cleared
pub const SUCCESS_FEEDBACK_MILLIS: u64 = 5000;

/// Category of a feedback message; the shell applies it as a CSS class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Message shown in the result area below the form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Error,
        }
    }

    /// Success messages expire, errors stay until replaced
    pub fn expires(&self) -> bool {
        self.kind == FeedbackKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_success_expires() {
        assert!(Feedback::success("ok").expires());
        assert!(!Feedback::error("nope").expires());
    }

    #[test]
    fn kind_serializes_as_css_class() {
        assert_eq!(
            serde_json::to_string(&FeedbackKind::Success).unwrap(),
            r#""success""#
        );
        assert_eq!(
            serde_json::to_string(&FeedbackKind::Error).unwrap(),
            r#""error""#
        );
    }
}
