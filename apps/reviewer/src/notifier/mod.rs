//! Notifier — delivers the feedback to the candidate by email.
//!
//! Delivery failures are returned to the caller, which logs them and moves on;
//! they never abort the batch.

use async_trait::async_trait;
use thiserror::Error;

pub mod smtp;

pub use smtp::SmtpNotifier;

pub const FEEDBACK_SUBJECT: &str = "Resume Feedback";

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("invalid address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends one plain-text message to `to`.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError>;
}

/// The message body wrapped around the generated feedback.
pub fn feedback_email_body(feedback: &str) -> String {
    format!(
        "Hello,\n\n\
         Here is some feedback on your resume:\n\n\
         {feedback}\n\n\
         Best regards,\n\
         The Resume Review Team"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_wraps_feedback() {
        let body = feedback_email_body("- Quantify your impact.");
        assert_eq!(
            body,
            "Hello,\n\nHere is some feedback on your resume:\n\n- Quantify your impact.\n\nBest regards,\nThe Resume Review Team"
        );
    }

    #[test]
    fn test_body_keeps_multiline_feedback_intact() {
        let feedback = "Strengths:\n* Clear\n\nImprovements:\n* Shorter summary";
        assert!(feedback_email_body(feedback).contains(feedback));
    }
}
