//! Contact form stub.
//!
//! The form moves `Idle -> Submitting -> Idle`. Delivery is simulated: it
//! waits [`SUBMIT_DELAY`] and always succeeds, but returns a `Result` so a
//! real transport can slot in behind [`deliver`].

use std::fmt;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::core::content::CONTACT_EMAIL;
use crate::error::{FolioError, SubmissionError, ValidationError};

/// How long the simulated delivery takes.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Your Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated message ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Proof of delivery returned by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub recipient: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// User-facing outcome shown as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn message_sent() -> Self {
        Self::success(
            "Message sent!",
            "Thank you for reaching out. I'll get back to you soon.",
        )
    }
}

impl From<&ValidationError> for Notification {
    fn from(error: &ValidationError) -> Self {
        Notification::error("Please complete the form", error.to_string())
    }
}

impl From<&SubmissionError> for Notification {
    fn from(error: &SubmissionError) -> Self {
        Notification::error("Message not sent", error.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    is_submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Overwrite one field. Edits are ignored while a submission is in flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitting {
            return;
        }
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.value(*field).is_empty())
    }

    /// Check that every required field has content. Whitespace-only values
    /// count as empty, and all four fields are trimmed in the submission.
    pub fn validate(&self) -> Result<Submission, ValidationError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| self.value(*field).trim().is_empty())
        {
            return Err(ValidationError::EmptyField(field));
        }
        Ok(Submission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// `Idle -> Submitting`. Leaves the form untouched on error.
    pub fn begin_submit(&mut self) -> Result<Submission, FolioError> {
        if self.is_submitting {
            return Err(SubmissionError::AlreadySubmitting.into());
        }
        let submission = self.validate()?;
        self.is_submitting = true;
        debug!(subject = %submission.subject, "contact form submitting");
        Ok(submission)
    }

    /// `Submitting -> Idle`. Clears the form on success and returns the toast to show.
    pub fn finish(&mut self, result: &Result<Receipt, SubmissionError>) -> Notification {
        self.is_submitting = false;
        match result {
            Ok(receipt) => {
                info!(recipient = %receipt.recipient, "contact message delivered");
                self.clear();
                Notification::message_sent()
            }
            Err(error) => {
                warn!(%error, "contact message failed");
                Notification::from(error)
            }
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}

/// Simulated delivery: wait `delay`, then succeed.
pub async fn deliver(
    submission: Submission,
    delay: Duration,
) -> Result<Receipt, SubmissionError> {
    tokio::time::sleep(delay).await;
    debug!(from = %submission.email, "simulated delivery complete");
    Ok(Receipt {
        recipient: CONTACT_EMAIL.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Subject, "Hello");
        form.set_field(Field::Message, "Let's work together.");
        form
    }

    #[test]
    fn test_validate_reports_first_empty_field() {
        let mut form = filled();
        form.set_field(Field::Subject, "   ");
        form.set_field(Field::Message, "");
        assert_eq!(
            form.validate(),
            Err(ValidationError::EmptyField(Field::Subject))
        );
    }

    #[test]
    fn test_every_field_trimmed_alike() {
        let mut form = filled();
        form.set_field(Field::Message, "  \n\t ");
        assert_eq!(
            form.validate(),
            Err(ValidationError::EmptyField(Field::Message))
        );

        form.set_field(Field::Name, "  Ada ");
        form.set_field(Field::Message, "\n Let's talk.  ");
        let submission = form.validate().unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.message, "Let's talk.");
    }

    #[test]
    fn test_begin_submit_rejects_empty_form() {
        let mut form = ContactForm::new();
        let result = form.begin_submit();
        assert!(matches!(
            result,
            Err(FolioError::Validation(ValidationError::EmptyField(Field::Name)))
        ));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled();
        assert!(form.begin_submit().is_ok());
        assert!(matches!(
            form.begin_submit(),
            Err(FolioError::Submission(SubmissionError::AlreadySubmitting))
        ));
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.set_field(Field::Name, "Grace");
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_failed_delivery_keeps_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let notification = form.finish(&Err(SubmissionError::Transport("offline".into())));
        assert_eq!(notification.kind, NotificationKind::Error);
        assert!(!form.is_submitting());
        assert_eq!(form.subject, "Hello");
    }
}
