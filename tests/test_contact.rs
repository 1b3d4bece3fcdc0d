//! Integration tests for the contact form stub.
//!
//! Tests cover:
//! - The full submit cycle with the simulated delivery delay
//! - Rejecting incomplete forms without entering the submitting state
//! - Ignoring edits and repeat submits while a message is in flight

mod common;

use common::*;
use folio::core::contact::NotificationKind;

#[tokio::test(start_paused = true)]
async fn test_submit_cycle() -> anyhow::Result<()> {
    let mut form = filled_form();

    let submission = form.begin_submit()?;
    assert!(form.is_submitting());
    assert_eq!(submission.name, "Grace Hopper");

    let started = tokio::time::Instant::now();
    let result = deliver(submission, SUBMIT_DELAY).await;
    assert!(started.elapsed() >= SUBMIT_DELAY);

    let notification = form.finish(&result);
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.title, "Message sent!");
    assert!(!form.is_submitting());
    assert!(form.is_empty());
    Ok(())
}

#[test]
fn test_incomplete_form_is_rejected() {
    let mut form = filled_form();
    form.set_field(Field::Email, "  ");

    let error = form.begin_submit().unwrap_err();

    assert!(matches!(
        error,
        FolioError::Validation(ValidationError::EmptyField(Field::Email))
    ));
    assert!(error.is_user_facing());
    assert!(!form.is_submitting());
    assert_eq!(form.name, "Grace Hopper");
}

#[test]
fn test_empty_form_reports_first_field() {
    let mut form = ContactForm::new();
    let error = form.begin_submit().unwrap_err();
    assert_eq!(error.to_string(), "Your Name is required");
}

#[tokio::test(start_paused = true)]
async fn test_form_is_locked_while_sending() -> anyhow::Result<()> {
    let mut form = filled_form();
    let submission = form.begin_submit()?;

    form.set_field(Field::Subject, "Changed my mind");
    assert_eq!(form.subject, "Design review");
    assert!(matches!(
        form.begin_submit(),
        Err(FolioError::Submission(SubmissionError::AlreadySubmitting))
    ));

    let result = deliver(submission, SUBMIT_DELAY).await;
    form.finish(&result);
    form.set_field(Field::Subject, "Another idea");
    assert_eq!(form.subject, "Another idea");
    Ok(())
}

#[test]
fn test_failed_delivery_keeps_fields() {
    let mut form = filled_form();
    form.begin_submit().unwrap();

    let notification = form.finish(&Err(SubmissionError::Transport("offline".into())));

    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(!form.is_submitting());
    assert_eq!(form.message, "Could you look at our onboarding flow?");
}
