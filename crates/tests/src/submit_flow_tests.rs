use pretty_assertions::assert_eq;
use shared_types::{AppError, AppointmentDraft, AppointmentField};
use shared_ui::{BookingState, SubmissionStatus};

use crate::common::{press_submit, recording_handler, typed, valid_draft};

#[tokio::test]
async fn accepted_request_resets_form() {
    let (handler, calls) = recording_handler(Ok(()));
    let state = typed(&valid_draft());

    let after = press_submit(&state, &handler).await;

    assert_eq!(after.status, SubmissionStatus::Success);
    assert_eq!(after.draft, AppointmentDraft::default());
    assert!(!after.is_submitting);
    assert_eq!(calls.borrow().as_slice(), &[valid_draft()]);
}

#[tokio::test]
async fn failed_request_keeps_values() {
    let (handler, calls) = recording_handler(Err(AppError::unavailable("clinic api timeout")));
    let state = typed(&valid_draft());

    let after = press_submit(&state, &handler).await;

    assert_eq!(after.status, SubmissionStatus::Error);
    assert_eq!(after.draft, valid_draft());
    assert!(!after.is_submitting);
    assert_eq!(calls.borrow().len(), 1);
}

#[tokio::test]
async fn invalid_draft_never_reaches_handler() {
    let (handler, calls) = recording_handler(Ok(()));
    let draft = AppointmentDraft {
        name: String::new(),
        ..valid_draft()
    };

    let after = press_submit(&typed(&draft), &handler).await;

    assert!(calls.borrow().is_empty());
    assert_eq!(after.errors.len(), 1);
    assert_eq!(
        after.errors.message(AppointmentField::Name).as_deref(),
        Some("Name is required")
    );
    assert_eq!(after.status, SubmissionStatus::Idle);
}

#[tokio::test]
async fn bad_email_never_reaches_handler() {
    let (handler, calls) = recording_handler(Ok(()));
    let draft = AppointmentDraft {
        email: "not-an-email".into(),
        ..valid_draft()
    };

    let after = press_submit(&typed(&draft), &handler).await;

    assert!(calls.borrow().is_empty());
    assert_eq!(
        after.errors.message(AppointmentField::Email).as_deref(),
        Some("Invalid email")
    );
}

#[tokio::test]
async fn retry_after_failure_succeeds_without_retyping() {
    let (failing, _) = recording_handler(Err(AppError::rejected("slot taken")));
    let (working, calls) = recording_handler(Ok(()));

    let failed = press_submit(&typed(&valid_draft()), &failing).await;
    assert_eq!(failed.status, SubmissionStatus::Error);

    let retried = press_submit(&failed, &working).await;
    assert_eq!(retried.status, SubmissionStatus::Success);
    assert!(retried.draft.is_empty());
    assert_eq!(calls.borrow().as_slice(), &[valid_draft()]);
}

#[tokio::test]
async fn fixing_a_field_then_resubmitting() {
    let (handler, calls) = recording_handler(Ok(()));
    let draft = AppointmentDraft {
        phone: "  ".into(),
        reason: String::new(),
        ..valid_draft()
    };

    let rejected = press_submit(&typed(&draft), &handler).await;
    assert_eq!(rejected.errors.len(), 2);

    let fixed = rejected.edit(AppointmentField::Phone, "555");
    assert_eq!(fixed.errors.get(AppointmentField::Phone), None);
    assert!(fixed.errors.get(AppointmentField::Reason).is_some());

    let still_rejected = press_submit(&fixed, &handler).await;
    assert_eq!(still_rejected.errors.len(), 1);
    assert!(calls.borrow().is_empty());

    let done = press_submit(&still_rejected.edit(AppointmentField::Reason, "checkup"), &handler).await;
    assert_eq!(done.status, SubmissionStatus::Success);
    assert_eq!(calls.borrow().len(), 1);
}

#[tokio::test]
async fn success_banner_persists_until_next_valid_submit() {
    let (handler, _) = recording_handler(Ok(()));
    let done = press_submit(&typed(&valid_draft()), &handler).await;

    // Typing into the reset form does not clear the banner.
    let typing = done.edit(AppointmentField::Name, "Sam");
    assert_eq!(typing.status, SubmissionStatus::Success);

    // An invalid attempt leaves it too.
    let invalid = press_submit(&typing, &handler).await;
    assert_eq!(invalid.status, SubmissionStatus::Success);
    assert!(!invalid.errors.is_empty());
}

#[tokio::test]
async fn default_handler_accepts() {
    let after = press_submit(&typed(&valid_draft()), &Default::default()).await;
    assert_eq!(after.status, SubmissionStatus::Success);
    assert_eq!(after, BookingState {
        status: SubmissionStatus::Success,
        ..BookingState::default()
    });
}
