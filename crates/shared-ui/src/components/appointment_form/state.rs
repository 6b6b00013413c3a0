use shared_types::{AppError, AppointmentDraft, AppointmentField, ValidationErrors};

/// Outcome banner of the most recent completed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Everything the booking form renders from.
///
/// Snapshots are never mutated in place: every transition returns a new
/// value that replaces the old one wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingState {
    pub draft: AppointmentDraft,
    pub errors: ValidationErrors,
    pub status: SubmissionStatus,
    pub is_submitting: bool,
}

/// Result of pressing submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// A submission is already in flight; nothing changes.
    Busy,
    /// Validation failed. The new state carries the full error set.
    Invalid(BookingState),
    /// Validation passed. Show `next` and hand `draft` to the handler.
    Dispatch {
        next: BookingState,
        draft: AppointmentDraft,
    },
}

impl BookingState {
    /// Apply a keystroke to one field and drop that field's error.
    /// Ignored while a submission is in flight.
    pub fn edit(&self, field: AppointmentField, value: impl Into<String>) -> Self {
        if self.is_submitting {
            return self.clone();
        }
        let mut errors = self.errors.clone();
        errors.clear(field);
        Self {
            draft: self.draft.with(field, value),
            errors,
            ..self.clone()
        }
    }

    /// Validate the whole draft and decide whether to call the handler.
    pub fn submit(&self) -> SubmitAttempt {
        if self.is_submitting {
            return SubmitAttempt::Busy;
        }
        let errors = ValidationErrors::validate(&self.draft);
        if !errors.is_empty() {
            return SubmitAttempt::Invalid(Self {
                errors,
                ..self.clone()
            });
        }
        SubmitAttempt::Dispatch {
            next: Self {
                draft: self.draft.clone(),
                errors,
                status: SubmissionStatus::Idle,
                is_submitting: true,
            },
            draft: self.draft.clone(),
        }
    }

    /// Fold the handler's outcome back in. Success clears the draft; failure
    /// keeps it so the user can resubmit.
    pub fn settle(&self, outcome: &Result<(), AppError>) -> Self {
        match outcome {
            Ok(()) => Self {
                draft: AppointmentDraft::default(),
                errors: self.errors.clone(),
                status: SubmissionStatus::Success,
                is_submitting: false,
            },
            Err(_) => Self {
                status: SubmissionStatus::Error,
                is_submitting: false,
                ..self.clone()
            },
        }
    }
}
