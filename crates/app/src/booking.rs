use shared_types::{is_blank, AppError, AppointmentDraft, BookingConfig, ALL_FIELDS};
use shared_ui::SubmitHandler;

/// Stand-in for a real booking backend.
///
/// Logs which fields arrived (never their values) and then accepts the
/// request, or rejects it when `reject_submissions` is set.
pub fn demo_handler(config: &BookingConfig) -> SubmitHandler {
    let reject = config.reject_submissions;
    SubmitHandler::new(move |draft: AppointmentDraft| async move {
        let filled: Vec<&str> = ALL_FIELDS
            .iter()
            .filter(|f| !is_blank(draft.get(**f)))
            .map(|f| f.as_str())
            .collect();
        tracing::info!(?filled, "appointment request received");

        if reject {
            return Err(AppError::rejected("demo handler is configured to reject requests"));
        }
        Ok(())
    })
}
