use dioxus::prelude::*;
use shared_types::{AppointmentField, InputKind, ALL_FIELDS, GENERIC_SUBMIT_FAILURE};

use super::handler::SubmitHandler;
use super::state::{BookingState, SubmissionStatus};
use super::submit::submit_booking;
use crate::components::{field_error_id, Button, Form, FormField, Input, Textarea};

const SUCCESS_MESSAGE: &str = "Appointment requested!";

/// Appointment booking form.
///
/// Owns the draft, per-field errors, status banner and in-flight flag.
/// Validation runs on submit; a valid draft is handed to `on_submit` and the
/// form stays disabled until the returned future settles.
#[component]
pub fn AppointmentForm(
    #[props(default)] on_submit: SubmitHandler,
    #[props(default)] class: String,
) -> Element {
    let mut state = use_signal(BookingState::default);

    let handle_edit = move |(field, value): (AppointmentField, String)| {
        let next = state.peek().edit(field, value);
        state.set(next);
    };

    let handle_submit = move |_evt: FormEvent| {
        if let Some(task) = submit_booking(state, &on_submit) {
            spawn(task);
        }
    };

    rsx! {
        AppointmentFormView {
            state: state(),
            class: class,
            on_edit: handle_edit,
            on_submit: handle_submit,
        }
    }
}

/// Stateless rendering of a [`BookingState`].
///
/// `on_edit` receives every keystroke as `(field, new value)`.
#[component]
pub fn AppointmentFormView(
    state: BookingState,
    #[props(default)] class: String,
    #[props(default)] on_edit: EventHandler<(AppointmentField, String)>,
    #[props(default)] on_submit: EventHandler<FormEvent>,
) -> Element {
    let busy = state.is_submitting;
    let form_class = format!("appointment-form {class}").trim_end().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Form {
            class: form_class,
            aria_label: "Appointment booking form",
            busy: busy,
            onsubmit: move |evt| on_submit.call(evt),

            for field in ALL_FIELDS.iter().copied() {
                FormField {
                    key: "{field}",
                    id: field.as_str(),
                    label: field.label(),
                    required: true,
                    error: state.errors.message(field).unwrap_or_default(),
                    {field_control(field, &state, on_edit)}
                }
            }

            {status_banner(state.status)}

            Button {
                submit: true,
                disabled: busy,
                busy: busy,
                if busy { "Booking..." } else { "Book Appointment" }
            }
        }
    }
}

fn status_banner(status: SubmissionStatus) -> Element {
    match status {
        SubmissionStatus::Success => rsx! {
            div { class: "booking-status", "data-status": "success", role: "status", "{SUCCESS_MESSAGE}" }
        },
        SubmissionStatus::Error => rsx! {
            div { class: "booking-status", "data-status": "error", role: "alert", "{GENERIC_SUBMIT_FAILURE}" }
        },
        SubmissionStatus::Idle => rsx! {},
    }
}

fn field_control(
    field: AppointmentField,
    state: &BookingState,
    on_edit: EventHandler<(AppointmentField, String)>,
) -> Element {
    let value = state.draft.get(field).to_string();
    let invalid = state.errors.get(field).is_some();
    let described_by = if invalid {
        field_error_id(field.as_str())
    } else {
        String::new()
    };
    let disabled = state.is_submitting;

    match field.input_kind() {
        InputKind::Line(kind) => rsx! {
            Input {
                id: field.as_str(),
                input_type: kind,
                value: value,
                disabled: disabled,
                invalid: invalid,
                described_by: described_by,
                on_input: move |evt: FormEvent| on_edit.call((field, evt.value())),
            }
        },
        InputKind::MultiLine => rsx! {
            Textarea {
                id: field.as_str(),
                rows: 3,
                value: value,
                disabled: disabled,
                invalid: invalid,
                described_by: described_by,
                on_input: move |evt: FormEvent| on_edit.call((field, evt.value())),
            }
        },
    }
}
