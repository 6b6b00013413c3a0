use dioxus::prelude::*;

/// Label, control and error slot for one form input.
///
/// The error paragraph gets the id `{id}-error`; controls should reference it
/// through `aria-describedby` when `error` is non-empty.
#[component]
pub fn FormField(
    id: String,
    label: String,
    #[props(default = false)] required: bool,
    #[props(default)] error: String,
    children: Element,
) -> Element {
    let invalid = !error.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-field", "data-invalid": invalid,
            label { class: "form-field-label", r#for: "{id}",
                "{label}"
                if required {
                    span { class: "form-field-required", aria_hidden: "true", " *" }
                }
            }
            {children}
            if invalid {
                p { id: "{id}-error", class: "form-field-error", role: "alert", "{error}" }
            }
        }
    }
}

/// Id of the error element rendered by [`FormField`] for `id`.
pub fn field_error_id(id: &str) -> String {
    format!("{id}-error")
}
