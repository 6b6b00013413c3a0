use dioxus::prelude::*;

/// A single-line text input.
///
/// `invalid` sets `aria-invalid`; `described_by` points assistive tech at an
/// error or hint element and is omitted when empty.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] invalid: bool,
    #[props(default)] described_by: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let described_by = (!described_by.is_empty()).then_some(described_by);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value: value,
            disabled: disabled,
            aria_invalid: if invalid { "true" } else { "false" },
            aria_describedby: described_by,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}
