use dioxus::prelude::*;

/// A multi-line text input. Not resizable; height comes from `rows`.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default = 3)] rows: u32,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] invalid: bool,
    #[props(default)] described_by: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let described_by = (!described_by.is_empty()).then_some(described_by);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        textarea {
            rows: "{rows}",
            value: value,
            disabled: disabled,
            aria_invalid: if invalid { "true" } else { "false" },
            aria_describedby: described_by,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}
