use dioxus::prelude::*;

/// A raised container with an optional heading and description.
#[component]
pub fn Card(
    #[props(default)] title: String,
    #[props(default)] description: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_header = !title.is_empty() || !description.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            if has_header {
                header { class: "card-header",
                    if !title.is_empty() {
                        h2 { class: "card-title", "{title}" }
                    }
                    if !description.is_empty() {
                        p { class: "card-description", "{description}" }
                    }
                }
            }
            div { class: "card-content", {children} }
        }
    }
}
