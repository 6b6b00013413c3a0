use dioxus::prelude::*;

/// A button inside a form. Submits the form when `submit` is set.
///
/// `busy` marks a pending action with `aria-busy`; callers usually pair it
/// with `disabled` and a different label.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub submit: bool,
    #[props(default = false)]
    pub busy: bool,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![Attribute::new("class", "button", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let kind = if props.submit { "submit" } else { "button" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: kind,
            disabled: props.disabled,
            aria_busy: props.busy,
            ..merged,
            {props.children}
        }
    }
}
