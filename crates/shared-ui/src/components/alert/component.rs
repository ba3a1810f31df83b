use dioxus::prelude::*;

/// Tone of an inline status message.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertTone {
    #[default]
    Info,
    Success,
    Error,
}

impl AlertTone {
    pub fn class(&self) -> &'static str {
        match self {
            AlertTone::Info => "info",
            AlertTone::Success => "success",
            AlertTone::Error => "error",
        }
    }

    /// ARIA role. Errors interrupt the screen reader, the rest wait their turn.
    pub fn aria_role(&self) -> &'static str {
        match self {
            AlertTone::Error => "alert",
            AlertTone::Info | AlertTone::Success => "status",
        }
    }
}

/// Inline message shown after a load or submit settles.
#[component]
pub fn Alert(
    #[props(default)] tone: AlertTone,
    /// Optional bold heading above the message body.
    #[props(default)]
    heading: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "alert", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
        Attribute::new("role", tone.aria_role(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if !heading.is_empty() {
                strong { class: "alert-heading", "{heading}" }
            }
            div { class: "alert-body", {children} }
        }
    }
}
