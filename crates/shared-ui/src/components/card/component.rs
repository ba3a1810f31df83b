use dioxus::prelude::*;

/// Bordered surface grouping one record or one form. `muted` dims the card
/// for records that are no longer in use.
#[component]
pub fn Card(
    #[props(default)] muted: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "card", None, false),
        Attribute::new("data-muted", muted_state(muted), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

fn muted_state(muted: bool) -> &'static str {
    if muted {
        "true"
    } else {
        "false"
    }
}

/// Heading row: the record name, an optional secondary line and an optional
/// trailing element such as a status badge.
#[component]
pub fn CardHeader(
    heading: String,
    subheading: Option<String>,
    aside: Option<Element>,
) -> Element {
    rsx! {
        header { class: "card-header",
            div { class: "card-heading",
                h3 { class: "card-title", "{heading}" }
                if let Some(subheading) = subheading {
                    p { class: "card-description", "{subheading}" }
                }
            }
            if let Some(aside) = aside {
                div { class: "card-aside", {aside} }
            }
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}
