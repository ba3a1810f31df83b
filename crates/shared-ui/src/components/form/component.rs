use dioxus::prelude::*;

/// Form wrapper that stops the browser's own submission and hands the event
/// to `onsubmit`. Native constraint checks (`required`) still run first.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// One labelled control inside a `Form`.
#[component]
pub fn FormField(children: Element) -> Element {
    rsx! {
        div { class: "form-field", {children} }
    }
}
