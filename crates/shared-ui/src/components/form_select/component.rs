use dioxus::prelude::*;

/// Native `<select>` styled to match the other form controls.
///
/// Children should be `option { value: "...", "Label" }` elements. With
/// `required` set, a leading `option { value: "" }` acts as the placeholder
/// and the browser refuses to submit until a real option is picked.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    /// Optional label displayed above the select.
    #[props(default)]
    label: String,
    #[props(default)] id: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", r#for: "{id}", "{label}" }
            }
            select {
                class: "form-select",
                id: "{id}",
                value: value,
                required: required,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
