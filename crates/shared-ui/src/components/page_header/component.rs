use dioxus::prelude::*;

/// Page header container: a title, an optional description and actions.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            {children}
        }
    }
}

#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}

#[component]
pub fn PageDescription(children: Element) -> Element {
    rsx! {
        p { class: "page-description", {children} }
    }
}
