use dioxus::prelude::*;

/// Pulsing placeholder block.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "aria-hidden": "true",
            ..merged,
        }
    }
}

/// A grid of `count` card-sized placeholders shown while a list loads.
#[component]
pub fn SkeletonCards(#[props(default = 3)] count: usize) -> Element {
    rsx! {
        div { class: "skeleton-cards", "aria-busy": "true",
            for i in 0..count {
                Skeleton { key: "{i}", class: "skeleton-card" }
            }
        }
    }
}
