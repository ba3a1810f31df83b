use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Open/closed flag for the sidebar. On wide viewports the sidebar is always
/// visible and the flag only matters once the layout collapses.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    fn data_state(self) -> &'static str {
        if self.open {
            "open"
        } else {
            "closed"
        }
    }
}

/// Provides sidebar state context to children.
#[component]
pub fn SidebarProvider(#[props(default = false)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar": state().data_state(),
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout ────────────────────────────────────────────────────────────

/// Navigation column. When collapsed on a narrow viewport it slides in over
/// the content with a backdrop that closes it.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let current = state();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", current.data_state(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if current.open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

// ─── Menu ──────────────────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Clickable row in the menu. Picking an entry closes the collapsed sidebar.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new("data-active", if active { "true" } else { "false" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            "aria-current": if active { "page" } else { "false" },
            onclick: move |_| state.set(SidebarState { open: false }),
            ..merged,
            {children}
        }
    }
}

// ─── Utility ───────────────────────────────────────────────────────────

/// Button that opens or closes the sidebar. Hidden on wide viewports.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Abrir menu",
            "aria-expanded": if state().open { "true" } else { "false" },
            onclick: move |_| {
                let next = state().toggled();
                state.set(next);
            },
            {children}
        }
    }
}

/// Main content area next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
