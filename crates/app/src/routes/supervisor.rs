use dioxus::prelude::*;
use shared_types::messages::{SUPERVISOR_PLACEHOLDER_BODY, SUPERVISOR_PLACEHOLDER_TITLE};
use shared_ui::{Alert, AlertTone, PageHeader, PageTitle};

#[component]
pub fn SupervisorOverview() -> Element {
    rsx! {
        PageHeader {
            PageTitle { "Visão Geral" }
        }
        Alert { tone: AlertTone::Info, heading: SUPERVISOR_PLACEHOLDER_TITLE,
            "{SUPERVISOR_PLACEHOLDER_BODY}"
        }
    }
}
