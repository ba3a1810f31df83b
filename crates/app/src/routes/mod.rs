pub mod admin;
pub mod login;
pub mod shell;
pub mod supervisor;
pub mod worker;

use crate::auth::use_session;
use dioxus::prelude::*;
use shared_types::{decide, GuardDecision, Role};

use admin::AdminUsers;
use login::Login;
use shell::DashboardShell;
use supervisor::SupervisorOverview;
use worker::equipment::WorkerEquipment;
use worker::inspection::WorkerInspection;
use worker::report_issue::WorkerReportIssue;

/// Application routes. Each dashboard subtree is bound to exactly one role.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},

    #[layout(WorkerArea)]
        #[route("/worker")]
        WorkerEquipment {},
        #[route("/worker/inspection")]
        WorkerInspection {},
        #[route("/worker/report-issue")]
        WorkerReportIssue {},
    #[end_layout]

    #[layout(SupervisorArea)]
        #[route("/supervisor")]
        SupervisorOverview {},
    #[end_layout]

    #[layout(AdminArea)]
        #[route("/admin")]
        AdminUsers {},
    #[end_layout]

    #[route("/:..segments")]
    Unknown { segments: Vec<String> },
}

/// Route a role lands on after sign-in.
pub fn home_route(role: Role) -> Option<Route> {
    match role {
        Role::Worker => Some(Route::WorkerEquipment {}),
        Role::Supervisor => Some(Route::SupervisorOverview {}),
        Role::Admin => Some(Route::AdminUsers {}),
        Role::SafetyTechnician => None,
    }
}

#[component]
fn WorkerArea() -> Element {
    rsx! { RoleGate { role: Role::Worker } }
}

#[component]
fn SupervisorArea() -> Element {
    rsx! { RoleGate { role: Role::Supervisor } }
}

#[component]
fn AdminArea() -> Element {
    rsx! { RoleGate { role: Role::Admin } }
}

/// Renders the dashboard shell for `role`, or sends everyone else to the
/// login page. While the session is still restoring it only shows a neutral
/// placeholder.
#[component]
fn RoleGate(role: Role) -> Element {
    let session = use_session();
    let status = session.status.read().clone();

    match (decide(&status, role), status.profile()) {
        (GuardDecision::Allow, Some(profile)) => rsx! {
            DashboardShell { profile: profile.clone(),
                Outlet::<Route> {}
            }
        },
        (GuardDecision::Wait, _) => rsx! {
            div { class: "guard-loading",
                p { "Carregando..." }
            }
        },
        _ => {
            tracing::info!(required = %role, "Guarded route without a matching session, redirecting to login");
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecionando..." }
                }
            }
        }
    }
}

/// Any unmatched path goes to the login page, which forwards signed-in users
/// to their dashboard.
#[component]
fn Unknown(segments: Vec<String>) -> Element {
    navigator().replace(Route::Login {});
    rsx! {
        div { class: "guard-loading",
            p { "Redirecionando..." }
        }
    }
}
