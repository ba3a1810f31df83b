use crate::auth::use_session;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdEllipsis, LdFileText, LdLayoutDashboard, LdLockOpen, LdShield, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{Profile, Role};
use shared_ui::{
    Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarTrigger,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum NavIcon {
    Equipment,
    Inspection,
    Issue,
    Overview,
    Users,
}

#[derive(Debug, Clone, PartialEq)]
struct NavItem {
    label: &'static str,
    route: Route,
    icon: NavIcon,
}

/// Fixed navigation for a role's subtree.
fn nav_items(role: Role) -> Vec<NavItem> {
    match role {
        Role::Worker => vec![
            NavItem {
                label: "Meus EPIs",
                route: Route::WorkerEquipment {},
                icon: NavIcon::Equipment,
            },
            NavItem {
                label: "Inspeção Diária",
                route: Route::WorkerInspection {},
                icon: NavIcon::Inspection,
            },
            NavItem {
                label: "Reportar Problema",
                route: Route::WorkerReportIssue {},
                icon: NavIcon::Issue,
            },
        ],
        Role::Supervisor => vec![NavItem {
            label: "Visão Geral",
            route: Route::SupervisorOverview {},
            icon: NavIcon::Overview,
        }],
        Role::Admin => vec![NavItem {
            label: "Usuários",
            route: Route::AdminUsers {},
            icon: NavIcon::Users,
        }],
        Role::SafetyTechnician => Vec::new(),
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Equipment => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        NavIcon::Inspection => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::Issue => rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
        NavIcon::Overview => {
            rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } }
        }
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
    }
}

/// Sidebar layout shared by every dashboard: role title, the user's name,
/// the role's navigation and the sign-out control.
#[component]
pub fn DashboardShell(profile: Profile, children: Element) -> Element {
    let session = use_session();
    let route: Route = use_route();

    let title = profile.role.dashboard_title().unwrap_or_default();
    let items = nav_items(profile.role);

    let handle_sign_out = move |_: MouseEvent| {
        spawn(async move {
            session.sign_out().await;
            navigator().replace(Route::Login {});
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./shell.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    span { class: "shell-title", "{title}" }
                    span { class: "shell-user", "{profile.full_name}" }
                }

                SidebarContent {
                    SidebarMenu {
                        for item in items {
                            SidebarMenuItem { key: "{item.label}",
                                Link { to: item.route.clone(),
                                    SidebarMenuButton { active: route == item.route,
                                        NavGlyph { icon: item.icon }
                                        "{item.label}"
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    button {
                        class: "shell-sign-out",
                        r#type: "button",
                        onclick: handle_sign_out,
                        Icon::<LdLockOpen> { icon: LdLockOpen, width: 18, height: 18 }
                        "Sair"
                    }
                }
            }

            SidebarInset {
                div { class: "shell-topbar",
                    SidebarTrigger {
                        Icon::<LdEllipsis> { icon: LdEllipsis, width: 20, height: 20 }
                    }
                    span { class: "shell-topbar-title", "{title}" }
                }
                div { class: "shell-content", {children} }
            }
        }
    }
}
