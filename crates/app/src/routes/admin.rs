use dioxus::prelude::*;
use server::api::list_profiles;
use shared_types::messages::USERS_LOAD_FAILED;
use shared_types::{Loadable, Profile, Role};
use shared_ui::{
    Alert, AlertTone, Badge, BadgeVariant, Card, PageDescription, PageHeader, PageTitle,
    Skeleton,
};

async fn load_profiles() -> Loadable<Vec<Profile>> {
    let result = list_profiles().await;
    if let Err(e) = &result {
        tracing::error!(%e, "Failed to load user profiles");
    }
    Loadable::from_result(result, USERS_LOAD_FAILED)
}

fn role_badge_variant(role: Role) -> BadgeVariant {
    match role {
        Role::Admin => BadgeVariant::Destructive,
        Role::Supervisor | Role::SafetyTechnician => BadgeVariant::Success,
        Role::Worker => BadgeVariant::Neutral,
    }
}

/// Placeholder for optional profile columns.
fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or("-")
}

/// "Usuários": every profile, read-only. Roles cannot be changed from here.
#[component]
pub fn AdminUsers() -> Element {
    let profiles = use_resource(load_profiles);
    let state = profiles
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Loadable::Loading);

    let body = match state {
        Loadable::Loading => rsx! { Skeleton { class: "skeleton-table" } },
        Loadable::Failed(message) => rsx! {
            Alert { tone: AlertTone::Error, "{message}" }
        },
        Loadable::Ready(rows) => rsx! {
            Card { class: "users-card",
                table { class: "users-table",
                    thead {
                        tr {
                            th { "Nome" }
                            th { "E-mail" }
                            th { "Perfil" }
                            th { "Departamento" }
                            th { "Matrícula" }
                        }
                    }
                    tbody {
                        for profile in rows {
                            tr { key: "{profile.id}",
                                td { "{profile.full_name}" }
                                td { "{profile.email}" }
                                td {
                                    Badge { variant: role_badge_variant(profile.role), "{profile.role.label()}" }
                                }
                                td { {or_dash(&profile.department).to_string()} }
                                td { {or_dash(&profile.employee_id).to_string()} }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        PageHeader {
            PageTitle { "Usuários" }
            PageDescription { "Contas cadastradas e seus perfis de acesso." }
        }

        {body}
    }
}
