use super::load_equipment;
use dioxus::prelude::*;
use shared_types::messages::EQUIPMENT_EMPTY;
use shared_types::{format_date, EquipmentWithType, Loadable};
use shared_ui::{
    Alert, AlertTone, Badge, BadgeVariant, Card, CardContent, CardHeader, PageDescription,
    PageHeader, PageTitle, SkeletonCards,
};

/// "Meus EPIs": the worker's assigned equipment, newest first.
#[component]
pub fn WorkerEquipment() -> Element {
    let equipment = use_resource(load_equipment);
    let state = equipment
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Loadable::Loading);

    let body = match state {
        Loadable::Loading => rsx! { SkeletonCards {} },
        Loadable::Failed(message) => rsx! {
            Alert { tone: AlertTone::Error, "{message}" }
        },
        Loadable::Ready(rows) if rows.is_empty() => rsx! {
            Alert { tone: AlertTone::Info, "{EQUIPMENT_EMPTY}" }
        },
        Loadable::Ready(rows) => rsx! {
            div { class: "equipment-grid",
                for row in rows {
                    EquipmentCard { key: "{row.equipment.id}", item: row }
                }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./worker.css") }

        PageHeader {
            PageTitle { "Meus EPIs" }
            PageDescription { "Equipamentos de proteção atribuídos a você." }
        }

        {body}
    }
}

#[component]
fn EquipmentCard(item: EquipmentWithType) -> Element {
    let equipment = &item.equipment;
    let status = equipment.status;
    let variant = if status.is_active() {
        BadgeVariant::Success
    } else {
        BadgeVariant::Muted
    };

    rsx! {
        Card { class: "equipment-card", muted: !status.is_active(),
            CardHeader {
                heading: item.equipment_type.name.clone(),
                subheading: item.equipment_type.category.clone(),
                aside: rsx! {
                    Badge { variant: variant, "{status.label()}" }
                },
            }
            CardContent {
                dl { class: "equipment-facts",
                    if let Some(serial) = &equipment.serial_number {
                        dt { "Número de série" }
                        dd { "{serial}" }
                    }
                    dt { "Data de entrega" }
                    dd { {format_date(equipment.issue_date)} }
                    if let Some(expiration) = equipment.expiration_date {
                        dt { "Validade" }
                        dd { {format_date(expiration)} }
                    }
                }
            }
        }
    }
}
