use super::load_equipment;
use dioxus::prelude::*;
use server::api::submit_inspection;
use shared_types::messages::{
    EQUIPMENT_EMPTY, INSPECTION_FAILED, INSPECTION_SUCCEEDED, SUBMITTING,
};
use shared_types::{
    Condition, EquipmentWithType, Loadable, SubmitInspectionRequest, SubmitState,
};
use shared_ui::{
    Alert, AlertTone, Button, ButtonType, Card, CardContent, CardHeader, Form, FormSelect,
    PageDescription, PageHeader, PageTitle, SkeletonCards, Textarea,
};

/// "Inspeção Diária": one inline inspection form per assigned equipment.
#[component]
pub fn WorkerInspection() -> Element {
    let equipment = use_resource(load_equipment);
    let state = equipment
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Loadable::Loading);

    let body = match state {
        Loadable::Loading => rsx! { SkeletonCards { count: 2 } },
        Loadable::Failed(message) => rsx! {
            Alert { tone: AlertTone::Error, "{message}" }
        },
        Loadable::Ready(rows) if rows.is_empty() => rsx! {
            Alert { tone: AlertTone::Info, "{EQUIPMENT_EMPTY}" }
        },
        Loadable::Ready(rows) => rsx! {
            div { class: "inspection-list",
                for row in rows {
                    InspectionCard { key: "{row.equipment.id}", item: row }
                }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./worker.css") }

        PageHeader {
            PageTitle { "Inspeção Diária" }
            PageDescription { "Registre o estado de cada equipamento antes de usá-lo." }
        }

        {body}
    }
}

/// Inspection form for a single equipment item. Each card tracks its own
/// submission, so one slow insert never blocks the other cards.
#[component]
fn InspectionCard(item: EquipmentWithType) -> Element {
    let equipment_id = item.equipment.id;
    let field_id = format!("condition-{equipment_id}");
    let mut condition = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut submit = use_signal(SubmitState::default);

    let handle_submit = move |_: FormEvent| {
        if submit.read().is_submitting() {
            return;
        }
        // The select is `required`, but never trust the browser alone.
        let Some(req) = SubmitInspectionRequest::from_form(equipment_id, &condition(), &notes())
        else {
            return;
        };

        submit.set(SubmitState::Submitting);
        spawn(async move {
            let result = submit_inspection(req).await;
            if let Err(e) = &result {
                tracing::error!(%e, %equipment_id, "Failed to record inspection");
            }
            let settled = SubmitState::settle(&result, INSPECTION_SUCCEEDED, INSPECTION_FAILED);
            if result.is_ok() {
                condition.set(String::new());
                notes.set(String::new());
            }
            submit.set(settled);
        });
    };

    let subheading = match &item.equipment.serial_number {
        Some(serial) => format!("{} · Nº {serial}", item.equipment_type.category),
        None => item.equipment_type.category.clone(),
    };

    let busy = submit.read().is_submitting();
    let feedback = match submit() {
        SubmitState::Succeeded(message) => rsx! {
            Alert { tone: AlertTone::Success, "{message}" }
        },
        SubmitState::Failed(message) => rsx! {
            Alert { tone: AlertTone::Error, "{message}" }
        },
        SubmitState::Idle | SubmitState::Submitting => rsx! {},
    };

    rsx! {
        Card {
            CardHeader {
                heading: item.equipment_type.name.clone(),
                subheading: subheading,
            }
            CardContent {
                {feedback}

                Form { onsubmit: handle_submit,
                    FormSelect {
                        id: field_id,
                        label: "Condição",
                        required: true,
                        disabled: busy,
                        value: condition(),
                        onchange: move |e: FormEvent| condition.set(e.value()),
                        option { value: "", "Selecione a condição" }
                        for choice in Condition::ALL {
                            option { key: "{choice.as_str()}", value: choice.as_str(), "{choice.label()}" }
                        }
                    }
                    Textarea {
                        label: "Observações",
                        placeholder: "Opcional",
                        disabled: busy,
                        value: notes(),
                        on_input: move |e: FormEvent| notes.set(e.value()),
                    }
                    Button { button_type: ButtonType::Submit, disabled: busy,
                        if busy { "{SUBMITTING}" } else { "Registrar inspeção" }
                    }
                }
            }
        }
    }
}
