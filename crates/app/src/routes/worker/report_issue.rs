use super::load_equipment;
use dioxus::prelude::*;
use server::api::report_issue;
use shared_types::messages::{EQUIPMENT_EMPTY, ISSUE_FAILED, ISSUE_SUCCEEDED, SUBMITTING};
use shared_types::{Loadable, ReportIssueRequest, SubmitState};
use shared_ui::{
    Alert, AlertTone, Button, ButtonType, Card, CardContent, Form, FormSelect, PageDescription,
    PageHeader, PageTitle, Skeleton, Textarea,
};

/// "Reportar Problema": pick one equipment item and describe what is wrong.
/// The new issue starts as pending.
#[component]
pub fn WorkerReportIssue() -> Element {
    let equipment = use_resource(load_equipment);
    let mut equipment_id = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut submit = use_signal(SubmitState::default);

    let handle_submit = move |_: FormEvent| {
        if submit.read().is_submitting() {
            return;
        }
        let Some(req) = ReportIssueRequest::from_form(&equipment_id(), &description()) else {
            return;
        };

        submit.set(SubmitState::Submitting);
        spawn(async move {
            let result = report_issue(req).await;
            match &result {
                Ok(_) => {
                    equipment_id.set(String::new());
                    description.set(String::new());
                }
                // Values stay in place so the worker can retry by hand
                Err(e) => tracing::error!(%e, "Failed to report issue"),
            }
            submit.set(SubmitState::settle(&result, ISSUE_SUCCEEDED, ISSUE_FAILED));
        });
    };

    let state = equipment
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Loadable::Loading);
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

    let body = match state {
        Loadable::Loading => rsx! { Skeleton { class: "skeleton-card" } },
        Loadable::Failed(message) => rsx! {
            Alert { tone: AlertTone::Error, "{message}" }
        },
        Loadable::Ready(rows) if rows.is_empty() => rsx! {
            Alert { tone: AlertTone::Info, "{EQUIPMENT_EMPTY}" }
        },
        Loadable::Ready(rows) => rsx! {
            Card { class: "issue-form-card",
                CardContent {
                    {feedback}
                    Form { onsubmit: handle_submit,
                        FormSelect {
                            id: "issue-equipment",
                            label: "Equipamento",
                            required: true,
                            disabled: busy,
                            value: equipment_id(),
                            onchange: move |e: FormEvent| equipment_id.set(e.value()),
                            option { value: "", "Selecione o equipamento" }
                            for row in rows {
                                option {
                                    key: "{row.equipment.id}",
                                    value: "{row.equipment.id}",
                                    {row.display_name()}
                                }
                            }
                        }
                        Textarea {
                            label: "Descrição do problema",
                            placeholder: "Descreva o que aconteceu com o equipamento",
                            rows: 5,
                            required: true,
                            disabled: busy,
                            value: description(),
                            on_input: move |e: FormEvent| description.set(e.value()),
                        }
                        Button { button_type: ButtonType::Submit, disabled: busy,
                            if busy { "{SUBMITTING}" } else { "Reportar problema" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./worker.css") }

        PageHeader {
            PageTitle { "Reportar Problema" }
            PageDescription { "Informe defeitos ou danos em um equipamento." }
        }

        {body}
    }
}
