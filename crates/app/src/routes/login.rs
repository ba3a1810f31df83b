use crate::auth::use_session;
use crate::routes::home_route;
use dioxus::prelude::*;
use shared_types::messages::{sign_in_failure, NO_DASHBOARD, SUBMITTING};
use shared_types::{login_destination, AppError, LoginDestination, SubmitState};
use shared_ui::{
    Alert, AlertTone, Button, ButtonType, Card, CardContent, CardHeader, Form, FormField, Input,
    Label,
};

/// Sign-in page. Signed-in users are forwarded to their role's dashboard;
/// a role without a dashboard is signed out again with a notice.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submit = use_signal(SubmitState::default);
    let mut notice = use_signal(|| Option::<&'static str>::None);

    use_effect(move || {
        let destination = login_destination(&session.status.read());
        match destination {
            LoginDestination::Home(_) => {
                if let Some(route) = session.profile().and_then(|p| home_route(p.role)) {
                    navigator().replace(route);
                }
            }
            LoginDestination::NoDashboard => {
                tracing::warn!("Signed-in role has no dashboard, signing out");
                notice.set(Some(NO_DASHBOARD));
                spawn(async move {
                    session.sign_out().await;
                });
            }
            LoginDestination::Stay => {}
        }
    });

    let handle_submit = move |_: FormEvent| {
        if submit.read().is_submitting() {
            return;
        }
        submit.set(SubmitState::Submitting);
        notice.set(None);

        spawn(async move {
            match session.sign_in(email(), password()).await {
                Ok(_) => {
                    password.set(String::new());
                    submit.set(SubmitState::Idle);
                }
                Err(e) => {
                    tracing::error!(%e, "Sign-in failed");
                    let kind = AppError::kind_of(&e.to_string());
                    submit.set(SubmitState::Failed(sign_in_failure(kind)));
                }
            }
        });
    };

    let busy = submit.read().is_submitting();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            Card { class: "login-card",
                CardHeader {
                    heading: "Controle de EPIs".to_string(),
                    subheading: "Entre com seu e-mail e senha para acessar o painel.".to_string(),
                }

                CardContent {
                    if let Some(message) = notice() {
                        Alert { tone: AlertTone::Info, "{message}" }
                    }
                    if let SubmitState::Failed(message) = submit() {
                        Alert { tone: AlertTone::Error, "{message}" }
                    }

                    Form { onsubmit: handle_submit,
                        FormField {
                            Label { html_for: "email", required: true, "E-mail" }
                            Input {
                                id: "email",
                                input_type: "email",
                                autocomplete: "email",
                                placeholder: "nome@empresa.com",
                                required: true,
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        FormField {
                            Label { html_for: "password", required: true, "Senha" }
                            Input {
                                id: "password",
                                input_type: "password",
                                autocomplete: "current-password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        Button { button_type: ButtonType::Submit, disabled: busy,
                            if busy { "{SUBMITTING}" } else { "Entrar" }
                        }
                    }
                }
            }
        }
    }
}
