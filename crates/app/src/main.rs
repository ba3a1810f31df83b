use dioxus::prelude::*;

mod auth;
mod routes;

use auth::SessionContext;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let client = server::backend::client().clone();

        let mut router =
            dioxus::server::router(App).merge(server::health::health_router(client.clone()));

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::middleware::from_fn_with_state(
                client,
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Suspends until the session lookup answers, so the first render already
    // knows who is signed in.
    let restored =
        use_server_future(move || async move { server::api::get_current_profile().await })?;

    use_context_provider(|| SessionContext::restored(restored.read().as_ref()));

    rsx! {
        document::Title { "Controle de EPIs" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "guard-loading",
                    p { "Carregando..." }
                }
            },
            Router::<Route> {}
        }
    }
}
