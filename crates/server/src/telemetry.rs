use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::WithExportConfig;
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

use crate::auth::Identity;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const SERVICE_NAME: &str = "ppe-tracker";

/// Keep the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Tokio runtime for the OTLP gRPC exporters. Tonic's `connect_lazy()`
/// calls `tokio::spawn`, which needs a runtime context that the
/// `dioxus::serve` init closure may not have yet.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Set up the OpenTelemetry TracerProvider and register it globally.
///
/// Dioxus owns the tracing subscriber. This only configures the OTLP
/// exporters so HTTP spans (via `OtelTraceLayer`) and `log` records reach
/// the collector.
///
/// Reads config from environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address, e.g. `http://localhost:4317`
///   - `OTEL_SERVICE_NAME`: service name tag (default `ppe-tracker`)
///   - `DEPLOY_ENV`: deployment environment tag (default `development`)
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let endpoint = match std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(ep) => ep,
        Err(_) => {
            tracing::warn!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
            return;
        }
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let rt = OTEL_RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(1)
            .build()
            .expect("Failed to create OTEL runtime")
    });
    let _guard = rt.enter();

    use opentelemetry_otlp::WithTonicConfig;

    let mut builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);
    if let Some(tls) = tls_config(&endpoint) {
        builder = builder.with_tls_config(tls);
    }
    let exporter = match builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::error!(%e, "Failed to create OTLP span exporter, telemetry disabled");
            return;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource.clone())
        .build();

    global::set_tracer_provider(provider);

    // -- Log exporter (uses the `log` crate, not the `tracing` subscriber) --
    let mut log_builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);
    if let Some(tls) = tls_config(&endpoint) {
        log_builder = log_builder.with_tls_config(tls);
    }
    let log_exporter = match log_builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::error!(%e, "Failed to create OTLP log exporter, exporting traces only");
            return;
        }
    };

    let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build()
    });

    // Bridge the `log` crate to OpenTelemetry. Separate from the `tracing`
    // subscriber owned by Dioxus, so the two do not conflict.
    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(_) => tracing::warn!("Log bridge skipped, log crate logger already set"),
    }

    tracing::info!("Telemetry initialized v{APP_VERSION}, exporting traces and logs to {endpoint}");
}

/// TLS with system roots for `https://` collectors.
fn tls_config(
    endpoint: &str,
) -> Option<opentelemetry_otlp::tonic_types::transport::ClientTlsConfig> {
    endpoint.starts_with("https://").then(|| {
        opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots()
    })
}

/// Span name for a request path. Server function endpoints carry a numeric
/// hash suffix that would otherwise give every build its own span names.
fn route_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(|c: char| c.is_ascii_digit());
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
///
/// Captures method, path, user-agent, request ID, response status and the
/// authenticated user id when present.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(SERVICE_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string()
        };
        let user_agent = header("user-agent");
        let request_id = header("x-request-id");

        let mut attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("http.user_agent", user_agent),
            KeyValue::new("http.request_id", request_id),
        ];
        match req.extensions().get::<Identity>() {
            Some(identity) => {
                attributes.push(KeyValue::new("user.id", identity.user_id().to_string()));
                attributes.push(KeyValue::new("auth.status", "authenticated"));
            }
            None => attributes.push(KeyValue::new("auth.status", "anonymous")),
        }

        let span = tracer
            .span_builder(format!("{} {}", method, route_name(&path)))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}
