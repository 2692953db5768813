//! Tracing subscriber and OpenTelemetry wiring.
//!
//! Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
//! selects verbosity (default `warn`); `GHPROJECTS_LOG_JSON=1` switches to
//! JSON lines; `GHPROJECTS_OTEL_ENABLED=1` adds an OTLP span exporter
//! configured by the standard `OTEL_EXPORTER_OTLP_*` variables.

use anyhow::Context;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}

/// Installs the global subscriber.
///
/// Returns the tracer provider when OTLP export is on; the caller shuts it
/// down before exit to flush pending spans.
pub fn init() -> anyhow::Result<Option<TracerProvider>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let log_json = env_bool("GHPROJECTS_LOG_JSON", false);

    let (json_layer, text_layer) = if log_json {
        (Some(fmt::layer().json().with_writer(std::io::stderr)), None)
    } else {
        (None, Some(fmt::layer().with_writer(std::io::stderr)))
    };

    let provider = if env_bool("GHPROJECTS_OTEL_ENABLED", false) {
        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .build()
            .context("failed to build OTLP span exporter")?;
        Some(
            TracerProvider::builder()
                .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
                .build(),
        )
    } else {
        None
    };
    let otel_layer = provider
        .as_ref()
        .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer("ghprojects")));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(otel_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(provider)
}

/// Flushes pending spans and stops the exporter.
pub fn shutdown(provider: &TracerProvider) -> anyhow::Result<()> {
    provider
        .shutdown()
        .context("failed to flush OpenTelemetry spans")
}

#[cfg(test)]
#[path = "telemetry_tests.rs"]
mod tests;
