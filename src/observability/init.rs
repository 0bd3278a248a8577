//! Tracing initialization and subscriber setup.

use super::export;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::Path;
use tracing::Subscriber;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor `trace_level` is set.
pub const DEFAULT_LEVEL: &str = "info";

const SERVICE_NAME: &str = "NutriSearch";

/// Installs the global subscriber.
///
/// Events go to stderr through a compact formatter. When `config.trace_file`
/// is set, spans are also exported as OTLP JSON to that file, with size-based
/// rotation.
///
/// # Level Resolution
///
/// 1. `RUST_LOG`
/// 2. `config.trace_level`
/// 3. `"info"`
///
/// Only the first call takes effect. Observability is optional: an unusable
/// trace file or filter directive falls back silently instead of failing.
///
/// # Example
///
/// ```rust
/// use nutrisearch::observability::init_tracing;
/// use nutrisearch::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let directive = filter_directive(
        std::env::var("RUST_LOG").ok().as_deref(),
        config.trace_level.as_deref(),
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    let otel_layer = config.trace_file.as_deref().and_then(file_layer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init();
}

/// Picks the first non-blank directive: env, then config, then the default.
#[must_use]
pub fn filter_directive(rust_log: Option<&str>, trace_level: Option<&str>) -> String {
    [rust_log, trace_level]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|d| !d.is_empty())
        .unwrap_or(DEFAULT_LEVEL)
        .to_string()
}

fn file_layer<S>(path: &Path) -> Option<OpenTelemetryLayer<S, opentelemetry_sdk::trace::Tracer>>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).ok()?;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = export::tracer_provider(path.to_path_buf(), resource);
    let tracer = provider.tracer(export::SCOPE_NAME);

    Some(OpenTelemetryLayer::new(tracer))
}
