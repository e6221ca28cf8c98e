//! Subscriber setup: `tracing` → `tracing-opentelemetry` → file exporter.

use super::tracer;
use crate::infrastructure::paths::{get_data_dir, trace_file_path};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default `EnvFilter` directive when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// Spans are filtered by `config.trace_level` (an `EnvFilter` directive,
/// `info` by default) and written to
/// `~/.local/share/zellij/castlist/castlist-otlp.json`.
///
/// Tracing is optional: if the data directory cannot be created nothing is
/// installed. Only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let directive = config
        .trace_level
        .as_deref()
        .unwrap_or(DEFAULT_TRACE_LEVEL);

    if std::fs::create_dir_all(get_data_dir()).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "castlist"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(trace_file_path(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer("castlist"));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(otel_layer)
        .try_init();
}
