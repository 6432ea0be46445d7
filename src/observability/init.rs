//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name written into every span.
pub const SERVICE_NAME: &str = "zfolio";

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "zfolio-otlp.json";

/// Installs the global subscriber: `EnvFilter` at `config.trace_level`
/// (default `info`) feeding an OpenTelemetry layer that writes OTLP JSON to
/// `<data dir>/zfolio-otlp.json`.
///
/// Tracing is optional. If the data directory cannot be created nothing is
/// installed, and calling this twice keeps the first subscriber.
///
/// # Example
///
/// ```rust
/// use zfolio::observability::init_tracing;
/// use zfolio::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
