//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - Traces go to `~/.local/share/zellij/zfolio/zfolio-otlp.json`
//! - The file rotates at 10MB, keeping 3 backups
//! - `trace_level` in the plugin configuration sets the filter (default `info`)
//!
//! Game lookups leave the plugin through the host and come back as separate
//! events. [`TraceContext`] carries the issuing span across that gap so a
//! request and its response share one trace.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `tracer`: Tracer provider with file export
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: Rotating line writer
//! - `context`: Trace context propagation through request context maps

mod context;
mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use context::TraceContext;
pub use init::init_tracing;
