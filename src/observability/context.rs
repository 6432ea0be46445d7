//! Trace context propagation across host round trips.
//!
//! A `web_request` leaves the plugin and its result comes back as a separate
//! event, outside the span that issued it. The issuing span's ids travel in
//! the request context map and are re-attached when the response is handled,
//! so both halves of a lookup land in the same trace.

use std::collections::BTreeMap;

const TRACE_ID_KEY: &str = "trace_id";
const PARENT_SPAN_ID_KEY: &str = "parent_span_id";

/// Serialized OpenTelemetry span identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// Trace ID as 32 hex characters.
    pub trace_id: String,
    /// Span ID of the issuing span as 16 hex characters.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the ids of the current tracing span.
    ///
    /// Returns `None` when no valid OpenTelemetry span is active, which is the
    /// case whenever tracing was not initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Writes the ids into a request context map.
    pub fn write_to(&self, map: &mut BTreeMap<String, String>) {
        map.insert(TRACE_ID_KEY.to_string(), self.trace_id.clone());
        map.insert(PARENT_SPAN_ID_KEY.to_string(), self.parent_span_id.clone());
    }

    /// Reads the ids back from a request context map.
    #[must_use]
    pub fn read_from(map: &BTreeMap<String, String>) -> Option<Self> {
        Some(Self {
            trace_id: map.get(TRACE_ID_KEY)?.clone(),
            parent_span_id: map.get(PARENT_SPAN_ID_KEY)?.clone(),
        })
    }

    /// Makes this context the parent of spans created while the guard lives.
    ///
    /// Returns `None` if the ids are not valid hex.
    #[must_use]
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }
}
