//! OpenTelemetry span exporter writing JSON lines.
//!
//! Each exported batch becomes one line:
//!
//! ```json
//! {"service":"campus-events","spans":[{"name":"apply_filters","traceId":"…","spanId":"…",
//!   "parentSpanId":"…","start":"2026-10-19T10:15:00.123456Z","durationUs":42,
//!   "attributes":{"total_events":8},"events":["filter applied"],"status":"unset"}]}
//! ```

use super::rotating::RotatingFile;
use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::Value;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes span batches to a [`RotatingFile`].
#[derive(Debug)]
pub struct JsonLinesExporter {
    file: RotatingFile,
    service: String,
    is_shutdown: AtomicBool,
}

impl JsonLinesExporter {
    #[must_use]
    pub fn new(file: RotatingFile, service: impl Into<String>) -> Self {
        Self {
            file,
            service: service.into(),
            is_shutdown: AtomicBool::new(false),
        }
    }

    /// One JSON document for a batch.
    #[must_use]
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        json!({
            "service": self.service,
            "spans": batch.iter().map(format_span).collect::<Vec<_>>(),
        })
    }
}

fn format_span(span: &SpanData) -> JsonValue {
    let start: DateTime<Utc> = span.start_time.into();
    let duration_us = span
        .end_time
        .duration_since(span.start_time)
        .map_or(0, |d| d.as_micros());

    let attributes: Map<String, JsonValue> = span
        .attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect();

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| JsonValue::String(event.name.to_string()))
        .collect();

    let parent = if span.parent_span_id == SpanId::INVALID {
        JsonValue::Null
    } else {
        JsonValue::String(format!("{:016x}", span.parent_span_id))
    };

    let status = match &span.status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    };

    json!({
        "name": span.name,
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "start": start.to_rfc3339_opts(SecondsFormat::Micros, true),
        "durationUs": duration_us,
        "attributes": attributes,
        "events": events,
        "status": status,
    })
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.to_string()),
        Value::Array(_) => json!(value.to_string()),
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let line = self.format_batch(&batch).to_string();
        let result = self
            .file
            .append_line(&line)
            .map_err(|e| TraceError::from(format!("{}: {e}", self.file.path().display())));
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

/// Builds a tracer provider exporting every finished span to `file_path`.
#[must_use]
pub fn tracer_provider(file_path: PathBuf, resource: Resource, service: &str) -> TracerProvider {
    let exporter = JsonLinesExporter::new(RotatingFile::new(file_path), service);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
