//! OpenTelemetry tracing with file export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK tracer → JsonLinesExporter → RotatingFile
//! ```
//!
//! Traces land in `~/.local/share/zellij/campus-events/campus-events-traces.json`
//! (`/host/...` inside the sandbox). The file rotates by size and keeps a
//! couple of timestamped backups.
//!
//! # Modules
//!
//! - `init`: Subscriber and filter setup
//! - `exporter`: Span exporter and tracer provider
//! - `rotating`: Size-capped trace file

mod exporter;
mod init;
mod rotating;

pub use init::{init_tracing, TRACE_FILE_NAME};
