//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK tracer provider → FileSpanExporter → JSON lines
//! ```
//!
//! Traces land in `~/.local/share/zellij/castlist/castlist-otlp.json`, one
//! OTLP JSON document per line. The file rotates at 10 MB and three backups
//! are kept. The level comes from the `trace_level` plugin option.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider and the file exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
