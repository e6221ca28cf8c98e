//! Tracer provider whose exporter appends OTLP JSON lines to a local file.
//!
//! The plugin sandbox has no network access to a collector, so finished spans
//! are written next to the plugin's data instead.

use super::file_writer::RotatingFileWriter;
use super::span_formatter::OtlpJsonEncoder;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::future;
use std::path::PathBuf;

/// Writes every exported batch as one line of the trace file.
#[derive(Debug)]
struct FileSpanExporter {
    writer: RotatingFileWriter,
    encoder: OtlpJsonEncoder,
    stopped: bool,
}

impl FileSpanExporter {
    const fn new(writer: RotatingFileWriter, resource: Resource) -> Self {
        Self {
            writer,
            encoder: OtlpJsonEncoder::new(resource),
            stopped: false,
        }
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.stopped {
            Err(TraceError::from("trace exporter already shut down"))
        } else {
            let line = self.encoder.encode_batch(&batch).to_string();
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.encoder = OtlpJsonEncoder::new(resource.clone());
    }
}

/// Builds a provider exporting synchronously to `trace_file`.
///
/// Spans are written as they end; the plugin is single-threaded and has no
/// runtime to drive a batch processor.
pub fn create_tracer_provider(trace_file: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(RotatingFileWriter::new(trace_file), resource.clone());

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
