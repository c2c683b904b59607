//! tracing Layers producing [`LogEntry`] values.

use std::fmt::Write as FmtWrite;
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use super::entry::LogEntry;

fn entry_from_event(event: &Event<'_>) -> LogEntry {
    let metadata = event.metadata();
    let mut visitor = JsonVisitor::default();
    event.record(&mut visitor);

    let mut entry = LogEntry::new(
        metadata.level().as_str().to_lowercase(),
        metadata.target(),
        visitor.message.unwrap_or_default(),
    );
    entry.fields = visitor.fields;
    entry
}

/// Appends every event to `<dir>/moodreads-<session>.jsonl`.
pub struct JsonlLayer {
    path: PathBuf,
    file: Mutex<LineWriter<File>>,
}

impl JsonlLayer {
    /// Open a fresh log file for this session, creating `logs_dir` if needed.
    pub fn new(logs_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let logs_dir = logs_dir.as_ref();
        std::fs::create_dir_all(logs_dir)?;
        let session = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S");
        let path = logs_dir.join(format!("moodreads-{session}.jsonl"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(LineWriter::new(file)),
        })
    }

    pub fn log_path(&self) -> &Path {
        &self.path
    }
}

impl<S: Subscriber> Layer<S> for JsonlLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let entry = entry_from_event(event);
        if let Ok(line) = entry.to_json_line() {
            // Logging must never take the app down.
            let _ = writeln!(self.file.lock(), "{line}");
        }
    }
}

/// Shared view of the events a [`CaptureLayer`] has seen.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CapturedLogs {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Events at `level` whose message contains `needle`.
    pub fn count(&self, level: &str, needle: &str) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.level == level && e.msg.contains(needle))
            .count()
    }

    pub fn warnings(&self) -> usize {
        self.entries.lock().iter().filter(|e| e.level == "warn").count()
    }

    pub fn errors(&self) -> usize {
        self.entries.lock().iter().filter(|e| e.level == "error").count()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

/// In-memory layer for asserting on emitted events.
#[derive(Debug, Clone, Default)]
pub struct CaptureLayer {
    logs: CapturedLogs,
}

impl CaptureLayer {
    pub fn new() -> (Self, CapturedLogs) {
        let layer = Self::default();
        let logs = layer.logs.clone();
        (layer, logs)
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.logs.entries.lock().push(entry_from_event(event));
    }
}

/// Visitor that extracts the message and fields from tracing events.
#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);
        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Bool(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::Value::String(value.to_string()),
        );
    }
}
