//! Immutable event records.

use chrono::{DateTime, Utc};

use crate::severity::Severity;

/// Call-site metadata captured where a log call happens.
///
/// The logger stores whatever it is handed. The [`callsite!`](crate::callsite)
/// macro fills all three fields; `#[track_caller]` capture fills file and
/// line only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub function: Option<String>,
    pub file: String,
    pub line: u32,
}

/// One recorded log occurrence.
///
/// Events are created by a [`Logger`](crate::Logger) or by a deserializing
/// codec and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Event {
    timestamp: Option<DateTime<Utc>>,
    severity: Severity,
    message: String,
    function: Option<String>,
    file: Option<String>,
    line: Option<u32>,
}

impl Event {
    /// Builds the event for an in-process record, reducing the file to its
    /// last path component.
    pub(crate) fn recorded(
        timestamp: DateTime<Utc>,
        severity: Severity,
        message: String,
        site: Option<CallSite>,
    ) -> Event {
        let (function, file, line) = match site {
            Some(site) => (
                site.function,
                Some(short_file_name(&site.file).to_string()),
                Some(site.line),
            ),
            None => (None, None, None),
        };
        Event {
            timestamp: Some(timestamp),
            severity,
            message,
            function,
            file,
            line,
        }
    }

    /// Rebuilds an event from deserialized parts, passed through verbatim.
    pub(crate) fn restored(
        timestamp: Option<DateTime<Utc>>,
        severity: Severity,
        message: String,
        function: Option<String>,
        file: Option<String>,
        line: Option<u32>,
    ) -> Event {
        Event {
            timestamp,
            severity,
            message,
            function,
            file,
            line,
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn severity(&self) -> &Severity {
        &self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

/// Severity, timestamp, and message only. Origin metadata never
/// participates, so events restored from documents missing it still match
/// the originals they were serialized from.
impl PartialEq for Event {
    fn eq(&self, other: &Event) -> bool {
        self.severity == other.severity
            && self.timestamp == other.timestamp
            && self.message == other.message
    }
}

impl Eq for Event {}

/// Last path component of a source file path, either separator style.
pub(crate) fn short_file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
