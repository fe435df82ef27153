//! JSON document codec.
//!
//! Schema: `{ "timestamp": <serialization time>, "events": [ ... ] }` with
//! per-event objects mirroring the XML attribute set. Loading additionally
//! adopts the top-level timestamp as the logger's update date.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::error::CodecError;
use crate::event::Event;
use crate::logger::Logger;
use crate::severity::Severity;
use crate::timefmt;

/// Write-side shape of one event.
#[derive(Serialize)]
struct EventRecord<'a> {
    severity: String,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    function: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
}

impl<'a> EventRecord<'a> {
    fn from_event(event: &'a Event) -> EventRecord<'a> {
        EventRecord {
            severity: event.severity().to_string(),
            message: event.message(),
            timestamp: event.timestamp().map(|stamp| timefmt::format_timestamp(&stamp)),
            function: event.function(),
            file: event.file(),
            line: event.line(),
        }
    }
}

/// Write-side shape of the whole document.
#[derive(Serialize)]
struct DocumentRecord<'a> {
    timestamp: String,
    events: Vec<EventRecord<'a>>,
}

fn document_record(events: &[Event]) -> DocumentRecord<'_> {
    DocumentRecord {
        timestamp: timefmt::format_timestamp(&Utc::now()),
        events: events.iter().map(EventRecord::from_event).collect(),
    }
}

impl Logger {
    /// Serializes the current history; flush first when records may still
    /// be in flight. The top-level `timestamp` is the serialization time.
    pub fn to_json(&self) -> Result<Value, CodecError> {
        let events = self.events();
        Ok(serde_json::to_value(document_record(&events))?)
    }

    /// [`Logger::to_json`] rendered as pretty-printed text.
    pub fn to_json_string(&self) -> Result<String, CodecError> {
        let events = self.events();
        Ok(serde_json::to_string_pretty(&document_record(&events))?)
    }

    /// Builds a logger from a parsed JSON document. Total: a shape other
    /// than the expected object degrades to an empty history, and per-event
    /// problems follow the codec module rules.
    pub fn from_json(document: &Value) -> Logger {
        let logger = Logger::new();
        if let Some(stamp) = document.get("timestamp").and_then(Value::as_str) {
            let parsed = timefmt::parse_timestamp(stamp);
            if parsed.is_none() {
                log::warn!("unparseable document timestamp {stamp:?}; update date left unset");
            }
            logger.set_update_date(parsed);
        }
        if let Some(items) = document.get("events").and_then(Value::as_array) {
            let events = items.iter().filter_map(event_from_value).collect();
            logger.adopt_events(events);
        }
        logger
    }

    /// Parses JSON text, then behaves like [`Logger::from_json`].
    pub fn from_json_str(text: &str) -> Result<Logger, CodecError> {
        let document: Value = serde_json::from_str(text)?;
        Ok(Logger::from_json(&document))
    }
}

/// Lenient per-event extraction; `None` skips the entry.
fn event_from_value(value: &Value) -> Option<Event> {
    let message = match value.get("message").and_then(Value::as_str) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => {
            log::warn!("skipping event entry with no message");
            return None;
        }
    };
    let severity = Severity::parse(value.get("severity").and_then(Value::as_str).unwrap_or(""));
    let timestamp = match value.get("timestamp").and_then(Value::as_str) {
        Some(stamp) => {
            let parsed = timefmt::parse_timestamp(stamp);
            if parsed.is_none() {
                log::warn!("unparseable event timestamp {stamp:?}; dropping the field");
            }
            parsed
        }
        None => None,
    };
    let function = value.get("function").and_then(Value::as_str).map(str::to_string);
    let file = value.get("file").and_then(Value::as_str).map(str::to_string);
    let line = value
        .get("line")
        .and_then(Value::as_u64)
        .and_then(|line| u32::try_from(line).ok());
    Some(Event::restored(timestamp, severity, message, function, file, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample_logger() -> Logger {
        let stamp = Utc.with_ymd_and_hms(2016, 2, 23, 12, 0, 0).unwrap();
        let logger = Logger::new();
        logger.adopt_events(vec![
            Event::restored(
                Some(stamp),
                Severity::Debugging,
                "x".to_string(),
                Some("app::poll".to_string()),
                Some("poll.rs".to_string()),
                Some(12),
            ),
            Event::restored(None, Severity::Error, "y".to_string(), None, None, None),
        ]);
        logger
    }

    #[test]
    fn test_document_shape() {
        let document = sample_logger().to_json().unwrap();
        assert!(document.get("timestamp").and_then(Value::as_str).is_some());

        let events = document.get("events").and_then(Value::as_array).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            json!({
                "severity": "Debugging",
                "message": "x",
                "timestamp": "2016-02-23T12:00:00.000Z",
                "function": "app::poll",
                "file": "poll.rs",
                "line": 12,
            })
        );
        // Absent fields are omitted, not serialized as null.
        assert_eq!(events[1], json!({ "severity": "Error", "message": "y" }));
    }

    #[test]
    fn test_round_trip_preserves_events_and_origin() {
        let logger = sample_logger();
        let restored = Logger::from_json(&logger.to_json().unwrap());
        assert_eq!(logger, restored);

        let events = restored.events();
        assert_eq!(events[0].function(), Some("app::poll"));
        assert_eq!(events[0].line(), Some(12));
        assert_eq!(events[1].timestamp(), None);
        assert_eq!(events[1].function(), None);
    }

    #[test]
    fn test_text_round_trip() {
        let logger = sample_logger();
        let restored = Logger::from_json_str(&logger.to_json_string().unwrap()).unwrap();
        assert_eq!(logger, restored);
    }

    #[test]
    fn test_loading_sets_update_date_from_document_timestamp() {
        let document = json!({
            "timestamp": "2016-02-23T12:34:56.000Z",
            "events": [],
        });
        let logger = Logger::from_json(&document);
        let expected = Utc.with_ymd_and_hms(2016, 2, 23, 12, 34, 56).unwrap();
        assert_eq!(logger.update_date(), Some(expected));
    }

    #[test]
    fn test_unparseable_document_timestamp_leaves_update_date_unset() {
        let document = json!({ "timestamp": "whenever", "events": [] });
        assert_eq!(Logger::from_json(&document).update_date(), None);
    }

    #[test]
    fn test_missing_severity_defaults_to_undefined() {
        let document = json!({ "events": [{ "message": "m" }] });
        let logger = Logger::from_json(&document);
        assert_eq!(logger.events()[0].severity(), &Severity::Undefined);
    }

    #[test]
    fn test_entries_without_message_are_skipped() {
        let document = json!({
            "events": [
                { "severity": "Error" },
                { "severity": "Error", "message": "" },
                { "severity": "Error", "message": 7 },
                { "severity": "Information", "message": "kept" },
            ],
        });
        let logger = Logger::from_json(&document);
        let events = logger.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message(), "kept");
    }

    #[test]
    fn test_non_integer_line_becomes_absent() {
        let document = json!({
            "events": [{ "message": "m", "line": "twelve" }],
        });
        assert_eq!(Logger::from_json(&document).events()[0].line(), None);
    }

    #[test]
    fn test_unexpected_shapes_degrade_to_empty() {
        assert!(Logger::from_json(&json!([1, 2, 3])).events().is_empty());
        assert!(Logger::from_json(&json!({ "events": "nope" })).events().is_empty());
        assert!(Logger::from_json(&json!(null)).events().is_empty());
    }

    #[test]
    fn test_invalid_text_is_an_error() {
        assert!(Logger::from_json_str("{ not json").is_err());
    }
}
