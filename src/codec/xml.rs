//! XML document codec.
//!
//! Schema: a `<log timestamp="...">` root wrapping one `<event>` element
//! per history entry. The element text is the message; attributes carry the
//! severity, the event timestamp, and any call-site metadata. Absent fields
//! omit the attribute entirely.

use std::io::Cursor;

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event as XmlEvent};
use quick_xml::{Reader, Writer};

use crate::error::CodecError;
use crate::event::Event;
use crate::logger::Logger;
use crate::severity::Severity;
use crate::timefmt;

const EVENT_TAG: &[u8] = b"event";

impl Logger {
    /// Serializes the current history; flush first when records may still
    /// be in flight. The root `timestamp` attribute is the serialization
    /// time, informational only.
    pub fn to_xml(&self) -> Result<String, CodecError> {
        let events = self.events();
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer.write_event(XmlEvent::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let stamp = timefmt::format_timestamp(&Utc::now());
        let mut root = BytesStart::new("log");
        root.push_attribute(("timestamp", stamp.as_str()));
        writer.write_event(XmlEvent::Start(root))?;

        for event in &events {
            let severity = event.severity().to_string();
            let timestamp = event.timestamp().map(|stamp| timefmt::format_timestamp(&stamp));
            let line = event.line().map(|line| line.to_string());

            let mut element = BytesStart::new("event");
            element.push_attribute(("severity", severity.as_str()));
            if let Some(value) = timestamp.as_deref() {
                element.push_attribute(("timestamp", value));
            }
            if let Some(value) = event.function() {
                element.push_attribute(("function", value));
            }
            if let Some(value) = event.file() {
                element.push_attribute(("file", value));
            }
            if let Some(value) = line.as_deref() {
                element.push_attribute(("line", value));
            }

            writer.write_event(XmlEvent::Start(element))?;
            writer.write_event(XmlEvent::Text(BytesText::new(event.message())))?;
            writer.write_event(XmlEvent::End(BytesEnd::new("event")))?;
        }

        writer.write_event(XmlEvent::End(BytesEnd::new("log")))?;
        Ok(String::from_utf8(writer.into_inner().into_inner())?)
    }

    /// Parses a document in the [`Logger::to_xml`] schema into a fresh
    /// logger. Per-event problems smaller than malformed XML degrade per
    /// the codec module rules.
    pub fn from_xml_str(text: &str) -> Result<Logger, CodecError> {
        let mut reader = Reader::from_str(text);
        let mut events = Vec::new();
        let mut pending: Option<PendingEvent> = None;

        loop {
            match reader.read_event()? {
                XmlEvent::Start(element) if element.name().as_ref() == EVENT_TAG => {
                    pending = Some(PendingEvent::from_attributes(&element)?);
                }
                XmlEvent::Empty(element) if element.name().as_ref() == EVENT_TAG => {
                    log::warn!("skipping event element with no message");
                }
                XmlEvent::Text(text) => {
                    if let Some(event) = pending.as_mut() {
                        event.message.push_str(&text.unescape()?);
                    }
                }
                XmlEvent::CData(data) => {
                    if let Some(event) = pending.as_mut() {
                        event.message.push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                XmlEvent::End(element) if element.name().as_ref() == EVENT_TAG => {
                    if let Some(finished) = pending.take() {
                        match finished.finish() {
                            Some(event) => events.push(event),
                            None => log::warn!("skipping event element with no message"),
                        }
                    }
                }
                XmlEvent::Eof => break,
                _ => {}
            }
        }

        let logger = Logger::new();
        logger.adopt_events(events);
        Ok(logger)
    }
}

/// Attribute set of an `event` element awaiting its text content.
struct PendingEvent {
    timestamp: Option<DateTime<Utc>>,
    severity: Severity,
    function: Option<String>,
    file: Option<String>,
    line: Option<u32>,
    message: String,
}

impl PendingEvent {
    fn from_attributes(element: &BytesStart<'_>) -> Result<PendingEvent, CodecError> {
        let mut pending = PendingEvent {
            timestamp: None,
            severity: Severity::Undefined,
            function: None,
            file: None,
            line: None,
            message: String::new(),
        };
        for attribute in element.attributes() {
            let attribute = attribute?;
            let value = attribute.unescape_value()?;
            match attribute.key.as_ref() {
                b"timestamp" => {
                    pending.timestamp = timefmt::parse_timestamp(&value);
                    if pending.timestamp.is_none() {
                        log::warn!("unparseable event timestamp {value:?}; dropping the field");
                    }
                }
                b"severity" => pending.severity = Severity::parse(&value),
                b"function" => pending.function = Some(value.into_owned()),
                b"file" => pending.file = Some(value.into_owned()),
                b"line" => {
                    pending.line = value.parse().ok();
                    if pending.line.is_none() {
                        log::warn!("unparseable event line number {value:?}; dropping the field");
                    }
                }
                _ => {}
            }
        }
        Ok(pending)
    }

    fn finish(self) -> Option<Event> {
        if self.message.is_empty() {
            return None;
        }
        Some(Event::restored(
            self.timestamp,
            self.severity,
            self.message,
            self.function,
            self.file,
            self.line,
        ))
    }
}

/// Renders `<timestamp>: <severity>: <message>` per event element, one line
/// each, without building a [`Logger`]. Attribute strings pass through
/// verbatim; elements missing the timestamp, the severity, or the message
/// are skipped.
pub fn stringify(text: &str) -> Result<String, CodecError> {
    let mut reader = Reader::from_str(text);
    let mut output = String::new();
    let mut pending: Option<PendingLine> = None;

    loop {
        match reader.read_event()? {
            XmlEvent::Start(element) if element.name().as_ref() == EVENT_TAG => {
                let mut line = PendingLine {
                    timestamp: None,
                    severity: None,
                    message: String::new(),
                };
                for attribute in element.attributes() {
                    let attribute = attribute?;
                    match attribute.key.as_ref() {
                        b"timestamp" => {
                            line.timestamp = Some(attribute.unescape_value()?.into_owned());
                        }
                        b"severity" => {
                            line.severity = Some(attribute.unescape_value()?.into_owned());
                        }
                        _ => {}
                    }
                }
                pending = Some(line);
            }
            XmlEvent::Text(text) => {
                if let Some(line) = pending.as_mut() {
                    line.message.push_str(&text.unescape()?);
                }
            }
            XmlEvent::CData(data) => {
                if let Some(line) = pending.as_mut() {
                    line.message.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            XmlEvent::End(element) if element.name().as_ref() == EVENT_TAG => {
                if let Some(line) = pending.take()
                    && let (Some(timestamp), Some(severity)) = (line.timestamp, line.severity)
                    && !line.message.is_empty()
                {
                    output.push_str(&format!("{}: {}: {}\n", timestamp, severity, line.message));
                }
            }
            XmlEvent::Eof => break,
            _ => {}
        }
    }

    Ok(output)
}

/// Raw attribute strings of an `event` element awaiting its text content.
struct PendingLine {
    timestamp: Option<String>,
    severity: Option<String>,
    message: String,
}
