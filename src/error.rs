//! Error surface of the document codecs.

use thiserror::Error;

/// Raised for structurally invalid documents and encoder failures.
///
/// Missing or malformed fields inside a well-formed document never raise;
/// they degrade to absent values or skipped events.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed XML attribute: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
