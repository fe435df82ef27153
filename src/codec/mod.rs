//! Document codecs for logger histories.
//!
//! Both codecs share the same field-presence rules: a field absent on write
//! is omitted from the document and stays absent on read; a malformed
//! timestamp, line number, or severity inside a well-formed document
//! degrades to an absent field (or `Undefined`) instead of failing the
//! load; an event with no message is skipped with a diagnostic. Only
//! structurally invalid documents raise [`CodecError`](crate::CodecError).

pub mod json;
pub mod xml;
