//! Command implementations for the logbook binary.

use eyre::{Context, Result};
use std::fs;
use std::path::Path;

use logbook::Logger;

use crate::cli::DocFormat;

pub mod completions;
pub mod convert;
pub mod record;
pub mod show;

/// Human-readable timestamp shape shared by command output.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Settle the document format from an explicit choice or the file extension.
pub fn resolve_format(path: &Path, explicit: Option<DocFormat>) -> Result<DocFormat> {
    match explicit.or_else(|| DocFormat::from_path(path)) {
        Some(format) => Ok(format),
        None => eyre::bail!(
            "Cannot infer the document format of {} (specify it explicitly or use an .xml/.json extension)",
            path.display()
        ),
    }
}

/// Load a log document from disk in the given format.
pub fn load_logger(path: &Path, format: DocFormat) -> Result<Logger> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let logger = match format {
        DocFormat::Xml => Logger::from_xml_str(&text)
            .with_context(|| format!("Malformed XML log document: {}", path.display()))?,
        DocFormat::Json => Logger::from_json_str(&text)
            .with_context(|| format!("Malformed JSON log document: {}", path.display()))?,
    };

    Ok(logger)
}

/// Serialize a log document to disk in the given format.
pub fn serialize_logger(logger: &Logger, path: &Path, format: DocFormat) -> Result<()> {
    let text = match format {
        DocFormat::Xml => logger.to_xml().context("XML serialization failed")?,
        DocFormat::Json => logger.to_json_string().context("JSON serialization failed")?,
    };

    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
