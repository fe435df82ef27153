use colored::*;
use eyre::Result;
use std::path::Path;

use logbook::{CallSite, Logger, Severity};

use crate::cli::DocFormat;
use crate::commands::{load_logger, resolve_format, serialize_logger};

pub fn run(
    file: &Path,
    message: &str,
    severity: &str,
    function: Option<String>,
    file_name: Option<String>,
    line: Option<u32>,
    format: Option<DocFormat>,
) -> Result<()> {
    let format = resolve_format(file, format)?;
    let severity = Severity::parse(severity);
    let label = severity.to_string();

    let logger = if file.exists() {
        load_logger(file, format)?
    } else {
        Logger::new()
    };

    // An explicit origin needs both the file name and the line; the function
    // alone is not storable.
    let site = match (file_name, line) {
        (Some(name), Some(line)) => Some(CallSite {
            function,
            file: name,
            line,
        }),
        (None, None) => {
            if function.is_some() {
                eyre::bail!("--function requires --file-name and --line");
            }
            None
        }
        _ => eyre::bail!("--file-name and --line must be given together"),
    };

    match site {
        Some(site) => logger.log_with_site(severity, message, site),
        None => logger.log_at(severity, message),
    }
    logger.flush();

    serialize_logger(&logger, file, format)?;

    println!("{} Recorded {} event in {}", "✓".green(), label.cyan(), file.display());

    Ok(())
}
