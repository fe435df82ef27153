use colored::*;
use eyre::Result;
use std::path::Path;

use crate::cli::DocFormat;
use crate::commands::{load_logger, resolve_format, serialize_logger};

pub fn run(input: &Path, output: &Path, from: Option<DocFormat>, to: Option<DocFormat>) -> Result<()> {
    let from = resolve_format(input, from)?;
    let to = resolve_format(output, to)?;

    let logger = load_logger(input, from)?;
    let count = logger.events().len();

    serialize_logger(&logger, output, to)?;

    println!(
        "{} Converted {} ({} events) to {}",
        "✓".green(),
        input.display(),
        count,
        output.display()
    );

    Ok(())
}
