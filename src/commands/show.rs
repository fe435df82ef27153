use colored::*;
use eyre::{Context, Result};
use std::fs;
use std::path::Path;

use logbook::{stringify, Event, Severity};

use crate::cli::DocFormat;
use crate::commands::{load_logger, resolve_format, STAMP_FORMAT};

pub fn run(file: &Path, format: Option<DocFormat>, brief: bool) -> Result<()> {
    let format = resolve_format(file, format)?;

    if brief {
        if format != DocFormat::Xml {
            eyre::bail!("--brief only applies to XML documents");
        }
        let text = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
        let lines = stringify(&text).with_context(|| format!("Malformed log document: {}", file.display()))?;
        print!("{lines}");
        return Ok(());
    }

    let logger = load_logger(file, format)?;
    let events = logger.events();

    println!(
        "{} {} ({} events)",
        "📖".blue(),
        file.display().to_string().bold(),
        events.len()
    );
    if let Some(stamp) = logger.update_date() {
        println!("  last updated {}", stamp.format(STAMP_FORMAT).to_string().dimmed());
    }
    println!();

    if events.is_empty() {
        println!("  {}", "(no events)".dimmed());
        return Ok(());
    }

    for event in &events {
        print_event(event);
    }

    Ok(())
}

fn print_event(event: &Event) {
    let stamp = match event.timestamp() {
        Some(stamp) => stamp.format(STAMP_FORMAT).to_string(),
        None => "-".to_string(),
    };

    println!(
        "  {}, {}: {}",
        stamp.dimmed(),
        severity_label(event.severity()),
        event.message()
    );

    if let Some(file) = event.file() {
        let line = event.line().map(|line| format!(":{line}")).unwrap_or_default();
        let function = event.function().map(|function| format!(" in {function}")).unwrap_or_default();
        println!("      {}", format!("{file}{line}{function}").dimmed());
    }
}

fn severity_label(severity: &Severity) -> ColoredString {
    let label = severity.to_string();
    match severity {
        Severity::Fatal => label.magenta(),
        Severity::Error => label.red(),
        Severity::Warning => label.yellow(),
        Severity::Information => label.green(),
        Severity::Debugging => label.white(),
        Severity::Undefined => label.cyan(),
        Severity::Custom(_) => label.blue(),
    }
}
