use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// On-disk log document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocFormat {
    /// XML log document
    Xml,
    /// JSON log document
    Json,
}

impl DocFormat {
    /// Infer the document format from a file extension.
    pub fn from_path(path: &Path) -> Option<DocFormat> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("xml") => Some(DocFormat::Xml),
            Some("json") => Some(DocFormat::Json),
            _ => None,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "logbook",
    about = "Structured event log documents - record, inspect, convert",
    version = env!("GIT_DESCRIBE")
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the events in a log document
    Show {
        /// Log document to read
        file: PathBuf,

        /// Document format (inferred from the extension if omitted)
        #[arg(long, short = 'f', value_enum)]
        format: Option<DocFormat>,

        /// One raw line per event, without parsing timestamps (XML only)
        #[arg(long)]
        brief: bool,
    },

    /// Convert a log document between formats
    Convert {
        /// Input document
        input: PathBuf,

        /// Output document
        output: PathBuf,

        /// Input format (inferred from the extension if omitted)
        #[arg(long, value_enum)]
        from: Option<DocFormat>,

        /// Output format (inferred from the extension if omitted)
        #[arg(long, value_enum)]
        to: Option<DocFormat>,
    },

    /// Append an event to a log document
    Record {
        /// Log document to append to (created if missing)
        file: PathBuf,

        /// Event message
        message: String,

        /// Severity label (Debugging, Information, Warning, Error, Fatal, or a custom label)
        #[arg(long, short = 's', default_value = "Information")]
        severity: String,

        /// Originating function recorded with the event
        #[arg(long)]
        function: Option<String>,

        /// Originating file name recorded with the event
        #[arg(long)]
        file_name: Option<String>,

        /// Originating line number recorded with the event
        #[arg(long)]
        line: Option<u32>,

        /// Document format (inferred from the extension if omitted)
        #[arg(long, short = 'f', value_enum)]
        format: Option<DocFormat>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
