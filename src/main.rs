use clap::Parser;
use eyre::{Context, Result};
use log::debug;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn setup_logging(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    // RUST_LOG takes precedence over the flag-derived filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Show { file, format, brief } => commands::show::run(&file, format, brief),
        Commands::Convert { input, output, from, to } => commands::convert::run(&input, &output, from, to),
        Commands::Record {
            file,
            message,
            severity,
            function,
            file_name,
            line,
            format,
        } => commands::record::run(&file, &message, &severity, function, file_name, line, format),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);
    debug!("logbook {} starting", env!("GIT_DESCRIBE"));

    run(cli).context("Command failed")?;

    Ok(())
}
