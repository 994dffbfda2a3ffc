//! Logdesk CLI binary entrypoint.
//!
//! This is the main entry point for the `logdesk` command-line tool.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use logdesk_cli::cli::{Cli, Commands};
use logdesk_cli::commands::{DatesCommand, FilesCommand, QueryCommand};
use logdesk_cli::output::OutputFormat;
use logdesk_cli::CliError;
use logdesk_core::LogEngine;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::new(cli.format);
    let mut stdout = io::stdout().lock();

    match run(&cli, &format, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if format.is_json() {
                if let Err(write_err) = format.write_error(&mut stdout, &e) {
                    eprintln!("Error: {write_err}");
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(cli: &Cli, format: &OutputFormat, out: &mut W) -> Result<(), CliError> {
    let engine = LogEngine::new(cli.engine_config());

    match &cli.command {
        Commands::Query(args) => {
            let cmd = QueryCommand::new(&engine);
            cmd.execute(out, format, args)?;
        }
        Commands::Dates { target } => {
            let cmd = DatesCommand::new(&engine);
            cmd.execute(out, format, target)?;
        }
        Commands::Files { date, target } => {
            let cmd = FilesCommand::new(&engine);
            cmd.execute(out, format, date, target)?;
        }
    }

    out.flush()?;
    Ok(())
}
