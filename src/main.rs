//! wgraph - edge-weighted graph algorithms from the command line
//!
//! Loads a graph from a text file and runs Dijkstra shortest paths,
//! Kruskal or lazy Prim spanning trees, or a topological sort over it.

mod cli;
mod commands;

use std::env;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use wgraph_core::config::Settings;
use wgraph_core::error::{ExitCode as GraphExitCode, GraphError};
use wgraph_core::format::OutputFormat;
use wgraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap can fail before `Cli.format` exists; honour a JSON request
            // from the raw command line or the settings file.
            if parse_errors_as_json() {
                let graph_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        GraphError::UsageError(err.to_string())
                    }
                    _ => GraphError::Other(err.to_string()),
                };

                eprintln!("{}", graph_error.to_json());
                return ExitCode::from(graph_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let settings = commands::dispatch::load_settings(&cli);

    // `--verbose` outranks a level from the settings file
    let log_level = cli.log_level.clone().or_else(|| {
        settings
            .as_ref()
            .ok()
            .filter(|_| !cli.verbose)
            .and_then(|settings| settings.log_level.clone())
    });
    if let Err(e) = logging::init_tracing(cli.verbose, log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let format = cli
        .format
        .or_else(|| settings.as_ref().ok().map(|settings| settings.format))
        .unwrap_or_default();

    let result = settings.and_then(|settings| commands::dispatch::run(&cli, &settings, start));

    match result {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// An explicit `--format` on argv wins, else the settings file decides
fn parse_errors_as_json() -> bool {
    match argv_value("--format") {
        Some(format) => format == "json",
        None => settings_request_json(),
    }
}

fn settings_request_json() -> bool {
    let settings = match argv_value("--config").or_else(|| env::var("WGRAPH_CONFIG").ok()) {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => Settings::load(),
    };
    settings.is_ok_and(|settings| settings.format == OutputFormat::Json)
}

/// Value of `--name value` or `--name=value` on the raw command line
fn argv_value(name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == name {
            return args.next();
        }
        if let Some(value) = arg.strip_prefix(&prefix) {
            return Some(value.to_string());
        }
    }
    None
}
