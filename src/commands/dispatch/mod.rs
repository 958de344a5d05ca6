//! Command dispatch logic for wgraph

use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use wgraph_core::config::Settings;
use wgraph_core::error::Result;

mod command;

pub use command::{Command, CommandContext, NoCommand};

/// Settings from `--config` when given, else the user config directory
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}

pub fn run(cli: &Cli, settings: &Settings, start: Instant) -> Result<()> {
    debug!(elapsed = ?start.elapsed(), "load_settings");

    let ctx = CommandContext::new(cli, settings, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
