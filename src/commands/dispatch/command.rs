//! Command trait and context for dispatching commands

use std::fmt::Display;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{mst, shortest_path, show, topo_sort};
use wgraph_core::config::Settings;
use wgraph_core::error::Result;
use wgraph_core::format::{self, OutputFormat};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub settings: &'a Settings,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, settings: &'a Settings, start: Instant) -> Self {
        Self {
            cli,
            settings,
            start,
        }
    }

    /// `--format` if given, else the settings file's format
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.settings.format)
    }

    /// Render a result to stdout in the active format
    pub fn emit<T>(&self, value: &T) -> Result<()>
    where
        T: Display + Serialize,
    {
        let output = format::render(value, self.format())?;
        if output.ends_with('\n') {
            print!("{}", output);
        } else {
            println!("{}", output);
        }
        debug!(elapsed = ?self.start.elapsed(), "emit");
        Ok(())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if ctx.cli.quiet {
            return Ok(());
        }
        println!("wgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths, spanning trees and topological order for weighted graphs.");
        println!();
        println!("Run `wgraph --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Show(args) => show::execute(ctx, args),
            Commands::ShortestPath(args) => shortest_path::execute(ctx, args),
            Commands::Mst(args) => mst::execute(ctx, args),
            Commands::TopoSort(args) => topo_sort::execute(ctx, args),
        }
    }
}
