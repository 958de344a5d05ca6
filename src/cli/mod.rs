//! CLI argument parsing for wgraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{MstArgs, ShortestPathArgs, ShowArgs, TopoSortArgs};
use parse::parse_format;
use wgraph_core::format::OutputFormat;

/// wgraph - shortest paths, spanning trees and topological order
#[derive(Parser, Debug)]
#[command(name = "wgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json (defaults to the settings file)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, a level such as `debug` or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Settings file to use instead of the user config directory
    #[arg(long, global = true, env = "WGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a graph's adjacency lists
    Show(ShowArgs),

    /// Single-source shortest paths over a directed graph (Dijkstra)
    ShortestPath(ShortestPathArgs),

    /// Minimum spanning tree of an undirected graph
    Mst(MstArgs),

    /// Topological order of a directed acyclic graph
    TopoSort(TopoSortArgs),
}
