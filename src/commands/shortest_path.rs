//! `wgraph shortest-path` - Dijkstra from one source vertex

use crate::cli::ShortestPathArgs;
use crate::commands::dispatch::CommandContext;
use wgraph_core::algos::dijkstra;
use wgraph_core::error::Result;
use wgraph_core::graph::load_digraph;

pub fn execute(ctx: &CommandContext, args: &ShortestPathArgs) -> Result<()> {
    let graph = load_digraph(&args.file)?;
    let source = args.source.unwrap_or(ctx.settings.default_source);
    let tree = dijkstra(&graph, source)?;
    ctx.emit(&tree)
}
