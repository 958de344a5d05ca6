//! `wgraph topo-sort` - depth-first topological order

use crate::cli::TopoSortArgs;
use crate::commands::dispatch::CommandContext;
use wgraph_core::algos::topological_sort;
use wgraph_core::error::Result;
use wgraph_core::graph::load_digraph;

pub fn execute(ctx: &CommandContext, args: &TopoSortArgs) -> Result<()> {
    let graph = load_digraph(&args.file)?;
    ctx.emit(&topological_sort(&graph))
}
