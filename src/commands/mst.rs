//! `wgraph mst` - minimum spanning tree by Kruskal or lazy Prim

use tracing::info;

use crate::cli::MstArgs;
use crate::commands::dispatch::CommandContext;
use wgraph_core::algos::MinimumSpanningTree;
use wgraph_core::error::Result;
use wgraph_core::graph::{load_graph, GraphBuilder};

pub fn execute(ctx: &CommandContext, args: &MstArgs) -> Result<()> {
    let graph = load_graph(&args.file)?;
    let algorithm = args.algorithm.unwrap_or(ctx.settings.mst_algorithm);
    let tree = MinimumSpanningTree::compute(&graph, algorithm)?;

    if !tree.spans(graph.vertex_count()) {
        info!(
            edges = tree.len(),
            vertices = graph.vertex_count(),
            "graph is disconnected, result is a partial tree"
        );
    }

    ctx.emit(&tree)
}
