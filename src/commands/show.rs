//! `wgraph show` - print a graph as loaded

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::cli::ShowArgs;
use crate::commands::dispatch::CommandContext;
use wgraph_core::error::Result;
use wgraph_core::graph::{load_digraph, load_graph, GraphBuilder};

/// A loaded graph: its adjacency rendering for humans, its edges for JSON
#[derive(Debug, Serialize)]
pub struct GraphSummary<E: Serialize> {
    directed: bool,
    vertices: usize,
    edges: usize,
    edge_list: Vec<E>,
    #[serde(skip)]
    rendered: String,
}

impl<E: Serialize> fmt::Display for GraphSummary<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl<E: Serialize> GraphSummary<E> {
    fn new<G>(graph: &G, directed: bool, edge_list: Vec<E>) -> Self
    where
        G: GraphBuilder + fmt::Display,
    {
        Self {
            directed,
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            edge_list,
            rendered: graph.to_string(),
        }
    }
}

pub fn execute(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
    if args.directed {
        let graph = load_digraph(&args.file)?;
        debug!(vertices = graph.vertex_count(), "loaded digraph");
        let edges: Vec<_> = graph.all_edges().copied().collect();
        ctx.emit(&GraphSummary::new(&graph, true, edges))
    } else {
        let graph = load_graph(&args.file)?;
        debug!(vertices = graph.vertex_count(), "loaded graph");
        let edges: Vec<_> = graph.unique_edges().copied().collect();
        ctx.emit(&GraphSummary::new(&graph, false, edges))
    }
}
