//! Edge-weighted graph representations
//!
//! Vertices are dense integers in `[0, V)`. A graph is initialized once with
//! its vertex count, receives edges, and is then handed read-only to the
//! algorithms in [`crate::algos`]:
//! - [`WeightedGraph`]: undirected, every edge listed at both endpoints
//! - [`WeightedDigraph`]: directed, every edge listed at its source
//! - [`loader`]: builds either kind from the line-oriented text format

pub mod directed;
pub mod edge;
pub mod loader;
pub mod undirected;

use crate::error::{GraphError, Result};

pub use directed::WeightedDigraph;
pub use edge::{DirectedEdge, Edge};
pub use loader::{load_digraph, load_graph, parse_digraph, parse_graph};
pub use undirected::WeightedGraph;

/// Construction interface shared by both graph kinds
pub trait GraphBuilder {
    type Edge;

    /// Fix the vertex count. Fails with `InvalidState` on a second call.
    fn initialize(&mut self, vertex_count: usize) -> Result<()>;

    /// Append an edge. Fails if an endpoint is outside `[0, V)`.
    fn add_edge(&mut self, edge: Self::Edge) -> Result<()>;

    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;
}

/// `vertex_count` empty adjacency lists.
/// Fails with `InvalidArgument` when the lists cannot be allocated.
pub(crate) fn empty_adjacency<T>(vertex_count: usize) -> Result<Vec<Vec<T>>> {
    let mut adjacency = Vec::new();
    adjacency.try_reserve_exact(vertex_count).map_err(|e| {
        GraphError::invalid_argument(
            "vertex_count",
            format!("cannot allocate {} vertices: {}", vertex_count, e),
        )
    })?;
    adjacency.resize_with(vertex_count, Vec::new);
    Ok(adjacency)
}
