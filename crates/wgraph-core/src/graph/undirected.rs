use std::fmt;

use crate::error::Result;
use crate::graph::{empty_adjacency, Edge, GraphBuilder};
use crate::{bail_state, ensure_vertex};

/// An undirected edge-weighted graph.
///
/// Edges live once in an arena; each endpoint's adjacency list holds the
/// arena slot, so both endpoints see the same edge value.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
    initialized: bool,
}

impl WeightedGraph {
    /// Create an uninitialized graph. Call [`GraphBuilder::initialize`] before adding edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph already initialized with `vertex_count` vertices
    pub fn with_vertices(vertex_count: usize) -> Result<Self> {
        let mut graph = Self::new();
        graph.initialize(vertex_count)?;
        Ok(graph)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Edges incident to `v` in insertion order.
    /// A self-loop appears twice. Out-of-range vertices have no edges.
    pub fn adjacent(&self, v: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&slot| &self.edges[slot])
    }

    /// Every adjacency list concatenated by vertex index.
    ///
    /// Each edge is yielded twice, once from each endpoint. Consumers that
    /// need every edge once should use [`WeightedGraph::unique_edges`].
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        (0..self.adjacency.len()).flat_map(move |v| self.adjacent(v))
    }

    /// Every edge exactly once, in insertion order
    pub fn unique_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Number of adjacency entries at `v`
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency.get(v).map_or(0, Vec::len)
    }
}

impl GraphBuilder for WeightedGraph {
    type Edge = Edge;

    fn initialize(&mut self, vertex_count: usize) -> Result<()> {
        if self.initialized {
            bail_state!("a graph can be initialized only once");
        }
        self.adjacency = empty_adjacency(vertex_count)?;
        self.initialized = true;
        Ok(())
    }

    fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if !self.initialized {
            bail_state!("the graph must be initialized before adding edges");
        }
        let v = edge.either();
        let w = edge.other(v);
        let count = self.adjacency.len();
        ensure_vertex!(v, count);
        ensure_vertex!(w, count);

        let slot = self.edges.len();
        self.edges.push(edge);
        self.adjacency[v].push(slot);
        self.adjacency[w].push(slot);
        Ok(())
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl fmt::Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Vertices: {}, Edges: {}",
            self.vertex_count(),
            self.edge_count()
        )?;
        for v in 0..self.vertex_count() {
            let edges: Vec<String> = self.adjacent(v).map(Edge::to_string).collect();
            writeln!(f, "[{}] => [{}]", v, edges.join(", "))?;
        }
        Ok(())
    }
}
