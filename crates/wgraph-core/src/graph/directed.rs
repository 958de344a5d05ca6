use std::fmt;

use crate::error::Result;
use crate::graph::{empty_adjacency, DirectedEdge, GraphBuilder};
use crate::{bail_state, ensure_vertex};

/// A directed edge-weighted graph. Each edge is stored at its source vertex only.
#[derive(Debug, Clone, Default)]
pub struct WeightedDigraph {
    adjacency: Vec<Vec<DirectedEdge>>,
    edge_count: usize,
    initialized: bool,
}

impl WeightedDigraph {
    /// Create an uninitialized digraph. Call [`GraphBuilder::initialize`] before adding edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a digraph already initialized with `vertex_count` vertices
    pub fn with_vertices(vertex_count: usize) -> Result<Self> {
        let mut graph = Self::new();
        graph.initialize(vertex_count)?;
        Ok(graph)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Edges leaving `v` in insertion order. Out-of-range vertices have no edges.
    pub fn adjacent(&self, v: usize) -> impl Iterator<Item = &DirectedEdge> + '_ {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[]).iter()
    }

    /// Every edge once, grouped by source vertex
    pub fn all_edges(&self) -> impl Iterator<Item = &DirectedEdge> + '_ {
        self.adjacency.iter().flatten()
    }

    /// Number of edges leaving `v`
    pub fn out_degree(&self, v: usize) -> usize {
        self.adjacency.get(v).map_or(0, Vec::len)
    }
}

impl GraphBuilder for WeightedDigraph {
    type Edge = DirectedEdge;

    fn initialize(&mut self, vertex_count: usize) -> Result<()> {
        if self.initialized {
            bail_state!("a graph can be initialized only once");
        }
        self.adjacency = empty_adjacency(vertex_count)?;
        self.initialized = true;
        Ok(())
    }

    fn add_edge(&mut self, edge: DirectedEdge) -> Result<()> {
        if !self.initialized {
            bail_state!("the graph must be initialized before adding edges");
        }
        let count = self.adjacency.len();
        ensure_vertex!(edge.from(), count);
        ensure_vertex!(edge.to(), count);

        self.adjacency[edge.from()].push(edge);
        self.edge_count += 1;
        Ok(())
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl fmt::Display for WeightedDigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Vertices: {}, Edges: {}",
            self.vertex_count(),
            self.edge_count()
        )?;
        for (v, edges) in self.adjacency.iter().enumerate() {
            let edges: Vec<String> = edges.iter().map(DirectedEdge::to_string).collect();
            writeln!(f, "[{}] => [{}]", v, edges.join(", "))?;
        }
        Ok(())
    }
}
