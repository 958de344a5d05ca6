use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algos::{kruskal, lazy_prim};
use crate::error::{GraphError, Result};
use crate::graph::{Edge, WeightedGraph};

/// Minimum spanning tree strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MstAlgorithm {
    #[default]
    Kruskal,
    Prim,
}

impl FromStr for MstAlgorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kruskal" => Ok(MstAlgorithm::Kruskal),
            "prim" => Ok(MstAlgorithm::Prim),
            other => Err(GraphError::invalid_argument(
                "algorithm",
                format!("unknown MST algorithm `{}` (expected: kruskal or prim)", other),
            )),
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MstAlgorithm::Kruskal => write!(f, "kruskal"),
            MstAlgorithm::Prim => write!(f, "prim"),
        }
    }
}

/// Edges accepted into a spanning tree, in acceptance order, with their total weight.
///
/// On a disconnected graph this is a spanning forest (Kruskal) or the tree of
/// vertex 0's component (Prim), with fewer than `V - 1` edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinimumSpanningTree {
    algorithm: MstAlgorithm,
    weight: f64,
    edges: Vec<Edge>,
}

impl MinimumSpanningTree {
    pub(crate) fn new(algorithm: MstAlgorithm) -> Self {
        Self {
            algorithm,
            weight: 0.0,
            edges: Vec::new(),
        }
    }

    /// Run the selected algorithm over `graph`
    pub fn compute(graph: &WeightedGraph, algorithm: MstAlgorithm) -> Result<Self> {
        match algorithm {
            MstAlgorithm::Kruskal => kruskal(graph),
            MstAlgorithm::Prim => lazy_prim(graph),
        }
    }

    pub(crate) fn accept(&mut self, edge: Edge) {
        self.weight += edge.weight();
        self.edges.push(edge);
    }

    pub fn algorithm(&self) -> MstAlgorithm {
        self.algorithm
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the tree reaches all `vertex_count` vertices
    pub fn spans(&self, vertex_count: usize) -> bool {
        self.edges.len() == vertex_count.saturating_sub(1)
    }
}

impl fmt::Display for MinimumSpanningTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MST weight: {}", self.weight)?;
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}
