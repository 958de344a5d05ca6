use std::fmt;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{DirectedEdge, GraphBuilder, WeightedDigraph};
use crate::pq::IndexedBinaryHeapPQ;
use crate::{bail_invalid, trace_time};

/// Shortest distances and predecessors from a single source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathTree {
    source: usize,
    /// `+inf` for unreachable vertices (serialized as `null`)
    dist_to: Vec<f64>,
    /// Predecessor vertex on a shortest path; `None` for the source and unreachable vertices
    edge_to: Vec<Option<usize>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance to every vertex, indexed by vertex
    pub fn distances(&self) -> &[f64] {
        &self.dist_to
    }

    /// Predecessor of every vertex, indexed by vertex
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.edge_to
    }

    /// Distance from the source to `v`; `+inf` if unreachable or out of range
    pub fn dist_to(&self, v: usize) -> f64 {
        self.dist_to.get(v).copied().unwrap_or(f64::INFINITY)
    }

    pub fn edge_to(&self, v: usize) -> Option<usize> {
        self.edge_to.get(v).copied().flatten()
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to(v).is_finite()
    }

    /// Vertices on a shortest path from the source to `v`, both included
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.has_path_to(v) {
            return None;
        }
        let mut path = vec![v];
        let mut current = v;
        while let Some(prev) = self.edge_to(current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Relax `edge` against the current distances.
    /// Returns true when `edge.to()` got a shorter distance.
    fn relax(&mut self, edge: &DirectedEdge) -> bool {
        let v = edge.from();
        let w = edge.to();
        let candidate = self.dist_to[v] + edge.weight();
        if candidate < self.dist_to[w] {
            self.dist_to[w] = candidate;
            self.edge_to[w] = Some(v);
            true
        } else {
            false
        }
    }
}

impl fmt::Display for ShortestPathTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let distances: Vec<String> = self.dist_to.iter().map(f64::to_string).collect();
        write!(f, "Distances to: [{}]", distances.join(", "))
    }
}

/// Dijkstra's single-source shortest paths.
///
/// Edge weights must be non-negative; this is not checked and negative
/// weights give wrong distances. Each improved vertex is either enqueued or
/// has its queue priority decreased in place, so no vertex is queued twice.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra(graph: &WeightedDigraph, source: usize) -> Result<ShortestPathTree> {
    let start = Instant::now();
    let n = graph.vertex_count();
    if source >= n {
        bail_invalid!(
            "source",
            format!("vertex {} is not in a graph with {} vertices", source, n)
        );
    }

    let mut tree = ShortestPathTree {
        source,
        dist_to: vec![f64::INFINITY; n],
        edge_to: vec![None; n],
    };
    tree.dist_to[source] = 0.0;

    let mut pq = IndexedBinaryHeapPQ::min();
    pq.enqueue(source, 0.0)?;

    let mut relaxations = 0usize;
    while !pq.is_empty() {
        let v = pq.dequeue()?.element;
        for edge in graph.adjacent(v) {
            if !tree.relax(edge) {
                continue;
            }
            relaxations += 1;
            let w = edge.to();
            if pq.contains(&w) {
                pq.update(&w, tree.dist_to[w])?;
            } else {
                pq.enqueue(w, tree.dist_to[w])?;
            }
        }
    }

    debug!(
        reachable = tree.dist_to.iter().filter(|d| d.is_finite()).count(),
        relaxations,
        "dijkstra done"
    );
    trace_time!(start, "dijkstra");
    Ok(tree)
}

#[cfg(test)]
mod tests;
