use std::time::Instant;

use tracing::debug;

use crate::algos::{MinimumSpanningTree, MstAlgorithm};
use crate::error::Result;
use crate::graph::{GraphBuilder, WeightedGraph};
use crate::pq::BinaryHeapPQ;
use crate::trace_time;
use crate::union_find::UnionFind;

/// Kruskal's minimum spanning tree.
///
/// Every adjacency entry goes into a min queue keyed by weight, so each
/// edge is queued twice; the second copy is rejected by the union-find
/// cycle check. Stops at `V - 1` accepted edges or when the queue runs dry.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn kruskal(graph: &WeightedGraph) -> Result<MinimumSpanningTree> {
    let start = Instant::now();
    let target = graph.vertex_count().saturating_sub(1);

    let mut pq = BinaryHeapPQ::min();
    for edge in graph.all_edges() {
        pq.enqueue(*edge, edge.weight());
    }

    let mut uf = UnionFind::new(graph.vertex_count());
    let mut tree = MinimumSpanningTree::new(MstAlgorithm::Kruskal);

    while tree.len() < target && !pq.is_empty() {
        let edge = pq.dequeue()?.element;
        let v = edge.either();
        let w = edge.other(v);
        if uf.connected(v, w) {
            continue;
        }
        uf.union(v, w);
        tree.accept(edge);
    }

    if tree.len() < target {
        debug!(
            accepted = tree.len(),
            needed = target,
            "graph is disconnected, returning a spanning forest"
        );
    }
    debug!(accepted = tree.len(), weight = tree.weight(), "kruskal done");
    trace_time!(start, "kruskal");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn build(n: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph {
        let mut g = WeightedGraph::with_vertices(n).unwrap();
        for &(v, w, weight) in edges {
            g.add_edge(Edge::new(v, w, weight)).unwrap();
        }
        g
    }

    #[test]
    fn test_square_with_tail() {
        let g = build(4, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0)]);
        let tree = kruskal(&g).unwrap();

        assert_eq!(tree.algorithm(), MstAlgorithm::Kruskal);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.weight(), 4.0);

        let mut endpoints: Vec<(usize, usize)> = tree.edges().iter().map(Edge::endpoints).collect();
        endpoints.sort();
        assert_eq!(endpoints, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_edges_accepted_in_weight_order() {
        let g = build(4, &[(0, 1, 3.0), (1, 2, 1.0), (2, 3, 2.0), (3, 0, 4.0)]);
        let tree = kruskal(&g).unwrap();
        let weights: Vec<f64> = tree.edges().iter().map(Edge::weight).collect();
        assert_eq!(weights, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_disconnected_graph_yields_forest() {
        let g = build(5, &[(0, 1, 1.0), (2, 3, 2.0)]);
        let tree = kruskal(&g).unwrap();
        assert_eq!(tree.len(), 2);
        assert!(!tree.spans(5));
        assert_eq!(tree.weight(), 3.0);
    }

    #[test]
    fn test_empty_and_single_vertex() {
        assert!(kruskal(&WeightedGraph::with_vertices(0).unwrap()).unwrap().is_empty());
        assert!(kruskal(&WeightedGraph::new()).unwrap().is_empty());

        let single = build(1, &[(0, 0, 7.0)]);
        let tree = kruskal(&single).unwrap();
        assert!(tree.is_empty());
        assert!(tree.spans(1));
    }

    #[test]
    fn test_self_loops_and_parallel_edges() {
        let g = build(3, &[(0, 0, 0.1), (0, 1, 5.0), (0, 1, 2.0), (1, 2, 1.0), (2, 2, 0.0)]);
        let tree = kruskal(&g).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.weight(), 3.0);
    }
}
