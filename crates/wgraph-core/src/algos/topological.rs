//! Depth-first topological ordering
//!
//! Vertices are ordered by reverse depth-first postorder, starting a new
//! search from every unvisited vertex in index order. The traversal keeps an
//! explicit stack of (vertex, remaining out-edges) frames, so deep graphs do
//! not grow the call stack.
//!
//! The input must be acyclic. A cyclic digraph still yields every vertex
//! exactly once, but the order then satisfies no edge constraint.

use std::fmt;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::graph::{GraphBuilder, WeightedDigraph};
use crate::trace_time;

/// Vertices in topological order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologicalOrder {
    order: Vec<usize>,
}

impl TopologicalOrder {
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }

    /// Position of `v` in the order
    pub fn position_of(&self, v: usize) -> Option<usize> {
        self.order.iter().position(|&u| u == v)
    }
}

impl fmt::Display for TopologicalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices: Vec<String> = self.order.iter().map(usize::to_string).collect();
        write!(f, "Sorted vertices: {}", vertices.join(","))
    }
}

/// Topologically sort an acyclic digraph
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn topological_sort(graph: &WeightedDigraph) -> TopologicalOrder {
    let start = Instant::now();
    let n = graph.vertex_count();
    let mut marked = vec![false; n];
    let mut postorder = Vec::with_capacity(n);
    let mut stack = Vec::new();

    for root in 0..n {
        if marked[root] {
            continue;
        }
        marked[root] = true;
        stack.push((root, graph.adjacent(root)));

        while let Some((v, edges)) = stack.last_mut() {
            match edges.find(|e| !marked[e.to()]) {
                Some(edge) => {
                    let w = edge.to();
                    marked[w] = true;
                    stack.push((w, graph.adjacent(w)));
                }
                None => {
                    postorder.push(*v);
                    stack.pop();
                }
            }
        }
    }

    postorder.reverse();
    debug!(vertices = postorder.len(), "topological sort done");
    trace_time!(start, "topological_sort");
    TopologicalOrder { order: postorder }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedEdge;

    fn build(n: usize, edges: &[(usize, usize)]) -> WeightedDigraph {
        let mut g = WeightedDigraph::with_vertices(n).unwrap();
        for &(from, to) in edges {
            g.add_edge(DirectedEdge::new(from, to, 1.0)).unwrap();
        }
        g
    }

    fn assert_respects_edges(graph: &WeightedDigraph, order: &TopologicalOrder) {
        assert_eq!(order.order().len(), graph.vertex_count());
        for edge in graph.all_edges() {
            let from = order.position_of(edge.from()).unwrap();
            let to = order.position_of(edge.to()).unwrap();
            assert!(from < to, "{} violates the order {}", edge, order);
        }
    }

    #[test]
    fn test_triangle() {
        let g = build(3, &[(0, 1), (1, 2), (0, 2)]);
        let order = topological_sort(&g);
        assert_eq!(order.order(), &[0, 1, 2]);
        assert_respects_edges(&g, &order);
    }

    #[test]
    fn test_diamond() {
        //     0
        //    / \
        //   1   2
        //    \ /
        //     3
        let g = build(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let order = topological_sort(&g);
        assert_eq!(order.order(), &[0, 2, 1, 3]);
        assert_respects_edges(&g, &order);
    }

    #[test]
    fn test_roots_visited_in_index_order() {
        // 3 -> 0 is discovered only when the search restarts at 3
        let g = build(5, &[(3, 0), (1, 2), (4, 1)]);
        let order = topological_sort(&g);
        assert_respects_edges(&g, &order);
        assert_eq!(order.order(), &[4, 3, 1, 2, 0]);
    }

    #[test]
    fn test_larger_dag() {
        let g = build(
            13,
            &[
                (0, 1),
                (0, 5),
                (0, 6),
                (2, 0),
                (2, 3),
                (3, 5),
                (5, 4),
                (6, 4),
                (6, 9),
                (7, 6),
                (8, 7),
                (9, 10),
                (9, 11),
                (9, 12),
                (11, 12),
            ],
        );
        assert_respects_edges(&g, &topological_sort(&g));
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let n = 200_000;
        let mut g = WeightedDigraph::with_vertices(n).unwrap();
        for v in (1..n).rev() {
            g.add_edge(DirectedEdge::new(v - 1, v, 1.0)).unwrap();
        }
        let order = topological_sort(&g).into_vec();
        assert_eq!(order.len(), n);
        assert!(order.windows(2).all(|pair| pair[0] + 1 == pair[1]));
    }

    #[test]
    fn test_cycle_still_visits_every_vertex_once() {
        let g = build(3, &[(0, 1), (1, 2), (2, 0)]);
        let mut order = topological_sort(&g).into_vec();
        order.sort();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_graph() {
        assert!(topological_sort(&WeightedDigraph::new()).order().is_empty());
    }

    #[test]
    fn test_display() {
        let g = build(3, &[(0, 1), (1, 2), (0, 2)]);
        assert_eq!(topological_sort(&g).to_string(), "Sorted vertices: 0,1,2");
    }
}
