use std::time::Instant;

use tracing::debug;

use crate::algos::{MinimumSpanningTree, MstAlgorithm};
use crate::error::Result;
use crate::graph::{GraphBuilder, WeightedGraph};
use crate::pq::BinaryHeapPQ;
use crate::trace_time;

/// Lazy Prim's minimum spanning tree, grown from vertex 0.
///
/// Crossing edges stay queued after both endpoints join the tree and are
/// discarded when dequeued. Stops at `V - 1` accepted edges or when the
/// queue runs dry, so only vertex 0's component is covered.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn lazy_prim(graph: &WeightedGraph) -> Result<MinimumSpanningTree> {
    let start = Instant::now();
    let n = graph.vertex_count();
    let target = n.saturating_sub(1);
    let mut tree = MinimumSpanningTree::new(MstAlgorithm::Prim);
    if n == 0 {
        return Ok(tree);
    }

    let mut in_tree = vec![false; n];
    let mut pq = BinaryHeapPQ::min();
    let mut stale = 0usize;

    in_tree[0] = true;
    for edge in graph.adjacent(0) {
        pq.enqueue(*edge, edge.weight());
    }

    while tree.len() < target && !pq.is_empty() {
        let edge = pq.dequeue()?.element;
        let v = edge.either();
        let w = edge.other(v);
        if in_tree[v] && in_tree[w] {
            stale += 1;
            continue;
        }

        let added = if in_tree[v] { w } else { v };
        tree.accept(edge);
        in_tree[added] = true;

        for next in graph.adjacent(added) {
            if !in_tree[next.other(added)] {
                pq.enqueue(*next, next.weight());
            }
        }
    }

    debug!(
        accepted = tree.len(),
        weight = tree.weight(),
        stale,
        "prim done"
    );
    trace_time!(start, "lazy_prim");
    Ok(tree)
}
