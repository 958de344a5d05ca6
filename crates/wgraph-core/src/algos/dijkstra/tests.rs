use super::*;
use crate::error::GraphError;
use crate::graph::parse_digraph;

fn build(n: usize, edges: &[(usize, usize, f64)]) -> WeightedDigraph {
    let mut g = WeightedDigraph::with_vertices(n).unwrap();
    for &(from, to, weight) in edges {
        g.add_edge(DirectedEdge::new(from, to, weight)).unwrap();
    }
    g
}

fn assert_no_relaxation_left(graph: &WeightedDigraph, tree: &ShortestPathTree) {
    for edge in graph.all_edges() {
        let from = tree.dist_to(edge.from());
        if from.is_finite() {
            assert!(
                tree.dist_to(edge.to()) <= from + edge.weight() + 1e-12,
                "edge {} can still be relaxed",
                edge
            );
        }
    }
}

/// Chain with a costly shortcut
#[test]
fn test_chain_with_shortcut() {
    let g = build(4, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0)]);
    let tree = dijkstra(&g, 0).unwrap();

    assert_eq!(tree.distances(), &[0.0, 1.0, 3.0, 4.0]);
    assert_eq!(tree.edge_to(3), Some(2));
    assert_eq!(tree.edge_to(2), Some(1));
    assert_eq!(tree.edge_to(1), Some(0));
    assert_eq!(tree.edge_to(0), None);
    assert_eq!(tree.path_to(3), Some(vec![0, 1, 2, 3]));
    assert_no_relaxation_left(&g, &tree);
}

/// Eight-vertex digraph with cycles and a decrease-key on vertex 5
#[test]
fn test_tiny_digraph() {
    let text = "8
4->5 .35
5->4 .35
4->7 .37
5->7 .28
7->5 .28
5->1 .32
0->4 .38
0->2 .26
7->3 .39
1->3 .29
2->7 .34
6->2 .40
3->6 .52
6->0 .58
6->4 .93
";
    let g = parse_digraph(text).unwrap();
    let tree = dijkstra(&g, 0).unwrap();

    let expected = [0.0, 1.05, 0.26, 0.99, 0.38, 0.73, 1.51, 0.60];
    for (v, want) in expected.iter().enumerate() {
        assert!(
            (tree.dist_to(v) - want).abs() < 1e-9,
            "dist_to[{}] = {} instead of {}",
            v,
            tree.dist_to(v),
            want
        );
    }
    assert_eq!(tree.path_to(6), Some(vec![0, 2, 7, 3, 6]));
    assert_eq!(tree.path_to(1), Some(vec![0, 4, 5, 1]));
    assert_no_relaxation_left(&g, &tree);
}

#[test]
fn test_unreachable_vertices_stay_infinite() {
    let g = build(4, &[(0, 1, 2.0), (2, 3, 1.0), (3, 0, 1.0)]);
    let tree = dijkstra(&g, 0).unwrap();

    assert_eq!(tree.dist_to(0), 0.0);
    assert_eq!(tree.dist_to(1), 2.0);
    assert!(tree.dist_to(2).is_infinite());
    assert!(!tree.has_path_to(3));
    assert_eq!(tree.edge_to(3), None);
    assert_eq!(tree.path_to(3), None);
    assert_eq!(tree.path_to(0), Some(vec![0]));
}

#[test]
fn test_source_out_of_range() {
    let g = build(2, &[(0, 1, 1.0)]);
    let err = dijkstra(&g, 2).unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument { .. }));

    let err = dijkstra(&WeightedDigraph::new(), 0).unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
}

#[test]
fn test_zero_weight_edges_and_self_loops() {
    let g = build(3, &[(0, 0, 0.0), (0, 1, 0.0), (1, 2, 0.0), (2, 1, 3.0)]);
    let tree = dijkstra(&g, 0).unwrap();
    assert_eq!(tree.distances(), &[0.0, 0.0, 0.0]);
    assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
}

#[test]
fn test_non_zero_source() {
    let g = build(4, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0)]);
    let tree = dijkstra(&g, 2).unwrap();
    assert_eq!(tree.source(), 2);
    assert_eq!(tree.dist_to(3), 1.0);
    assert!(!tree.has_path_to(0));
}

#[test]
fn test_display_and_json() {
    let g = build(3, &[(0, 1, 1.5)]);
    let tree = dijkstra(&g, 0).unwrap();
    assert_eq!(tree.to_string(), "Distances to: [0, 1.5, inf]");

    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["source"], 0);
    assert_eq!(json["dist_to"][1], 1.5);
    assert!(json["dist_to"][2].is_null());
    assert_eq!(json["edge_to"][1], 0);
    assert!(json["edge_to"][0].is_null());
}
