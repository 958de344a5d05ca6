//! Graph algorithm implementations
//!
//! Each algorithm takes a finished graph by shared reference, owns its own
//! queue or union-find for the length of the run, and returns a result value:
//! - `dijkstra`: single-source shortest paths over a digraph
//! - `kruskal` / `prim`: minimum spanning trees over an undirected graph
//! - `topological`: reverse-postorder ordering of a DAG

pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod spanning_tree;
pub mod topological;

pub use dijkstra::{dijkstra, ShortestPathTree};
pub use kruskal::kruskal;
pub use prim::lazy_prim;
pub use spanning_tree::{MinimumSpanningTree, MstAlgorithm};
pub use topological::{topological_sort, TopologicalOrder};
