//! wgraph core library
//!
//! Edge-weighted graphs, binary heap priority queues, union-find, and the
//! classic algorithms built on them: Dijkstra shortest paths, Kruskal and
//! lazy Prim minimum spanning trees, and depth-first topological sort.

pub mod algos;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod pq;
pub mod union_find;
