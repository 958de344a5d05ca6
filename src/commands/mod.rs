//! CLI commands for wgraph

pub mod dispatch;
pub mod mst;
pub mod shortest_path;
pub mod show;
pub mod topo_sort;
