use std::path::PathBuf;

use clap::Args;

use super::parse::parse_mst_algorithm;
use wgraph_core::algos::MstAlgorithm;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Graph file
    pub file: PathBuf,

    /// Read the file as a directed graph (`v->w weight` lines)
    #[arg(long, short)]
    pub directed: bool,
}

#[derive(Args, Debug)]
pub struct ShortestPathArgs {
    /// Directed graph file
    pub file: PathBuf,

    /// Source vertex (defaults to the settings file, then 0)
    #[arg(long, short)]
    pub source: Option<usize>,
}

#[derive(Args, Debug)]
pub struct MstArgs {
    /// Undirected graph file
    pub file: PathBuf,

    /// Algorithm: kruskal or prim (defaults to the settings file)
    #[arg(long, short, value_parser = parse_mst_algorithm)]
    pub algorithm: Option<MstAlgorithm>,
}

#[derive(Args, Debug)]
pub struct TopoSortArgs {
    /// Directed acyclic graph file
    pub file: PathBuf,
}
