//! Line-oriented graph text format
//!
//! ```text
//! 5            << number of vertices
//! 1-2 23.3     << undirected edge `v-w weight`
//! 2->4 0.21    << directed edge `v->w weight` (digraph files only)
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Vertex indices are
//! zero-based.

use std::fs;
use std::path::Path;
use std::time::Instant;

use regex::Regex;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{DirectedEdge, Edge, GraphBuilder, WeightedDigraph, WeightedGraph};
use crate::trace_time;

const EDGE_LINE: &str =
    r"^(\d+)\s*(->|-)\s*(\d+)\s+([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)$";

/// Parse undirected graph text (`v-w weight` edges)
pub fn parse_graph(text: &str) -> Result<WeightedGraph> {
    let mut graph = WeightedGraph::new();
    parse_into(&mut graph, text, "-", Edge::new)?;
    Ok(graph)
}

/// Parse directed graph text (`v->w weight` edges)
pub fn parse_digraph(text: &str) -> Result<WeightedDigraph> {
    let mut graph = WeightedDigraph::new();
    parse_into(&mut graph, text, "->", DirectedEdge::new)?;
    Ok(graph)
}

/// Read and parse an undirected graph file
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<WeightedGraph> {
    let text = read(path)?;
    parse_graph(&text)
}

/// Read and parse a directed graph file
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_digraph(path: &Path) -> Result<WeightedDigraph> {
    let text = read(path)?;
    parse_digraph(&text)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| GraphError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_into<G, F>(graph: &mut G, text: &str, separator: &str, make_edge: F) -> Result<()>
where
    G: GraphBuilder,
    F: Fn(usize, usize, f64) -> G::Edge,
{
    let start = Instant::now();
    let edge_re = Regex::new(EDGE_LINE)
        .map_err(|e| GraphError::Other(format!("failed to compile edge pattern: {}", e)))?;

    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| GraphError::parse(1, "missing vertex count"))?;
    let vertex_count: usize = header.parse().map_err(|_| {
        GraphError::parse(
            header_line,
            format!("expected a vertex count, found `{}`", header),
        )
    })?;
    graph.initialize(vertex_count).map_err(|e| match e {
        GraphError::InvalidArgument { reason, .. } => GraphError::parse(header_line, reason),
        other => other,
    })?;

    for (line_no, line) in lines {
        let caps = edge_re.captures(line).ok_or_else(|| {
            GraphError::parse(
                line_no,
                format!("expected `v{}w weight`, found `{}`", separator, line),
            )
        })?;
        if &caps[2] != separator {
            return Err(GraphError::parse(
                line_no,
                format!("expected `{}` between vertices, found `{}`", separator, &caps[2]),
            ));
        }

        let v = parse_vertex(&caps[1], line_no)?;
        let w = parse_vertex(&caps[3], line_no)?;
        let weight: f64 = caps[4]
            .parse()
            .map_err(|_| GraphError::parse(line_no, format!("invalid weight `{}`", &caps[4])))?;

        graph.add_edge(make_edge(v, w, weight))?;
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "parsed graph"
    );
    trace_time!(start, "parse_graph");
    Ok(())
}

fn parse_vertex(text: &str, line_no: usize) -> Result<usize> {
    text.parse()
        .map_err(|_| GraphError::parse(line_no, format!("invalid vertex `{}`", text)))
}
