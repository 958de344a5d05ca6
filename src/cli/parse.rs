use wgraph_core::algos::MstAlgorithm;
use wgraph_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse spanning tree algorithm from string
pub fn parse_mst_algorithm(s: &str) -> std::result::Result<MstAlgorithm, String> {
    s.parse::<MstAlgorithm>().map_err(|e| e.to_string())
}
