//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::algos::MstAlgorithm;
use crate::format::OutputFormat;

/// User settings, read from `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Source vertex for shortest paths when none is given
    #[serde(default)]
    pub default_source: usize,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Spanning tree algorithm when `--algorithm` is not given
    #[serde(default)]
    pub mst_algorithm: MstAlgorithm,

    /// Log level when neither `--log-level` nor `--verbose` is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_source: 0,
            format: OutputFormat::Human,
            mst_algorithm: MstAlgorithm::Kruskal,
            log_level: None,
        }
    }
}
