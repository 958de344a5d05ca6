//! Error types and exit codes for wgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad arguments, out-of-range vertices)
//! - 3: Data error (malformed graph text, misuse of a built structure)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input, invalid structure state (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors raised by graphs, queues, algorithms and the loader
#[derive(Error, Debug)]
pub enum GraphError {
    // Precondition failures of the core structures
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("the queue is empty")]
    EmptyCollection,

    #[error("no such element in the queue: {element}")]
    UnknownElement { element: String },

    #[error("invalid argument {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    // Loader errors
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    UsageError(String),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a structure used in the wrong lifecycle state
    pub fn invalid_state(reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidState {
            reason: reason.to_string(),
        }
    }

    /// Create an error for an element that is not in an indexed queue
    pub fn unknown_element(element: impl std::fmt::Debug) -> Self {
        GraphError::UnknownElement {
            element: format!("{:?}", element),
        }
    }

    /// Create an error for a missing or invalid construction parameter
    pub fn invalid_argument(name: &str, reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidArgument {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a malformed line of graph text
    pub fn parse(line: usize, reason: impl std::fmt::Display) -> Self {
        GraphError::Parse {
            line,
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::InvalidArgument { .. }
            | GraphError::VertexOutOfRange { .. }
            | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::InvalidState { .. } | GraphError::Parse { .. } => ExitCode::Data,

            GraphError::EmptyCollection
            | GraphError::UnknownElement { .. }
            | GraphError::Io(_)
            | GraphError::ReadFile { .. }
            | GraphError::Toml(_)
            | GraphError::Json(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::InvalidState { .. } => "invalid_state",
            GraphError::EmptyCollection => "empty_collection",
            GraphError::UnknownElement { .. } => "unknown_element",
            GraphError::InvalidArgument { .. } => "invalid_argument",
            GraphError::VertexOutOfRange { .. } => "vertex_out_of_range",
            GraphError::Parse { .. } => "parse_error",
            GraphError::Io(_) | GraphError::ReadFile { .. } => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Json(_) => "json_error",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
