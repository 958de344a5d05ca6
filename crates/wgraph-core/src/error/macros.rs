//! Error macros for wgraph

/// Macro for returning an invalid argument error
#[macro_export]
macro_rules! bail_invalid {
    ($name:expr, $reason:expr) => {
        return Err($crate::error::GraphError::invalid_argument($name, $reason))
    };
}

/// Macro for returning an invalid state error
#[macro_export]
macro_rules! bail_state {
    ($reason:expr) => {
        return Err($crate::error::GraphError::invalid_state($reason))
    };
}

/// Macro for rejecting a vertex outside `[0, V)`
#[macro_export]
macro_rules! ensure_vertex {
    ($vertex:expr, $count:expr) => {
        if $vertex >= $count {
            return Err($crate::error::GraphError::VertexOutOfRange {
                vertex: $vertex,
                vertex_count: $count,
            });
        }
    };
}
