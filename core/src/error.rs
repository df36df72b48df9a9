use thiserror::Error;

use crate::graph::Vertex;

/// Errors raised by graph construction, queries, and edge-list loading.
///
/// The first four variants are the invalid-argument family: they are
/// detected at the offending call and leave the graph untouched.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex count cannot be negative, got {0}")]
    NegativeVertexCount(i64),

    #[error("vertex count {requested} exceeds the supported maximum of {max}")]
    VertexCountTooLarge { requested: i64, max: usize },

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },

    #[error("vertex {vertex} is not an endpoint of edge {v}-{w}")]
    NotAnEndpoint { vertex: Vertex, v: Vertex, w: Vertex },

    #[error("edge list line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// True for the errors caused by a bad argument rather than bad input data.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GraphError::NegativeVertexCount(_)
                | GraphError::VertexCountTooLarge { .. }
                | GraphError::VertexOutOfRange { .. }
                | GraphError::NotAnEndpoint { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
