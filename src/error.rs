//! Error types for graph operations.
//!
//! Only structurally impossible requests are errors. Requests that are already
//! satisfied or not applicable (duplicate node, duplicate edge, self-loop,
//! removing something absent) are boolean no-ops on [`DirectedGraph`].
//!
//! [`DirectedGraph`]: crate::DirectedGraph

use crate::graph::NodeId;
use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node not found in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: NodeId,
    },

    /// Attempted to create an edge with a negative (or NaN) weight
    #[error("Invalid weight {weight} for edge {source_id} -> {target_id}: weights must be non-negative")]
    InvalidWeight {
        /// Source node ID
        source_id: NodeId,
        /// Target node ID
        target_id: NodeId,
        /// The rejected weight
        weight: f64,
    },

    /// File I/O error during import or export
    #[error("I/O error: {message}")]
    Io {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Input parsed but does not follow the graph exchange format
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of what went wrong
        message: String,
    },
}

impl GraphError {
    /// Create an I/O error from a message and optional source.
    pub fn io<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    pub(crate) fn node_not_found(node_id: NodeId) -> Self {
        Self::NodeNotFound { node_id }
    }
}
