//! Error type shared by all graph operations and algorithms.
//!
//! Every failing call aborts synchronously and leaves the vertex/edge tables exactly as
//! they were before the call. Traversals that bail out mid-scan may leave scratch state
//! partially written; every algorithm resets the scratch state it relies on at entry.

use std::fmt::Debug;

use thiserror::Error;

use crate::edge::Weight;
use crate::slot::NumVertices;

/// Errors raised by graph operations, algorithms and I/O.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The operation referenced a vertex key that is not in the graph.
    #[error("vertex {0} is not in the graph")]
    InvalidVertex(String),

    /// An edge from a vertex to itself was requested.
    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoopRejected(String),

    /// A cycle-checking traversal reached a vertex that is still on the current search path.
    #[error("cycle involving vertices {from} and {to}")]
    CycleDetected {
        /// Vertex whose edge closed the cycle
        from: String,
        /// Vertex on the current search path the edge points to
        to: String,
    },

    /// The spanning tree could not reach every vertex.
    #[error("graph is not connected: spanned {spanned} of {total} vertices")]
    Disconnected {
        /// Number of vertices in the partial tree
        spanned: NumVertices,
        /// Number of vertices in the graph
        total: NumVertices,
    },

    /// The operation requires at least one vertex.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// An edge has no mirrored edge of equal weight although symmetry was required.
    #[error("edge ({from}, {to}) with weight {weight} is not mirrored with equal weight")]
    Asymmetric {
        /// Source of the unmatched edge
        from: String,
        /// Destination of the unmatched edge
        to: String,
        /// Weight of the unmatched edge
        weight: Weight,
    },

    /// `remove_current` was called on a vertex cursor without a current vertex.
    #[error("vertex cursor has no current vertex; call next() first")]
    NoCurrentVertex,

    /// Walking the parent chain did not lead back to the source vertex.
    #[error("parent chain of vertex {0} does not lead back to the source")]
    BrokenPath(String),

    /// Graph text input could not be parsed.
    #[error("malformed graph input: {0}")]
    Malformed(String),

    /// A generator was configured with invalid parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Underlying I/O failure while reading or writing a graph.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Shorthand for [`GraphError::InvalidVertex`] rendering the key with `Debug`
    pub fn invalid_vertex<K: Debug + ?Sized>(key: &K) -> Self {
        GraphError::InvalidVertex(format!("{key:?}"))
    }

    /// Shorthand for [`GraphError::SelfLoopRejected`] rendering the key with `Debug`
    pub fn self_loop<K: Debug + ?Sized>(key: &K) -> Self {
        GraphError::SelfLoopRejected(format!("{key:?}"))
    }

    /// Shorthand for [`GraphError::CycleDetected`] rendering both keys with `Debug`
    pub fn cycle<K: Debug + ?Sized>(from: &K, to: &K) -> Self {
        GraphError::CycleDetected {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    /// Returns *true* if this error reports a cycle
    pub fn is_cycle(&self) -> bool {
        matches!(self, GraphError::CycleDetected { .. })
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;
