//! Error types for the graphwalk library.

use thiserror::Error;

use super::UserId;

/// All errors that can occur in the graphwalk library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex id has already been added to the graph.
    #[error("vertex {0} has already been added")]
    DuplicateVertex(String),

    /// A referenced vertex is not in the graph.
    #[error("vertex {0} is not in the graph")]
    UnknownVertex(String),

    /// A referenced user id is not in the network.
    #[error("user {0} is not in the network")]
    UnknownUser(UserId),
}

/// Convenience result type for graphwalk operations.
pub type GraphResult<T> = Result<T, GraphError>;
