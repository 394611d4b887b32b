//! Graphwalk — directed-graph traversal, friendship-network shortest paths,
//! and ancestry queries.
//!
//! Three independent in-memory components: a generic [`DirectedGraph`] with
//! breadth-first/depth-first traversal and path search, a
//! [`FriendshipNetwork`] with a shortest-path-to-every-reachable-user query,
//! and an [`earliest_ancestor`] query over (parent, child) edge lists.

pub mod ancestry;
pub mod graph;
pub mod social;
pub mod types;

// Re-export commonly used types at the crate root
pub use ancestry::earliest_ancestor;
pub use graph::{DirectedGraph, VertexId};
pub use social::{FriendshipNetwork, ShortestPaths};
pub use types::{GraphError, GraphResult, User, UserId};
