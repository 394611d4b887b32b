//! Friendship network with shortest-path queries.

pub mod network;
pub mod paths;

pub use network::FriendshipNetwork;
pub use paths::ShortestPaths;
