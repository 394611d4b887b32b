//! Shortest friendship paths from one user to every reachable user.

use std::collections::{HashMap, VecDeque};

use crate::types::{GraphError, GraphResult, UserId};

use super::FriendshipNetwork;

/// Shortest path per reachable user, keyed by destination id. Each path runs
/// from the start user to the key, endpoints included.
pub type ShortestPaths = HashMap<UserId, Vec<UserId>>;

impl FriendshipNetwork {
    /// Compute the shortest friendship path from `start` to every user in
    /// its extended network.
    ///
    /// The start user maps to the single-element path `[start]`. Users in a
    /// different connected component are absent from the map, never mapped
    /// to a placeholder. Breadth-first expansion over partial paths, the
    /// same discipline as `DirectedGraph::bfs` but with no single target:
    /// the first path to reach a user is recorded as its shortest. O(V + E).
    pub fn all_shortest_paths(&self, start: UserId) -> GraphResult<ShortestPaths> {
        if self.user(start).is_none() {
            return Err(GraphError::UnknownUser(start));
        }

        let mut visited: ShortestPaths = HashMap::new();
        let mut queue: VecDeque<Vec<UserId>> = VecDeque::new();
        queue.push_back(vec![start]);

        while let Some(path) = queue.pop_front() {
            // Paths are built non-empty
            let current = path[path.len() - 1];
            if visited.contains_key(&current) {
                continue;
            }
            for &friend in self.friends_of(current)? {
                if !visited.contains_key(&friend) {
                    let mut extended = path.clone();
                    extended.push(friend);
                    queue.push_back(extended);
                }
            }
            visited.insert(current, path);
        }

        Ok(visited)
    }
}
