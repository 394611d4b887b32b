//! Traversal and path-search algorithms for [`DirectedGraph`].
//!
//! Traversals return the visit order; searches return a path as an ordered
//! vertex sequence including both endpoints, or `None` when the target is
//! unreachable (a miss is a normal outcome, not an error).

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphError, GraphResult};

use super::{DirectedGraph, VertexId};

impl<V: VertexId> DirectedGraph<V> {
    /// Visit every vertex reachable from `start` in breadth-first order,
    /// each exactly once, frontier by frontier.
    pub fn bft(&self, start: &V) -> GraphResult<Vec<V>> {
        if !self.contains(start) {
            return Err(GraphError::UnknownVertex(start.to_string()));
        }

        let mut visited: HashSet<V> = HashSet::new();
        let mut order: Vec<V> = Vec::new();
        let mut queue: VecDeque<V> = VecDeque::new();
        queue.push_back(start.clone());

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }
            for neighbor in self.neighbors(&current)? {
                queue.push_back(neighbor.clone());
            }
            order.push(current);
        }

        Ok(order)
    }

    /// Visit every vertex reachable from `start` in depth-first order,
    /// each exactly once, using an explicit stack.
    pub fn dft(&self, start: &V) -> GraphResult<Vec<V>> {
        if !self.contains(start) {
            return Err(GraphError::UnknownVertex(start.to_string()));
        }

        let mut visited: HashSet<V> = HashSet::new();
        let mut order: Vec<V> = Vec::new();
        let mut stack: Vec<V> = vec![start.clone()];

        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            for neighbor in self.neighbors(&current)? {
                stack.push(neighbor.clone());
            }
            order.push(current);
        }

        Ok(order)
    }

    /// Recursive form of [`dft`](Self::dft): visit a vertex, mark it, then
    /// recurse into each unvisited neighbor in neighbor-set order.
    pub fn dft_recursive(&self, start: &V) -> GraphResult<Vec<V>> {
        if !self.contains(start) {
            return Err(GraphError::UnknownVertex(start.to_string()));
        }

        let mut visited: HashSet<V> = HashSet::new();
        let mut order: Vec<V> = Vec::new();
        self.dft_visit(start, &mut visited, &mut order)?;
        Ok(order)
    }

    fn dft_visit(
        &self,
        vertex: &V,
        visited: &mut HashSet<V>,
        order: &mut Vec<V>,
    ) -> GraphResult<()> {
        if !visited.insert(vertex.clone()) {
            return Ok(());
        }
        order.push(vertex.clone());

        for neighbor in self.neighbors(vertex)? {
            self.dft_visit(neighbor, visited, order)?;
        }
        Ok(())
    }

    /// One shortest (minimum edge-count) path from `start` to `target`, or
    /// `None` when the target is unreachable.
    ///
    /// Explores a queue of partial paths in increasing length, marking a
    /// vertex visited only when its path is dequeued, so the first path to
    /// reach the target is of minimum length.
    pub fn bfs(&self, start: &V, target: &V) -> GraphResult<Option<Vec<V>>> {
        if !self.contains(start) {
            return Err(GraphError::UnknownVertex(start.to_string()));
        }
        if !self.contains(target) {
            return Err(GraphError::UnknownVertex(target.to_string()));
        }
        if start == target {
            return Ok(Some(vec![start.clone()]));
        }

        let mut visited: HashSet<V> = HashSet::new();
        let mut queue: VecDeque<Vec<V>> = VecDeque::new();
        queue.push_back(vec![start.clone()]);

        while let Some(path) = queue.pop_front() {
            // Paths are built non-empty
            let current = path[path.len() - 1].clone();
            if !visited.insert(current.clone()) {
                continue;
            }
            if current == *target {
                return Ok(Some(path));
            }
            for neighbor in self.neighbors(&current)? {
                if visited.contains(neighbor) {
                    continue;
                }
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                queue.push_back(extended);
            }
        }

        Ok(None)
    }

    /// Some path (not necessarily shortest) from `start` to `target`, or
    /// `None` when the target is unreachable. Same partial-path discipline
    /// as [`bfs`](Self::bfs) with a stack in place of the queue.
    pub fn dfs(&self, start: &V, target: &V) -> GraphResult<Option<Vec<V>>> {
        if !self.contains(start) {
            return Err(GraphError::UnknownVertex(start.to_string()));
        }
        if !self.contains(target) {
            return Err(GraphError::UnknownVertex(target.to_string()));
        }
        if start == target {
            return Ok(Some(vec![start.clone()]));
        }

        let mut visited: HashSet<V> = HashSet::new();
        let mut stack: Vec<Vec<V>> = vec![vec![start.clone()]];

        while let Some(path) = stack.pop() {
            let current = path[path.len() - 1].clone();
            if !visited.insert(current.clone()) {
                continue;
            }
            if current == *target {
                return Ok(Some(path));
            }
            for neighbor in self.neighbors(&current)? {
                if visited.contains(neighbor) {
                    continue;
                }
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                stack.push(extended);
            }
        }

        Ok(None)
    }

    /// Recursive form of [`dfs`](Self::dfs).
    pub fn dfs_recursive(&self, start: &V, target: &V) -> GraphResult<Option<Vec<V>>> {
        if !self.contains(start) {
            return Err(GraphError::UnknownVertex(start.to_string()));
        }
        if !self.contains(target) {
            return Err(GraphError::UnknownVertex(target.to_string()));
        }

        let mut visited: HashSet<V> = HashSet::new();
        self.dfs_visit(start, target, &mut visited, &[])
    }

    fn dfs_visit(
        &self,
        vertex: &V,
        target: &V,
        visited: &mut HashSet<V>,
        prefix: &[V],
    ) -> GraphResult<Option<Vec<V>>> {
        let mut path = prefix.to_vec();
        path.push(vertex.clone());

        if vertex == target {
            return Ok(Some(path));
        }

        visited.insert(vertex.clone());

        for neighbor in self.neighbors(vertex)? {
            if visited.contains(neighbor) {
                continue;
            }
            if let Some(found) = self.dfs_visit(neighbor, target, visited, &path)? {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }
}
