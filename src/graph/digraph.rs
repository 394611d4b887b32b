//! Core directed-graph structure — vertices plus adjacency sets.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::types::{GraphError, GraphResult};

/// Bounds a vertex identifier must satisfy. Integers and strings both
/// qualify; any comparable, hashable, printable value works.
pub trait VertexId: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Debug + fmt::Display> VertexId for T {}

/// A directed graph over opaque vertex identifiers.
///
/// Each vertex owns its set of out-neighbors. Neighbor sets are stored in
/// insertion order so traversal output is deterministic for a fixed
/// construction sequence; callers must not rely on any particular order
/// beyond valid breadth-first/depth-first structure.
pub struct DirectedGraph<V: VertexId> {
    /// Adjacency: vertex -> insertion-ordered set of out-neighbors.
    vertices: HashMap<V, Vec<V>>,
    /// Number of distinct directed edges.
    edge_count: usize,
}

impl<V: VertexId> DirectedGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the vertex has been added.
    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// Iterate over all vertex ids, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    /// Add a vertex with an empty neighbor set.
    pub fn add_vertex(&mut self, vertex: V) -> GraphResult<()> {
        if self.vertices.contains_key(&vertex) {
            return Err(GraphError::DuplicateVertex(vertex.to_string()));
        }
        self.vertices.insert(vertex, Vec::new());
        Ok(())
    }

    /// Add a directed edge between two existing vertices.
    ///
    /// Edge multiplicity is not tracked: adding an edge that already exists
    /// collapses into the existing one. On error the graph is unmodified.
    pub fn add_edge(&mut self, source: V, target: V) -> GraphResult<()> {
        // Validate both endpoints before touching the adjacency set
        if !self.vertices.contains_key(&target) {
            return Err(GraphError::UnknownVertex(target.to_string()));
        }
        let Some(neighbors) = self.vertices.get_mut(&source) else {
            return Err(GraphError::UnknownVertex(source.to_string()));
        };
        if !neighbors.contains(&target) {
            neighbors.push(target);
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Out-neighbor set of a vertex, in insertion order.
    pub fn neighbors(&self, vertex: &V) -> GraphResult<&[V]> {
        self.vertices
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.to_string()))
    }
}

impl<V: VertexId> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}
