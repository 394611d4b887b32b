//! Generic directed graph with traversal and path search.

pub mod digraph;
pub mod traversal;

pub use digraph::{DirectedGraph, VertexId};
