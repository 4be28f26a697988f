//! Graph containers.
//!
//! Currently a single representation: an undirected adjacency-list graph
//! over hashable vertex labels, optimized for dynamic edge and vertex
//! updates.

pub mod adjacency_graph;

pub use adjacency_graph::AdjacencyGraph;
