//! `AdjacencyGraph` — an undirected adjacency-list graph.
//!
//! Vertices are hashable labels owned by the graph; each vertex maps to the
//! set of its neighbours. The adjacency relation is kept symmetric by
//! construction: every edge mutation touches both endpoints' sets, and
//! vertex removal clears all incident edges before the vertex entry is
//! dropped, so no set can retain a dangling reference to a departed vertex.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | O(1) | Idempotent |
//! | `add_edge` | O(1) | Implicitly adds missing endpoints |
//! | `remove_edge` / `has_edge` | O(1) | Errors on absent endpoints |
//! | `remove_vertex` | O(degree) | Removes incident edges first |

use core::fmt;
use core::hash::Hash;
use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

/// An undirected graph stored as per-vertex adjacency sets.
///
/// A vertex with no entry in the map is absent from the graph; an isolated
/// vertex is present with an empty set. Self-loops are representable: an
/// edge from a vertex to itself records the vertex in its own set.
pub struct AdjacencyGraph<V> {
    adjacency: HashMap<V, HashSet<V>>,
}

impl<V> AdjacencyGraph<V> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Returns the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the graph holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns an iterator over the vertex labels, in arbitrary order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }
}

impl<V: Eq + Hash + Clone> AdjacencyGraph<V> {
    /// Adds `vertex` with no edges. Adding a vertex that is already present
    /// is a no-op that keeps its existing edges.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Returns `true` if `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Records an undirected edge between `a` and `b`, implicitly adding
    /// either endpoint that is missing. Re-adding an existing edge is a
    /// no-op.
    pub fn add_edge(&mut self, a: V, b: V) {
        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Removes the edge between `a` and `b` from both adjacency sets.
    /// Removing an edge that does not exist between two present vertices is
    /// a no-op.
    ///
    /// # Errors
    /// Returns [`Error::VertexNotFound`] when either endpoint is absent.
    pub fn remove_edge(&mut self, a: &V, b: &V) -> Result<()> {
        if !self.adjacency.contains_key(a) || !self.adjacency.contains_key(b) {
            return Err(Error::VertexNotFound);
        }
        if let Some(neighbors) = self.adjacency.get_mut(a) {
            neighbors.remove(b);
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.remove(a);
        }
        Ok(())
    }

    /// Removes `vertex` and every edge incident to it, returning whether
    /// the vertex was present. Incident edges are cleared from the
    /// neighbours' sets first, so symmetry holds throughout.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(neighbors) = self.adjacency.remove(vertex) else {
            return false;
        };
        for neighbor in &neighbors {
            if let Some(set) = self.adjacency.get_mut(neighbor) {
                set.remove(vertex);
            }
        }
        true
    }

    /// Returns `true` if an edge connects `a` and `b`.
    ///
    /// # Errors
    /// Returns [`Error::VertexNotFound`] when either endpoint is absent.
    pub fn has_edge(&self, a: &V, b: &V) -> Result<bool> {
        let set_a = self.adjacency.get(a).ok_or(Error::VertexNotFound)?;
        let set_b = self.adjacency.get(b).ok_or(Error::VertexNotFound)?;
        Ok(set_a.contains(b) && set_b.contains(a))
    }

    /// Returns the adjacency set of `vertex`, or `None` when the vertex is
    /// absent.
    pub fn neighbors(&self, vertex: &V) -> Option<&HashSet<V>> {
        self.adjacency.get(vertex)
    }
}

impl<V> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the adjacency map.
impl<V: fmt::Debug> fmt::Debug for AdjacencyGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(&self.adjacency).finish()
    }
}
