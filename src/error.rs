//! Shared error type for all containers in the crate.
//!
//! Every recoverable failure mode maps to one of three conditions: an index
//! outside a list's valid range, an access that requires a non-empty
//! container, or a graph edge operation naming a vertex the graph does not
//! hold. Queries that merely find nothing (`search`, `neighbors`, `min`)
//! return `Option` instead of an error.

/// Error returned by fallible container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A list operation was given an index outside its valid range.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },

    /// A pop/peek-style operation was invoked on an empty container.
    #[error("operation requires a non-empty container")]
    EmptyContainer,

    /// A graph edge operation referenced a vertex that is not in the graph.
    #[error("vertex not found in graph")]
    VertexNotFound,
}

/// Result type alias for container operations.
pub type Result<T> = std::result::Result<T, Error>;
