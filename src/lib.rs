//! # `strand` - Linked-Structure and Graph Toolkit
//!
//! Classic pointer-chasing containers with explicit ownership and explicit
//! error reporting: singly and doubly linked lists, LIFO/FIFO adapters over
//! them, a plain (unbalanced) binary search tree, and an undirected
//! adjacency-list graph.
//!
//! ## Design
//!
//! - **Slot-arena lists**: both linked lists store their nodes in a `Vec` of
//!   slots and link them by index. Freed slots go onto an internal free list
//!   and are reused. This gives O(1) structural operations at both ends with
//!   no `unsafe` and no possibility of ownership cycles from back-references.
//! - **Owned tree nodes**: the binary search tree owns its nodes through
//!   `Option<Box<_>>` children, so unlinking a node frees it deterministically.
//! - **Recoverable errors**: invalid indices, accesses to empty containers,
//!   and edge operations on absent vertices all surface as [`Error`] values,
//!   never panics. Queries that find nothing return `Option`.
//!
//! All containers are single-threaded: they use no internal locking and
//! expect the usual exclusive-`&mut` access discipline.
//!
//! ## Example
//!
//! ```rust
//! use strand::{BinarySearchTree, Queue};
//!
//! let mut tree = BinarySearchTree::new();
//! for v in [10, 0, 20, 99, 5, 3, 21] {
//!     tree.insert(v);
//! }
//! assert_eq!(tree.in_order(), vec![&0, &3, &5, &10, &20, &21, &99]);
//! assert!(tree.is_valid_bst());
//!
//! let mut queue: Queue<i32> = [3, 5, 7, 9, 10].into_iter().collect();
//! assert_eq!(queue.dequeue(), Ok(3));
//! assert_eq!(queue.peek(), Ok(&5));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]

pub mod collections;
pub mod error;
pub mod graph;
pub mod tree;

pub use collections::{DoublyLinkedList, Queue, SinglyLinkedList, Stack};
pub use error::{Error, Result};
pub use graph::AdjacencyGraph;
pub use tree::BinarySearchTree;
