//! Sequential containers: linked lists and the adapters built on them.
//!
//! The two lists share a slot-arena representation: nodes live in a `Vec`
//! and link to each other by index, with freed slots chained on an internal
//! free list for reuse. `Stack` and `Queue` are thin discipline adapters
//! over [`SinglyLinkedList`].

pub mod doubly_linked_list;
pub mod queue;
pub mod singly_linked_list;
pub mod stack;

pub use doubly_linked_list::DoublyLinkedList;
pub use queue::Queue;
pub use singly_linked_list::SinglyLinkedList;
pub use stack::Stack;
