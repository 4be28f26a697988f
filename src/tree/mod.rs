//! Ordered tree containers.

pub mod bst;

pub use bst::BinarySearchTree;
