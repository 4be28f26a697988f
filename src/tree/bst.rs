//! `BinarySearchTree` — a plain, unbalanced binary search tree.
//!
//! Nodes are owned through `Option<Box<_>>` children, so unlinking a node
//! frees it (and its subtree) deterministically. No balancing is performed:
//! worst-case operation cost is O(height), and height can reach `len` for
//! adversarial (sorted) insertion orders. Recursive algorithms descend one
//! level per call, so stack depth is likewise bounded by the tree height.
//!
//! Duplicate policy: values equal to a node go into its **right** subtree.
//! Both insertion and validity checking are defined against that rule.

use core::cmp::Ordering;
use core::fmt;
use std::collections::VecDeque;

struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// An unbalanced binary search tree keyed by the element's `Ord`.
pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the height of the tree, counting nodes: an empty tree has
    /// height 0 and a single node has height 1.
    pub fn height(&self) -> usize {
        Self::node_height(self.root.as_deref())
    }

    fn node_height(node: Option<&Node<T>>) -> usize {
        node.map_or(0, |n| {
            1 + Self::node_height(n.left.as_deref()).max(Self::node_height(n.right.as_deref()))
        })
    }

    /// Returns the values in left-root-right order.
    ///
    /// For a tree satisfying the search invariant this sequence is
    /// non-decreasing.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        Self::walk_in_order(self.root.as_deref(), &mut out);
        out
    }

    fn walk_in_order<'a>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
        if let Some(n) = node {
            Self::walk_in_order(n.left.as_deref(), out);
            out.push(&n.value);
            Self::walk_in_order(n.right.as_deref(), out);
        }
    }

    /// Returns the values in root-left-right order.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        Self::walk_pre_order(self.root.as_deref(), &mut out);
        out
    }

    fn walk_pre_order<'a>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
        if let Some(n) = node {
            out.push(&n.value);
            Self::walk_pre_order(n.left.as_deref(), out);
            Self::walk_pre_order(n.right.as_deref(), out);
        }
    }

    /// Returns the values in left-right-root order.
    pub fn post_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        Self::walk_post_order(self.root.as_deref(), &mut out);
        out
    }

    fn walk_post_order<'a>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
        if let Some(n) = node {
            Self::walk_post_order(n.left.as_deref(), out);
            Self::walk_post_order(n.right.as_deref(), out);
            out.push(&n.value);
        }
    }

    /// Returns the values in breadth-first order, FIFO from the root.
    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut frontier = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            frontier.push_back(root);
        }
        while let Some(n) = frontier.pop_front() {
            out.push(&n.value);
            if let Some(l) = n.left.as_deref() {
                frontier.push_back(l);
            }
            if let Some(r) = n.right.as_deref() {
                frontier.push_back(r);
            }
        }
        out
    }

    /// Returns the values at `depth`, left to right. The root is depth 0;
    /// a depth at or beyond the deepest node yields an empty vector.
    pub fn values_at_depth(&self, depth: usize) -> Vec<&T> {
        let mut out = Vec::new();
        Self::collect_at_depth(self.root.as_deref(), depth, &mut out);
        out
    }

    fn collect_at_depth<'a>(node: Option<&'a Node<T>>, depth: usize, out: &mut Vec<&'a T>) {
        let Some(n) = node else { return };
        if depth == 0 {
            out.push(&n.value);
        } else {
            Self::collect_at_depth(n.left.as_deref(), depth - 1, out);
            Self::collect_at_depth(n.right.as_deref(), depth - 1, out);
        }
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value` by recursive descent: strictly smaller values go
    /// left, greater-or-equal values go right. Duplicates are kept.
    pub fn insert(&mut self, value: T) {
        Self::insert_node(&mut self.root, value);
        self.len += 1;
    }

    fn insert_node(node: &mut Option<Box<Node<T>>>, value: T) {
        match node {
            None => {
                *node = Some(Box::new(Node {
                    value,
                    left: None,
                    right: None,
                }));
            }
            Some(n) => {
                if value < n.value {
                    Self::insert_node(&mut n.left, value);
                } else {
                    Self::insert_node(&mut n.right, value);
                }
            }
        }
    }

    /// Returns `true` if some value in the tree equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(n) = cur {
            match value.cmp(&n.value) {
                Ordering::Less => cur = n.left.as_deref(),
                Ordering::Greater => cur = n.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Returns the smallest value, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        let mut cur = self.root.as_deref()?;
        while let Some(l) = cur.left.as_deref() {
            cur = l;
        }
        Some(&cur.value)
    }

    /// Returns the largest value, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        let mut cur = self.root.as_deref()?;
        while let Some(r) = cur.right.as_deref() {
            cur = r;
        }
        Some(&cur.value)
    }

    /// Removes one occurrence of `value` and returns whether anything was
    /// removed. Removing an absent value is a no-op.
    ///
    /// Standard BST deletion: a leaf is dropped, a one-child node is
    /// replaced by its child, and a two-child node takes the minimum of its
    /// right subtree (which is then unlinked from that subtree).
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = Self::remove_node(&mut self.root, value);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_node(node: &mut Option<Box<Node<T>>>, value: &T) -> bool {
        let Some(cur) = node.as_mut() else {
            return false;
        };
        match value.cmp(&cur.value) {
            Ordering::Less => Self::remove_node(&mut cur.left, value),
            Ordering::Greater => Self::remove_node(&mut cur.right, value),
            Ordering::Equal => {
                if cur.left.is_some() && cur.right.is_some() {
                    let right = cur.right.take().expect("right child present");
                    let (rest, min) = Self::take_min(right);
                    cur.right = rest;
                    cur.value = min;
                } else {
                    // At most one child: splice it into this position.
                    let mut boxed = node.take().expect("node is occupied");
                    *node = boxed.left.take().or_else(|| boxed.right.take());
                }
                true
            }
        }
    }

    /// Unlinks the leftmost node of `node`'s subtree, returning the
    /// remaining subtree and the extracted minimum value.
    fn take_min(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, T) {
        if let Some(left) = node.left.take() {
            let (rest, min) = Self::take_min(left);
            node.left = rest;
            (Some(node), min)
        } else {
            let Node { value, right, .. } = *node;
            (right, value)
        }
    }

    /// Verifies the search invariant for the whole tree.
    ///
    /// Threads a tightening `(lower, upper)` bound pair through the
    /// recursion, starting unbounded at the root: descending left tightens
    /// the upper bound (strict, since smaller values go left), descending
    /// right tightens the lower bound (inclusive, matching the
    /// duplicates-to-the-right policy). Checking each subtree against the
    /// tree's global `min()`/`max()` instead would be wrong: a node can sit
    /// within the global range yet still violate the ordering with one of
    /// its own ancestors.
    pub fn is_valid_bst(&self) -> bool {
        Self::check_bounds(self.root.as_deref(), None, None)
    }

    fn check_bounds(node: Option<&Node<T>>, lower: Option<&T>, upper: Option<&T>) -> bool {
        let Some(n) = node else { return true };
        if lower.is_some_and(|lo| n.value < *lo) {
            return false;
        }
        if upper.is_some_and(|hi| n.value >= *hi) {
            return false;
        }
        Self::check_bounds(n.left.as_deref(), lower, Some(&n.value))
            && Self::check_bounds(n.right.as_deref(), Some(&n.value), upper)
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Renders the values in in-order sequence.
impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.in_order()).finish()
    }
}
