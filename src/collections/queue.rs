//! `Queue` — a FIFO adapter over [`SinglyLinkedList`].

use core::fmt;

use crate::collections::SinglyLinkedList;
use crate::error::{Error, Result};

/// A first-in, first-out queue.
///
/// Enqueues at the list tail and dequeues at the head; both are O(1)
/// because the underlying list keeps a tail index.
pub struct Queue<T> {
    items: SinglyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates a new empty queue.
    pub const fn new() -> Self {
        Self {
            items: SinglyLinkedList::new(),
        }
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] when the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::EmptyContainer)
    }

    /// Returns a reference to the oldest element without removing it.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] when the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        self.items.front().ok_or(Error::EmptyContainer)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

/// Builds a queue by enqueueing elements in iteration order, so the first
/// element of the iterator is dequeued first.
impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Renders front-first.
impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
