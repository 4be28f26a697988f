//! `Stack` — a LIFO adapter over [`SinglyLinkedList`].

use core::fmt;

use crate::collections::SinglyLinkedList;
use crate::error::{Error, Result};

/// A last-in, first-out stack.
///
/// Pushes and pops both work at the list head, so every operation is O(1).
pub struct Stack<T> {
    items: SinglyLinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new empty stack.
    pub const fn new() -> Self {
        Self {
            items: SinglyLinkedList::new(),
        }
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes `value` onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Removes and returns the most recently pushed element.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] when the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::EmptyContainer)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] when the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        self.items.front().ok_or(Error::EmptyContainer)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Builds a stack by pushing elements in iteration order, so the last
/// element of the iterator ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

/// Renders top-first.
impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
