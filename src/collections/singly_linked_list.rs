//! `SinglyLinkedList` — a slot-arena singly linked list.
//!
//! Nodes are stored in a `Vec` of slots and chained by index rather than by
//! owned pointers. Freed slots are pushed onto an internal free list and
//! reused by later insertions, so a long-lived list does not grow its
//! backing storage beyond its high-water mark. A tail index makes appends
//! O(1) without a backward link.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `push_front` / `push_back` | O(1) | Reuses a free slot when available |
//! | `pop_front` | O(1) | |
//! | `insert` / `remove` | O(index) | Walks from `head` |
//! | `remove_value` / `search` | O(len) | First match by `==` |
//! | `reverse` | O(len) | In place, O(1) extra space |

use core::fmt;

use crate::error::{Error, Result};

/// A slot in the backing vector: either a live node or a free-list entry.
#[derive(Debug)]
enum Slot<T> {
    Occupied { value: T, next: Option<usize> },
    Free { next_free: Option<usize> },
}

/// A singly linked list with O(1) operations at both ends.
///
/// Appends are O(1) thanks to a tail index; the tail is a plain lookup
/// index, never an owner, so no link cycle can form.
pub struct SinglyLinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new empty list.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|idx| self.value_of(idx))
    }

    /// Removes all elements and releases the backing storage.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    /// Allocates a slot for `value`, reusing a free one when available.
    fn alloc(&mut self, value: T) -> usize {
        if let Some(idx) = self.free_head {
            match self.slots[idx] {
                Slot::Free { next_free } => self.free_head = next_free,
                Slot::Occupied { .. } => panic!("corrupted free list: slot {idx} is occupied"),
            }
            self.slots[idx] = Slot::Occupied { value, next: None };
            idx
        } else {
            self.slots.push(Slot::Occupied { value, next: None });
            self.slots.len() - 1
        }
    }

    /// Releases an unlinked slot onto the free list and returns its value.
    ///
    /// The caller must already have removed every link pointing at `idx`.
    fn release(&mut self, idx: usize) -> T {
        let slot = core::mem::replace(
            &mut self.slots[idx],
            Slot::Free {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(idx);
        match slot {
            Slot::Occupied { value, .. } => value,
            Slot::Free { .. } => panic!("corrupted list: released slot {idx} was already free"),
        }
    }

    fn value_of(&self, idx: usize) -> &T {
        match &self.slots[idx] {
            Slot::Occupied { value, .. } => value,
            Slot::Free { .. } => panic!("corrupted list: slot {idx} is on the free list"),
        }
    }

    fn next_of(&self, idx: usize) -> Option<usize> {
        match &self.slots[idx] {
            Slot::Occupied { next, .. } => *next,
            Slot::Free { .. } => panic!("corrupted list: slot {idx} is on the free list"),
        }
    }

    fn set_next(&mut self, idx: usize, new_next: Option<usize>) {
        match &mut self.slots[idx] {
            Slot::Occupied { next, .. } => *next = new_next,
            Slot::Free { .. } => panic!("corrupted list: slot {idx} is on the free list"),
        }
    }

    /// Walks from `head` to the slot holding the element at `index`.
    ///
    /// Caller guarantees `index < self.len`.
    fn slot_at(&self, index: usize) -> usize {
        let mut idx = self.head.expect("index in bounds implies a non-empty list");
        for _ in 0..index {
            idx = self.next_of(idx).expect("list shorter than its recorded length");
        }
        idx
    }

    /// Inserts `value` at the front of the list.
    pub fn push_front(&mut self, value: T) {
        let idx = self.alloc(value);
        self.set_next(idx, self.head);
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.len += 1;
    }

    /// Appends `value` at the back of the list.
    pub fn push_back(&mut self, value: T) {
        let idx = self.alloc(value);
        match self.tail {
            Some(tail) => self.set_next(tail, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// Valid positions are `0..=len`; `index == len` appends. Indices are
    /// `usize`, so a negative index cannot be expressed.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] when `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.push_front(value);
        } else if index == self.len {
            self.push_back(value);
        } else {
            let prev = self.slot_at(index - 1);
            let idx = self.alloc(value);
            self.set_next(idx, self.next_of(prev));
            self.set_next(prev, Some(idx));
            self.len += 1;
        }
        Ok(())
    }

    /// Removes and returns the first element, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let idx = self.head?;
        self.head = self.next_of(idx);
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(self.release(idx))
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] when `index >= len`, including any
    /// index on an empty list.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            let value = self.pop_front().expect("checked non-empty");
            return Ok(value);
        }
        let prev = self.slot_at(index - 1);
        let target = self
            .next_of(prev)
            .expect("in-bounds index has a live successor");
        self.set_next(prev, self.next_of(target));
        if self.tail == Some(target) {
            self.tail = Some(prev);
        }
        self.len -= 1;
        Ok(self.release(target))
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Returns `None` when no element matches.
    pub fn remove_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut prev: Option<usize> = None;
        let mut cur = self.head;
        while let Some(idx) = cur {
            if self.value_of(idx) == value {
                let next = self.next_of(idx);
                match prev {
                    Some(p) => self.set_next(p, next),
                    None => self.head = next,
                }
                if self.tail == Some(idx) {
                    self.tail = prev;
                }
                self.len -= 1;
                return Some(self.release(idx));
            }
            prev = cur;
            cur = self.next_of(idx);
        }
        None
    }

    /// Returns the position of the first element equal to `value`.
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Reverses the list in place.
    ///
    /// O(len) time, O(1) extra space: only the `next` links are rewritten.
    /// The former tail becomes the head.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cur = self.head;
        while let Some(idx) = cur {
            let next = self.next_of(idx);
            self.set_next(idx, prev);
            prev = cur;
            cur = next;
        }
        self.tail = self.head;
        self.head = prev;
    }

    /// Returns a front-to-back iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cur: self.head,
        }
    }
}

/// Front-to-back iterator over a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    list: &'a SinglyLinkedList<T>,
    cur: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cur?;
        self.cur = self.list.next_of(idx);
        Some(self.list.value_of(idx))
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
