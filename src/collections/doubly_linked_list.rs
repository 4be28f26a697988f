//! `DoublyLinkedList` — a slot-arena doubly linked list.
//!
//! Same representation as [`SinglyLinkedList`](crate::SinglyLinkedList), with
//! a `prev` index on every node. The backward link buys O(1) removal at the
//! tail and O(1) unlinking of any known slot. Because links are plain
//! indices into the arena, the `prev` chain cannot form an ownership cycle.
//!
//! Every mutation re-establishes the two boundary invariants: the head has
//! no predecessor and the tail has no successor.

use core::fmt;

use crate::error::{Error, Result};

#[derive(Debug)]
enum Slot<T> {
    Occupied {
        value: T,
        prev: Option<usize>,
        next: Option<usize>,
    },
    Free {
        next_free: Option<usize>,
    },
}

/// A doubly linked list with O(1) insertion and removal at both ends.
pub struct DoublyLinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
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

    /// Returns a reference to the last element, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|idx| self.value_of(idx))
    }

    /// Removes all elements and releases the backing storage.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    fn alloc(&mut self, value: T) -> usize {
        if let Some(idx) = self.free_head {
            match self.slots[idx] {
                Slot::Free { next_free } => self.free_head = next_free,
                Slot::Occupied { .. } => panic!("corrupted free list: slot {idx} is occupied"),
            }
            self.slots[idx] = Slot::Occupied {
                value,
                prev: None,
                next: None,
            };
            idx
        } else {
            self.slots.push(Slot::Occupied {
                value,
                prev: None,
                next: None,
            });
            self.slots.len() - 1
        }
    }

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

    fn links_of(&self, idx: usize) -> (Option<usize>, Option<usize>) {
        match &self.slots[idx] {
            Slot::Occupied { prev, next, .. } => (*prev, *next),
            Slot::Free { .. } => panic!("corrupted list: slot {idx} is on the free list"),
        }
    }

    fn next_of(&self, idx: usize) -> Option<usize> {
        self.links_of(idx).1
    }

    fn set_prev(&mut self, idx: usize, new_prev: Option<usize>) {
        match &mut self.slots[idx] {
            Slot::Occupied { prev, .. } => *prev = new_prev,
            Slot::Free { .. } => panic!("corrupted list: slot {idx} is on the free list"),
        }
    }

    fn set_next(&mut self, idx: usize, new_next: Option<usize>) {
        match &mut self.slots[idx] {
            Slot::Occupied { next, .. } => *next = new_next,
            Slot::Free { .. } => panic!("corrupted list: slot {idx} is on the free list"),
        }
    }

    /// Caller guarantees `index < self.len`.
    fn slot_at(&self, index: usize) -> usize {
        let mut idx = self.head.expect("index in bounds implies a non-empty list");
        for _ in 0..index {
            idx = self.next_of(idx).expect("list shorter than its recorded length");
        }
        idx
    }

    /// Detaches `idx` from its neighbours (fixing up `head`/`tail` as
    /// needed) and returns its value.
    fn unlink(&mut self, idx: usize) -> T {
        let (prev, next) = self.links_of(idx);
        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.set_prev(n, prev),
            None => self.tail = prev,
        }
        self.len -= 1;
        self.release(idx)
    }

    /// Inserts `value` at the front of the list.
    pub fn push_front(&mut self, value: T) {
        let idx = self.alloc(value);
        self.set_next(idx, self.head);
        match self.head {
            Some(old) => self.set_prev(old, Some(idx)),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Appends `value` at the back of the list.
    pub fn push_back(&mut self, value: T) {
        let idx = self.alloc(value);
        self.set_prev(idx, self.tail);
        match self.tail {
            Some(old) => self.set_next(old, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// Valid positions are `0..=len`; `index == len` appends.
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
            let next = self.slot_at(index);
            let prev = self
                .links_of(next)
                .0
                .expect("interior slot has a predecessor");
            let idx = self.alloc(value);
            self.set_prev(idx, Some(prev));
            self.set_next(idx, Some(next));
            self.set_next(prev, Some(idx));
            self.set_prev(next, Some(idx));
            self.len += 1;
        }
        Ok(())
    }

    /// Removes and returns the first element, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let idx = self.head?;
        Some(self.unlink(idx))
    }

    /// Removes and returns the last element in O(1), or `None` if the list
    /// is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let idx = self.tail?;
        Some(self.unlink(idx))
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
        let idx = self.slot_at(index);
        Ok(self.unlink(idx))
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Returns `None` when no element matches.
    pub fn remove_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut cur = self.head;
        while let Some(idx) = cur {
            if self.value_of(idx) == value {
                return Some(self.unlink(idx));
            }
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
    /// Swaps the `prev`/`next` roles of every node rather than merely
    /// swapping `head` and `tail`, so backward traversal stays coherent
    /// after the call. O(len) time, O(1) extra space.
    pub fn reverse(&mut self) {
        let mut cur = self.head;
        while let Some(idx) = cur {
            let (prev, next) = self.links_of(idx);
            self.set_prev(idx, next);
            self.set_next(idx, prev);
            cur = next;
        }
        core::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Returns a double-ended iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

/// Double-ended iterator over a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        self.front = self.list.next_of(idx);
        self.remaining -= 1;
        Some(self.list.value_of(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        self.back = self.list.links_of(idx).0;
        self.remaining -= 1;
        Some(self.list.value_of(idx))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
