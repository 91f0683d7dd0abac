//! `LinkedList` — a singly linked list stored in a slot arena.
//!
//! Nodes are kept in a `Vec` of slots and linked by index. Removed nodes are
//! threaded onto an intrusive free list and reused by later insertions, so a
//! list that churns does not grow its backing storage.
//!
//! The list caches its tail index, which makes both [`LinkedList::append`]
//! and [`LinkedList::prepend`] O(1). Search and removal are linear scans from
//! the head.

use core::fmt;
use core::iter::FusedIterator;
use core::mem;

/// A slot in the node arena.
#[derive(Clone)]
enum Slot<T> {
    Occupied { value: T, next: Option<usize> },
    Free(Option<usize>), // Next free slot index
}

/// A singly linked list.
#[derive(Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

/// Borrowing head-to-tail iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        match self.slots.get(idx) {
            Some(Slot::Occupied { value, next }) => {
                self.current = *next;
                self.remaining = self.remaining.saturating_sub(1);
                Some(value)
            }
            _ => {
                self.current = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element and releases the arena's slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    /// Returns a reference to the first element.
    pub fn front(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Returns an iterator over the elements, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Adds `value` as the new tail.
    pub fn append(&mut self, value: T) {
        let idx = self.alloc(value, None);
        match self.tail {
            Some(tail) => self.set_next(tail, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        trace_event!(len = self.len, "linked_list.append");
    }

    /// Adds `value` as the new head.
    pub fn prepend(&mut self, value: T) {
        let idx = self.alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.head = Some(idx);
        self.len += 1;
        trace_event!(len = self.len, "linked_list.prepend");
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let next = self.next_of(head);
        let value = self.release(head)?;

        self.head = next;
        if next.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(value)
    }

    fn next_of(&self, idx: usize) -> Option<usize> {
        match self.slots.get(idx) {
            Some(Slot::Occupied { next, .. }) => *next,
            _ => None,
        }
    }

    fn set_next(&mut self, idx: usize, link: Option<usize>) {
        if let Some(Slot::Occupied { next, .. }) = self.slots.get_mut(idx) {
            *next = link;
        }
    }

    /// Places a node in a free slot, or grows the arena when none is free.
    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let node = Slot::Occupied { value, next };

        if let Some(idx) = self.free_head {
            if let Some(slot) = self.slots.get_mut(idx) {
                let previous = mem::replace(slot, node);
                debug_assert!(matches!(previous, Slot::Free(_)), "corrupted free list");
                self.free_head = match previous {
                    Slot::Free(next_free) => next_free,
                    Slot::Occupied { .. } => None,
                };
                return idx;
            }
        }

        self.slots.push(node);
        self.slots.len() - 1
    }

    /// Moves the value out of slot `idx` and pushes the slot onto the free list.
    ///
    /// Callers must unlink the node before releasing it.
    fn release(&mut self, idx: usize) -> Option<T> {
        let slot = self.slots.get_mut(idx)?;
        match mem::replace(slot, Slot::Free(self.free_head)) {
            Slot::Occupied { value, .. } => {
                self.free_head = Some(idx);
                Some(value)
            }
            free @ Slot::Free(_) => {
                *slot = free;
                None
            }
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns `true` if any element equals `value`.
    pub fn find(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Removes the first element (head to tail) equal to `value`.
    ///
    /// Returns `false` and leaves the list untouched when no element matches.
    pub fn delete(&mut self, value: &T) -> bool {
        let mut prev = None;
        let mut cursor = self.head;

        while let Some(idx) = cursor {
            let (matches, next) = match self.slots.get(idx) {
                Some(Slot::Occupied { value: v, next }) => (v == value, *next),
                _ => break,
            };

            if matches {
                match prev {
                    Some(p) => self.set_next(p, next),
                    None => self.head = next,
                }
                if self.tail == Some(idx) {
                    self.tail = prev;
                }
                self.release(idx);
                self.len -= 1;
                trace_event!(len = self.len, removed = true, "linked_list.delete");
                return true;
            }

            prev = Some(idx);
            cursor = next;
        }

        trace_event!(len = self.len, removed = false, "linked_list.delete");
        false
    }
}

impl<T: Clone> LinkedList<T> {
    /// Returns the elements head to tail as a `Vec`.
    pub fn to_list(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
