//! `MinHeap` — a priority queue implemented with a binary min-heap.
//!
//! The heap is a dense `Vec` laid out as a complete binary tree: the element
//! at index `i` has children at `2i + 1` and `2i + 2`. Every element is less
//! than or equal to its children, so the minimum is always at index 0.

use core::fmt;

/// A priority queue that always yields its smallest element first.
#[derive(Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T> MinHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with a specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Alias for [`MinHeap::size`].
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity of the heap.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns a reference to the smallest element.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Clears the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over all elements in the heap in arbitrary order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Ord> MinHeap<T> {
    /// Pushes an item onto the heap.
    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
        trace_event!(len = self.data.len(), "min_heap.insert");
    }

    /// Removes and returns the smallest item.
    pub fn extract_min(&mut self) -> Option<T> {
        let item = self.data.pop()?;
        let min = if self.data.is_empty() {
            item
        } else {
            // The former last element takes the root's place and sinks.
            let min = core::mem::replace(&mut self.data[0], item);
            self.sift_down(0);
            min
        };
        trace_event!(len = self.data.len(), "min_heap.extract_min");
        Some(min)
    }

    /// Consumes the heap and returns its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.extract_min() {
            sorted.push(item);
        }
        sorted
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.data[node] < self.data[parent] {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.data[right] < self.data[left] {
                smaller = right;
            }

            if self.data[smaller] < self.data[node] {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    /// Builds a heap in O(n) by sifting down every internal node, last first.
    fn from(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        for node in (0..heap.data.len() / 2).rev() {
            heap.sift_down(node);
        }
        heap
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.len())
            .field("min", &self.peek())
            .finish()
    }
}
