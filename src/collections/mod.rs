//! Sequence, tree and priority containers.
//!
//! Collections are organized by data structure type:
//! - `linked_list`: singly linked list backed by a slot arena
//! - `bst`: unbalanced binary search tree backed by a node arena
//! - `min_heap`: array-backed binary min-heap

pub mod bst;
pub mod linked_list;
pub mod min_heap;

pub use bst::BinarySearchTree;
pub use linked_list::LinkedList;
pub use min_heap::MinHeap;
