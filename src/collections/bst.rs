//! `BinarySearchTree` — an unbalanced binary search tree over a node arena.
//!
//! Nodes are appended to a `Vec` and never move; child links are indices into
//! it. There are no parent back-links and no deletion, so the arena only
//! grows and `len` is simply the arena length.
//!
//! The tree is never rebalanced. Sorted insertion degenerates it into a
//! chain, so every walk here (insert, search, in-order, height) is a loop
//! with at most an explicit stack, never call-stack recursion.
//!
//! Duplicate values are ignored: [`BinarySearchTree::insert`] returns `false`
//! and leaves the tree unchanged.

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;

#[derive(Clone)]
struct TreeNode<T> {
    value: T,
    left: Option<usize>,
    right: Option<usize>,
}

impl<T> TreeNode<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// An unbalanced binary search tree holding distinct values.
#[derive(Clone)]
pub struct BinarySearchTree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<usize>,
}

/// Lazy in-order (ascending) iterator over a [`BinarySearchTree`].
pub struct Iter<'a, T> {
    nodes: &'a [TreeNode<T>],
    stack: Vec<usize>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.current {
            self.stack.push(idx);
            self.current = self.nodes.get(idx).and_then(|node| node.left);
        }

        let node = self.nodes.get(self.stack.pop()?)?;
        self.current = node.right;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> BinarySearchTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the smallest value, following left links from the root.
    pub fn find_min(&self) -> Option<&T> {
        self.descend(|node| node.left)
    }

    /// Returns the largest value, following right links from the root.
    pub fn find_max(&self) -> Option<&T> {
        self.descend(|node| node.right)
    }

    /// Number of nodes on the longest root-to-leaf path; `0` when empty.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Some(node) = self.nodes.get(idx) {
                stack.extend(node.left.map(|child| (child, depth + 1)));
                stack.extend(node.right.map(|child| (child, depth + 1)));
            }
        }
        deepest
    }

    /// Returns an iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            stack: Vec::new(),
            current: self.root,
            remaining: self.nodes.len(),
        }
    }

    fn descend(&self, step: impl Fn(&TreeNode<T>) -> Option<usize>) -> Option<&T> {
        let mut node = self.nodes.get(self.root?)?;
        while let Some(next) = step(node).and_then(|idx| self.nodes.get(idx)) {
            node = next;
        }
        Some(&node.value)
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value`, attaching it at the first empty slot on its search path.
    ///
    /// Returns `false` if an equal value is already present; the tree is
    /// then unchanged.
    pub fn insert(&mut self, value: T) -> bool {
        let new_idx = self.nodes.len();
        let Some(mut current) = self.root else {
            self.nodes.push(TreeNode::leaf(value));
            self.root = Some(new_idx);
            trace_event!(len = 1, "bst.insert");
            return true;
        };

        loop {
            let Some(node) = self.nodes.get_mut(current) else {
                return false;
            };
            let link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace_event!(len = new_idx, "bst.insert duplicate ignored");
                    return false;
                }
            };
            match *link {
                Some(child) => current = child,
                None => {
                    *link = Some(new_idx);
                    break;
                }
            }
        }

        self.nodes.push(TreeNode::leaf(value));
        trace_event!(len = self.nodes.len(), "bst.insert");
        true
    }

    /// Returns `true` if a value equal to `value` is stored.
    pub fn search(&self, value: &T) -> bool {
        let mut cursor = self.root;
        while let Some(node) = cursor.and_then(|idx| self.nodes.get(idx)) {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Alias for [`BinarySearchTree::search`].
    pub fn contains(&self, value: &T) -> bool {
        self.search(value)
    }
}

impl<T: Clone> BinarySearchTree<T> {
    /// Returns every value in ascending order.
    pub fn inorder_traversal(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_search_and_order() {
        let mut tree = BinarySearchTree::new();
        for v in [5, 3, 7, 1, 9, 4] {
            assert!(tree.insert(v));
        }
        for v in [5, 3, 7, 1, 9, 4] {
            assert!(tree.search(&v));
        }
        assert!(!tree.search(&10));
        assert!(!tree.contains(&6));
        assert_eq!(tree.inorder_traversal(), vec![1, 3, 4, 5, 7, 9]);
        assert_eq!(tree.find_min(), Some(&1));
        assert_eq!(tree.find_max(), Some(&9));
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_duplicates_are_ignored() {
        let mut tree = BinarySearchTree::new();
        assert!(tree.insert(2));
        assert!(tree.insert(1));
        assert!(!tree.insert(2));
        assert!(!tree.insert(1));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.inorder_traversal(), vec![1, 2]);
    }

    #[test]
    fn test_empty_tree() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::new();
        assert!(tree.is_empty());
        assert!(!tree.search(&1));
        assert_eq!(tree.find_min(), None);
        assert_eq!(tree.find_max(), None);
        assert_eq!(tree.inorder_traversal(), Vec::<i32>::new());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn test_single_node_min_max() {
        let tree: BinarySearchTree<&str> = std::iter::once("root").collect();
        assert_eq!(tree.find_min(), Some(&"root"));
        assert_eq!(tree.find_max(), Some(&"root"));
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_degenerate_chain_does_not_recurse() {
        // Sorted input makes every node a right child of the previous one.
        let tree: BinarySearchTree<u32> = (0..5_000).collect();
        assert_eq!(tree.height(), 5_000);
        assert_eq!(tree.find_max(), Some(&4_999));
        assert!(tree.search(&4_998));
        assert!(tree.iter().copied().eq(0..5_000));
    }

    #[test]
    fn test_iter_is_exact_size() {
        let tree: BinarySearchTree<i32> = [4, 2, 6].into_iter().collect();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(format!("{tree:?}"), "{2, 4, 6}");
    }

    #[test]
    fn test_clear() {
        let mut tree: BinarySearchTree<i32> = (0..10).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.insert(3));
        assert_eq!(tree.inorder_traversal(), vec![3]);
    }
}
