// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree structure, insertion and height.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::traverse::{InOrder, PreOrder};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced binary search tree.
///
/// Each node owns its children; there are no parent pointers.
/// For every node, values in its left subtree compare less than its value, and values in its
/// right subtree compare greater than or equal to it.
pub struct BinaryTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BinaryTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl<T: PartialOrd + Clone> Clone for BinaryTree<T> {
    fn clone(&self) -> Self {
        // Re-inserting in pre-order reproduces the same shape.
        self.traverse_preorder().cloned().collect()
    }
}

impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> BinaryTree<T> {
    /// Create an empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of values inserted.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read-only view of the root node.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.as_deref().map(NodeRef)
    }

    /// Longest root-to-leaf path, counted in edges.
    ///
    /// An empty tree has height `-1` and a single node has height `0`.
    pub fn height(&self) -> isize {
        self.root().map_or(-1, |root| root.height())
    }

    /// Values in ascending order. Each call starts a fresh traversal.
    pub fn traverse_inorder(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref(), self.len)
    }

    /// Values in pre-order: node, left subtree, right subtree.
    pub fn traverse_preorder(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root.as_deref(), self.len)
    }
}

impl<T: PartialOrd> BinaryTree<T> {
    /// Insert `value`. Never fails; equal values go to the right.
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::leaf(value)));
        self.len += 1;
    }

    /// Whether some node's value equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            if *value == node.value {
                return true;
            }
            cursor = if *value < node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }
}

impl<T: PartialOrd> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: PartialOrd> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Read-only view of one node in a [`BinaryTree`].
pub struct NodeRef<'a, T>(&'a Node<T>);

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", &self.0.value)
            .field("has_left", &self.0.left.is_some())
            .field("has_right", &self.0.right.is_some())
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    /// The node's value.
    pub fn value(self) -> &'a T {
        &self.0.value
    }

    /// Left child, holding smaller values.
    pub fn left(self) -> Option<Self> {
        self.0.left.as_deref().map(NodeRef)
    }

    /// Right child, holding greater or equal values.
    pub fn right(self) -> Option<Self> {
        self.0.right.as_deref().map(NodeRef)
    }

    /// Whether the node has no children.
    pub fn is_leaf(self) -> bool {
        self.0.left.is_none() && self.0.right.is_none()
    }

    /// Height of the subtree rooted here; `0` for a leaf.
    pub fn height(self) -> isize {
        let mut level: Vec<&Node<T>> = alloc::vec![self.0];
        let mut height = -1;
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|n| [n.left.as_deref(), n.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }

    /// Number of nodes in the subtree rooted here.
    pub fn subtree_len(self) -> usize {
        let mut pending = alloc::vec![self.0];
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    /// Xorshift generator for deterministic inputs.
    struct Rng(u64);

    impl Rng {
        fn next_u64(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }
    }

    #[test]
    fn inorder_of_sample_tree() {
        let tree: BinaryTree<i32> = [5, 3, 2, 4, 7, 6, 8].into_iter().collect();
        let sorted: Vec<i32> = tree.traverse_inorder().copied().collect();
        assert_eq!(sorted, [2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn inorder_is_restartable() {
        let tree: BinaryTree<u8> = [3, 1, 2].into_iter().collect();
        let first: Vec<u8> = tree.traverse_inorder().copied().collect();
        let second: Vec<u8> = tree.traverse_inorder().copied().collect();
        assert_eq!(first, second);

        let mut partial = tree.traverse_inorder();
        assert_eq!(partial.next(), Some(&1));
        let resumed = partial.clone();
        assert_eq!(partial.count(), 2);
        assert_eq!(resumed.copied().collect::<Vec<_>>(), [2, 3]);
    }

    #[test]
    fn duplicates_are_kept_and_go_right() {
        let tree: BinaryTree<i32> = [4, 4, 2, 4, 2].into_iter().collect();
        assert_eq!(tree.len(), 5);
        let sorted: Vec<i32> = tree.traverse_inorder().copied().collect();
        assert_eq!(sorted, [2, 2, 4, 4, 4]);

        let root = tree.root().unwrap();
        assert_eq!(root.right().map(|n| *n.value()), Some(4));
        assert_eq!(root.left().and_then(|n| n.right()).map(|n| *n.value()), Some(2));
    }

    #[test]
    fn inorder_sorts_and_preserves_multiset() {
        let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
        for round in 0..50 {
            let n = (rng.next_u64() % 64) as usize;
            let values: Vec<u64> = (0..n).map(|_| rng.next_u64() % 20).collect();
            let tree: BinaryTree<u64> = values.iter().copied().collect();

            let walked: Vec<u64> = tree.traverse_inorder().copied().collect();
            assert!(walked.windows(2).all(|w| w[0] <= w[1]), "round {round}");

            let mut expected = values.clone();
            expected.sort_unstable();
            assert_eq!(walked, expected, "round {round}");
            assert_eq!(tree.traverse_inorder().len(), n);
        }
    }

    #[test]
    fn height_convention() {
        let mut tree = BinaryTree::new();
        assert_eq!(tree.height(), -1);
        tree.insert(10);
        assert_eq!(tree.height(), 0);
        tree.insert(5);
        assert_eq!(tree.height(), 1);
        tree.insert(15);
        assert_eq!(tree.height(), 1);
        tree.insert(1);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.root().unwrap().right().unwrap().height(), 0);
    }

    #[test]
    fn degenerate_tree_is_handled_iteratively() {
        let n = 10_000;
        let tree: BinaryTree<u32> = (0..n).collect();
        assert_eq!(tree.height(), isize::try_from(n - 1).unwrap());
        assert_eq!(tree.traverse_inorder().count(), n as usize);
        assert!(tree.contains(&(n - 1)));
        drop(tree);
    }

    #[test]
    fn contains_follows_insertion_path() {
        let tree: BinaryTree<f32> = [0.5, -1.0, 2.25, 2.25].into_iter().collect();
        assert!(tree.contains(&2.25));
        assert!(tree.contains(&-1.0));
        assert!(!tree.contains(&3.0));
        assert!(!tree.contains(&f32::NAN));
    }

    #[test]
    fn clone_has_same_shape() {
        let tree: BinaryTree<i32> = [5, 3, 2, 4, 7, 6, 8, 7].into_iter().collect();
        let copy = tree.clone();
        let a: Vec<i32> = tree.traverse_preorder().copied().collect();
        let b: Vec<i32> = copy.traverse_preorder().copied().collect();
        assert_eq!(a, b);
        assert_eq!(copy.height(), tree.height());
    }

    #[test]
    fn node_views() {
        let tree: BinaryTree<i32> = vec![5, 3, 2, 4, 7].into_iter().collect();
        let root = tree.root().unwrap();
        assert!(!root.is_leaf());
        assert_eq!(root.subtree_len(), 5);
        let left = root.left().unwrap();
        assert_eq!(left.subtree_len(), 3);
        assert!(left.left().unwrap().is_leaf());
        assert!(root.right().unwrap().right().is_none());
    }
}
