// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_bst --heading-base-level=0

//! Understory BST: an unbalanced binary search tree built by repeated insertion.
//!
//! - [`BinaryTree::insert`] always succeeds. It walks from the root, going left while the new value
//!   compares less than the node's value and right otherwise, so duplicates land in right subtrees.
//! - [`BinaryTree::height`] uses the convention: empty tree `-1`, a single node `0`, `+1` per level.
//! - [`BinaryTree::traverse_inorder`] is a lazy, restartable iterator yielding values in ascending order.
//! - [`BinaryTree::traverse_preorder`] yields node, then left subtree, then right subtree.
//! - [`NodeRef`] is a read-only view of a node, used by layout code to walk the structure.
//!
//! There is no removal and no rebalancing. Inserting sorted input produces a degenerate, list-shaped
//! tree; insertion, height, traversal and drop are all iterative so such trees do not exhaust the stack.
//!
//! # Example
//!
//! ```rust
//! use understory_bst::BinaryTree;
//!
//! let tree: BinaryTree<i32> = [5, 3, 2, 4, 7, 6, 8].into_iter().collect();
//!
//! let sorted: Vec<i32> = tree.traverse_inorder().copied().collect();
//! assert_eq!(sorted, [2, 3, 4, 5, 6, 7, 8]);
//!
//! let visit: Vec<i32> = tree.traverse_preorder().copied().collect();
//! assert_eq!(visit, [5, 3, 2, 4, 7, 6, 8]);
//!
//! assert_eq!(tree.height(), 2);
//! assert_eq!(BinaryTree::<i32>::new().height(), -1);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(*root.value(), 5);
//! assert_eq!(root.left().map(|n| *n.value()), Some(3));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod traverse;
mod tree;

pub use traverse::{InOrder, PreOrder};
pub use tree::{BinaryTree, NodeRef};
