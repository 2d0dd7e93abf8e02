// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tree_layout --heading-base-level=0

//! Understory Tree Layout: place a binary search tree on the plane.
//!
//! A layout pass walks a [`BinaryTree`] once, depth-first in pre-order (node, left subtree, right
//! subtree), starting with the root at the origin, and emits one [`LayoutRecord`] per node into a
//! [`Sequence`]. Each record carries the node's value, its position, its depth, and a
//! [`RecordIndex`] back-reference to its parent's record so a renderer can draw the connecting edge.
//!
//! ## Guarantee
//!
//! For every node with two children, no `x` position used in its left subtree is used in its right
//! subtree. All strategies provide this:
//!
//! - [`HalvingOffset`] (default): children at `x ∓ offset`, one step down, offset halved per level.
//! - [`AngleLine`]: edges at a fixed angle from the vertical with lengths halving per level.
//! - [`SubtreeWidth`]: true subtree widths; one column per node in in-order, the most compact.
//!
//! [`LayoutStrategy`] wraps the three for runtime selection.
//!
//! The halving strategies place trees taller than [`MAX_HALVING_HEIGHT`] on in-order rank columns,
//! so the guarantee holds at every height. Parameters are checked by [`TreeLayout::validate`]: a
//! zero, negative or non-finite spacing would collapse or mirror subtrees.
//!
//! ## Reuse across frames
//!
//! [`TreeLayout::layout_into`] resets the output sequence and refills it, reusing its buffer.
//! Records are `Copy` and own nothing, so the reset cannot leak. Parent references are only
//! valid until the next reset.
//!
//! # Example
//!
//! ```rust
//! use understory_bst::BinaryTree;
//! use understory_tree_layout::{HalvingOffset, TreeLayout};
//!
//! let tree: BinaryTree<i32> = [5, 3, 2, 4, 7, 6, 8].into_iter().collect();
//! let layout = HalvingOffset { spacing: 10.0, vertical_step: 40.0 };
//! let records = layout.layout(&tree);
//!
//! assert_eq!(records.len(), 7);
//! assert_eq!(records[0].value, 5);
//! assert!(records[0].parent.is_none());
//!
//! // The left child of the root sits left of it, one level down.
//! let three = records.iter().find(|r| r.value == 3).unwrap();
//! assert_eq!(three.parent_record(&records).map(|p| p.value), Some(5));
//! assert!(three.position.x < 0.0);
//! assert_eq!(three.position.y, 40.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod angle;
mod halving;
mod params;
mod record;
mod strategy;
mod walk;
mod width;

#[cfg(test)]
mod checks;

pub use angle::AngleLine;
pub use halving::{HalvingOffset, MAX_HALVING_HEIGHT};
pub use params::InvalidParameter;
pub use record::{LayoutRecord, RecordIndex, bounds};
pub use strategy::LayoutStrategy;
pub use width::SubtreeWidth;

use understory_bst::BinaryTree;
use understory_sequence::Sequence;

/// A way of placing tree nodes on the plane.
///
/// Implementations must emit records in pre-order with correct parent references and must keep
/// sibling subtrees on disjoint `x` positions.
pub trait TreeLayout {
    /// Replace the contents of `out` with a layout of `tree`.
    ///
    /// `out` is reset first; its buffer is reused. The tree is not modified.
    fn layout_into<T: Copy>(&self, tree: &BinaryTree<T>, out: &mut Sequence<LayoutRecord<T>>);

    /// Check the strategy's parameters.
    ///
    /// Layouts from a strategy that fails this check have unspecified positions.
    fn validate(&self) -> Result<(), InvalidParameter> {
        Ok(())
    }

    /// Lay out `tree` into a fresh sequence.
    fn layout<T: Copy>(&self, tree: &BinaryTree<T>) -> Sequence<LayoutRecord<T>> {
        let mut out = Sequence::with_capacity(tree.len());
        self.layout_into(tree, &mut out);
        out
    }
}
