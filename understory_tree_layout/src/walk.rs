// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pre-order placement walk.

use alloc::vec;
use alloc::vec::Vec;
use kurbo::Point;
use understory_bst::BinaryTree;
use understory_sequence::Sequence;

use crate::record::{LayoutRecord, RecordIndex};

/// Which child of its parent a node is.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left = 0,
    Right = 1,
}

/// Placement state carried down the walk.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Placement {
    pub(crate) position: Point,
    /// Strategy-defined spread for the next level (half-offset or edge length).
    pub(crate) spread: f64,
}

/// `[left, right]` child record indices, per record.
pub(crate) type Links = Vec<[Option<usize>; 2]>;

/// Visit nodes in pre-order (node, left, right), pushing one record per node into `out`.
///
/// `out` is reset first. `place_child` derives a child's placement from its parent's.
/// When `links` is given it is cleared and filled with each record's child indices.
pub(crate) fn walk_preorder<T: Copy>(
    tree: &BinaryTree<T>,
    out: &mut Sequence<LayoutRecord<T>>,
    root: Placement,
    mut place_child: impl FnMut(&Placement, Side) -> Placement,
    mut links: Option<&mut Links>,
) {
    out.reset();
    if let Some(links) = links.as_deref_mut() {
        links.clear();
    }
    let Some(root_node) = tree.root() else {
        return;
    };

    let mut stack = vec![(root_node, root, 0_usize, None::<(RecordIndex, Side)>)];
    while let Some((node, placement, depth, parent)) = stack.pop() {
        let index = out.len();
        out.push(LayoutRecord {
            value: *node.value(),
            position: placement.position,
            depth,
            parent: parent.map(|(p, _)| p),
        });
        if let Some(links) = links.as_deref_mut() {
            links.push([None, None]);
            if let Some((p, side)) = parent {
                links[p.0][side as usize] = Some(index);
            }
        }

        let me = RecordIndex(index);
        // Right is pushed first so the left subtree is emitted first.
        if let Some(right) = node.right() {
            let child = place_child(&placement, Side::Right);
            stack.push((right, child, depth + 1, Some((me, Side::Right))));
        }
        if let Some(left) = node.left() {
            let child = place_child(&placement, Side::Left);
            stack.push((left, child, depth + 1, Some((me, Side::Left))));
        }
    }
}

/// `2^exp` without relying on `std` float intrinsics.
pub(crate) fn pow2(exp: isize) -> f64 {
    let mut v = 1.0;
    if exp >= 0 {
        for _ in 0..exp {
            v *= 2.0;
        }
    } else {
        for _ in exp..0 {
            v *= 0.5;
        }
    }
    v
}
