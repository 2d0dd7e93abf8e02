// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact placement from true subtree widths.

use alloc::vec::Vec;
use kurbo::{Point, Vec2};
use understory_bst::BinaryTree;
use understory_sequence::Sequence;

use crate::TreeLayout;
use crate::params::{InvalidParameter, positive};
use crate::record::LayoutRecord;
use crate::walk::{Links, Placement, walk_preorder};

/// Every node gets its own column: a node sits one column right of everything in its left
/// subtree, and its right subtree starts one column right of it.
///
/// Columns are `spacing` apart and the root stays at `x = 0`. For a search tree the column of a
/// node equals its in-order rank, so the drawing is as narrow as possible without two nodes sharing
/// an `x` position, and it stays well-conditioned for any height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SubtreeWidth {
    /// Horizontal distance between adjacent columns.
    pub spacing: f64,
    /// Vertical distance between levels.
    pub vertical_step: f64,
}

impl Default for SubtreeWidth {
    fn default() -> Self {
        Self {
            spacing: 24.0,
            vertical_step: 48.0,
        }
    }
}

impl TreeLayout for SubtreeWidth {
    fn layout_into<T: Copy>(&self, tree: &BinaryTree<T>, out: &mut Sequence<LayoutRecord<T>>) {
        let mut links = Links::with_capacity(tree.len());
        walk_preorder(
            tree,
            out,
            Placement {
                position: Point::ZERO,
                spread: 0.0,
            },
            |parent, _| Placement {
                position: parent.position + Vec2::new(0.0, self.vertical_step),
                spread: 0.0,
            },
            Some(&mut links),
        );

        let records = out.as_mut_slice();
        let mut column = 0.0;
        let mut pending: Vec<usize> = Vec::new();
        let mut cursor = (!records.is_empty()).then_some(0);
        loop {
            while let Some(i) = cursor {
                pending.push(i);
                cursor = links[i][0];
            }
            let Some(i) = pending.pop() else {
                break;
            };
            records[i].position.x = column * self.spacing;
            column += 1.0;
            cursor = links[i][1];
        }

        if let Some(root_x) = records.first().map(|r| r.position.x) {
            for r in records {
                r.position.x -= root_x;
            }
        }
    }

    fn validate(&self) -> Result<(), InvalidParameter> {
        positive("spacing", self.spacing)?;
        positive("vertical_step", self.vertical_step)
    }
}
