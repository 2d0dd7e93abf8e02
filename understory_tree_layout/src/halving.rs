// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset-halving placement.

use kurbo::{Point, Vec2};
use understory_bst::BinaryTree;
use understory_sequence::Sequence;

use crate::params::{InvalidParameter, positive};
use crate::record::LayoutRecord;
use crate::walk::{Placement, Side, pow2, walk_preorder};
use crate::{SubtreeWidth, TreeLayout};

/// Tallest tree the halving strategies place with halving offsets.
///
/// Taller trees are placed on in-order rank columns as [`SubtreeWidth`] does, keeping positions
/// finite and distinct instead of letting the deepest offsets vanish below `f64` precision.
pub const MAX_HALVING_HEIGHT: isize = 32;

/// Children sit `offset` to either side of their parent, one `vertical_step` below, and the offset
/// halves at every level.
///
/// The root's offset is `spacing × 2^(height - 1)`, so the deepest edges use exactly `spacing`.
/// A subtree's total horizontal reach is then strictly less than the offset that separates it from
/// its parent, which keeps every left subtree left of its parent and every right subtree right of it.
///
/// Offsets grow exponentially with height, so trees taller than [`MAX_HALVING_HEIGHT`] are placed
/// on [`SubtreeWidth`] columns with the same `spacing` and `vertical_step`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HalvingOffset {
    /// Half-offset used on the deepest level of edges.
    pub spacing: f64,
    /// Vertical distance between levels.
    pub vertical_step: f64,
}

impl Default for HalvingOffset {
    fn default() -> Self {
        Self {
            spacing: 24.0,
            vertical_step: 48.0,
        }
    }
}

impl TreeLayout for HalvingOffset {
    fn layout_into<T: Copy>(&self, tree: &BinaryTree<T>, out: &mut Sequence<LayoutRecord<T>>) {
        let height = tree.height();
        if height > MAX_HALVING_HEIGHT {
            let columns = SubtreeWidth {
                spacing: self.spacing,
                vertical_step: self.vertical_step,
            };
            return columns.layout_into(tree, out);
        }
        let root = Placement {
            position: Point::ZERO,
            spread: self.spacing * pow2(height - 1),
        };
        walk_preorder(
            tree,
            out,
            root,
            |parent, side| {
                let dx = match side {
                    Side::Left => -parent.spread,
                    Side::Right => parent.spread,
                };
                Placement {
                    position: parent.position + Vec2::new(dx, self.vertical_step),
                    spread: parent.spread * 0.5,
                }
            },
            None,
        );
    }

    fn validate(&self) -> Result<(), InvalidParameter> {
        positive("spacing", self.spacing)?;
        positive("vertical_step", self.vertical_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{
        assert_parents_match_tree, assert_siblings_disjoint, random_trees, tall_tree,
    };
    use alloc::vec::Vec;

    const UNIT: HalvingOffset = HalvingOffset {
        spacing: 1.0,
        vertical_step: 1.0,
    };

    #[test]
    fn sample_tree_positions() {
        let tree: BinaryTree<i32> = [5, 3, 2, 4, 7, 6, 8].into_iter().collect();
        let records = UNIT.layout(&tree);
        let placed: Vec<(i32, f64, f64)> = records
            .iter()
            .map(|r| (r.value, r.position.x, r.position.y))
            .collect();
        assert_eq!(
            placed,
            [
                (5, 0.0, 0.0),
                (3, -2.0, 1.0),
                (2, -3.0, 2.0),
                (4, -1.0, 2.0),
                (7, 2.0, 1.0),
                (6, 1.0, 2.0),
                (8, 3.0, 2.0),
            ]
        );
    }

    #[test]
    fn single_node_sits_at_origin() {
        let tree: BinaryTree<u8> = core::iter::once(1).collect();
        let records = HalvingOffset::default().layout(&tree);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].position, Point::ZERO);
        assert_eq!(records[0].parent, None);
    }

    #[test]
    fn empty_tree_lays_out_nothing() {
        let tree: BinaryTree<u8> = BinaryTree::new();
        assert!(HalvingOffset::default().layout(&tree).is_empty());
    }

    #[test]
    fn subtrees_stay_on_their_side() {
        for tree in random_trees(40, 48) {
            let records = HalvingOffset::default().layout(&tree);
            assert_eq!(records.len(), tree.len());
            for r in records.iter() {
                let Some(parent) = r.parent_record(&records) else {
                    continue;
                };
                if r.value < parent.value {
                    assert!(r.position.x < parent.position.x);
                } else {
                    assert!(r.position.x > parent.position.x);
                }
            }
            assert_siblings_disjoint(&records);
            assert_parents_match_tree(&tree, &records);
        }
    }

    #[test]
    fn reuses_the_output_buffer() {
        let tree: BinaryTree<i32> = (0..20).map(|i| (i * 7) % 20).collect();
        let mut out = Sequence::new();
        UNIT.layout_into(&tree, &mut out);
        let size = out.size();
        let reallocations = out.reallocations();
        for _ in 0..10 {
            UNIT.layout_into(&tree, &mut out);
        }
        assert_eq!(out.len(), 20);
        assert_eq!(out.size(), size);
        assert_eq!(out.reallocations(), reallocations);
    }

    #[test]
    fn tall_trees_keep_siblings_apart() {
        let tree = tall_tree(60);
        assert_eq!(tree.height(), 60);
        let records = HalvingOffset::default().layout(&tree);
        assert!(records.iter().all(|r| r.position.x.is_finite()));
        assert_siblings_disjoint(&records);
        assert_parents_match_tree(&tree, &records);

        let deep = |v: u32| records.iter().find(|r| r.value == v).unwrap().position.x;
        assert!(deep(585) < deep(590) && deep(590) < deep(595));
    }

    #[test]
    fn very_tall_trees_stay_finite() {
        let tree: BinaryTree<u32> = (0..1_500).collect();
        let records = HalvingOffset::default().layout(&tree);
        assert!(records.iter().all(|r| r.position.x.is_finite()));
        assert_eq!(records.last().unwrap().position.x, 1_499.0 * 24.0);
    }

    #[test]
    fn height_at_the_bound_still_halves() {
        let top = u32::try_from(MAX_HALVING_HEIGHT).unwrap();
        let tree: BinaryTree<u32> = (0..=top).collect();
        assert_eq!(tree.height(), MAX_HALVING_HEIGHT);
        let records = UNIT.layout(&tree);
        // The deepest edge uses exactly `spacing`.
        let [.., parent, leaf] = records.as_slice() else {
            panic!("tree has at least two nodes");
        };
        assert_eq!(leaf.position.x - parent.position.x, 1.0);
    }

    #[test]
    fn validate_rejects_degenerate_spacing() {
        assert!(HalvingOffset::default().validate().is_ok());
        for spacing in [0.0, -24.0, f64::NAN] {
            let layout = HalvingOffset {
                spacing,
                ..HalvingOffset::default()
            };
            assert_eq!(layout.validate().unwrap_err().name, "spacing");
        }
        let flat = HalvingOffset {
            vertical_step: 0.0,
            ..HalvingOffset::default()
        };
        assert_eq!(flat.validate().unwrap_err().name, "vertical_step");
    }
}
