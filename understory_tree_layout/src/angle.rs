// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-angle edge placement.

use kurbo::{Point, Vec2};
use understory_bst::BinaryTree;
use understory_sequence::Sequence;

use crate::params::{InvalidParameter, finite, positive};
use crate::record::LayoutRecord;
use crate::walk::{Placement, Side, pow2, walk_preorder};
use crate::{MAX_HALVING_HEIGHT, SubtreeWidth, TreeLayout};

/// Children hang from their parent along straight edges at a fixed angle from the vertical.
///
/// Edge lengths halve at every level, starting from a length chosen so the deepest edges reach
/// `spacing` horizontally. The horizontal reach therefore follows the same halving series as
/// [`HalvingOffset`](crate::HalvingOffset), so sibling subtrees never overlap, while the vertical
/// gap between levels shrinks with depth.
///
/// Trees taller than [`MAX_HALVING_HEIGHT`] are placed on [`SubtreeWidth`] columns `spacing`
/// apart, with levels spaced so a one-column step keeps the configured angle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AngleLine {
    /// Horizontal reach of the deepest edges.
    pub spacing: f64,
    /// Angle between an edge and the vertical, in degrees. Clamped to `[1, 89]`.
    pub angle_degrees: f64,
}

impl Default for AngleLine {
    fn default() -> Self {
        Self {
            spacing: 24.0,
            angle_degrees: 35.0,
        }
    }
}

impl AngleLine {
    /// Unit edge direction for a right child; `x` is the sine and `y` the cosine of the angle.
    fn direction(&self) -> Vec2 {
        let angle = self.angle_degrees.clamp(1.0, 89.0).to_radians();
        let v = Vec2::from_angle(angle);
        Vec2::new(v.y, v.x)
    }
}

impl TreeLayout for AngleLine {
    fn layout_into<T: Copy>(&self, tree: &BinaryTree<T>, out: &mut Sequence<LayoutRecord<T>>) {
        let dir = self.direction();
        let height = tree.height();
        if height > MAX_HALVING_HEIGHT {
            let columns = SubtreeWidth {
                spacing: self.spacing,
                vertical_step: self.spacing * dir.y / dir.x,
            };
            return columns.layout_into(tree, out);
        }
        let root = Placement {
            position: Point::ZERO,
            spread: self.spacing * pow2(height - 1) / dir.x,
        };
        walk_preorder(
            tree,
            out,
            root,
            |parent, side| {
                let edge = dir * parent.spread;
                let edge = match side {
                    Side::Left => Vec2::new(-edge.x, edge.y),
                    Side::Right => edge,
                };
                Placement {
                    position: parent.position + edge,
                    spread: parent.spread * 0.5,
                }
            },
            None,
        );
    }

    fn validate(&self) -> Result<(), InvalidParameter> {
        positive("spacing", self.spacing)?;
        finite("angle_degrees", self.angle_degrees)
    }
}
