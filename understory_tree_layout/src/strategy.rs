// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime choice between the built-in strategies.

use understory_bst::BinaryTree;
use understory_sequence::Sequence;

use crate::params::InvalidParameter;
use crate::record::LayoutRecord;
use crate::{AngleLine, HalvingOffset, SubtreeWidth, TreeLayout};

/// One of the built-in strategies, chosen at runtime (for example from a command-line flag).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LayoutStrategy {
    /// See [`HalvingOffset`].
    HalvingOffset(HalvingOffset),
    /// See [`AngleLine`].
    AngleLine(AngleLine),
    /// See [`SubtreeWidth`].
    SubtreeWidth(SubtreeWidth),
}

impl Default for LayoutStrategy {
    fn default() -> Self {
        Self::HalvingOffset(HalvingOffset::default())
    }
}

impl From<HalvingOffset> for LayoutStrategy {
    fn from(layout: HalvingOffset) -> Self {
        Self::HalvingOffset(layout)
    }
}

impl From<AngleLine> for LayoutStrategy {
    fn from(layout: AngleLine) -> Self {
        Self::AngleLine(layout)
    }
}

impl From<SubtreeWidth> for LayoutStrategy {
    fn from(layout: SubtreeWidth) -> Self {
        Self::SubtreeWidth(layout)
    }
}

impl TreeLayout for LayoutStrategy {
    fn layout_into<T: Copy>(&self, tree: &BinaryTree<T>, out: &mut Sequence<LayoutRecord<T>>) {
        match self {
            Self::HalvingOffset(layout) => layout.layout_into(tree, out),
            Self::AngleLine(layout) => layout.layout_into(tree, out),
            Self::SubtreeWidth(layout) => layout.layout_into(tree, out),
        }
    }

    fn validate(&self) -> Result<(), InvalidParameter> {
        match self {
            Self::HalvingOffset(layout) => layout.validate(),
            Self::AngleLine(layout) => layout.validate(),
            Self::SubtreeWidth(layout) => layout.validate(),
        }
    }
}
