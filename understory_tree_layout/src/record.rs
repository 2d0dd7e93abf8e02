// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout output records.

use kurbo::{Point, Rect};
use understory_sequence::Sequence;

/// Position of a [`LayoutRecord`] within the sequence produced by one layout pass.
///
/// Only meaningful for the sequence it came from, and only until that sequence is reset.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RecordIndex(pub(crate) usize);

impl RecordIndex {
    /// The raw index into the layout sequence.
    pub const fn get(self) -> usize {
        self.0
    }
}

/// One placed node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutRecord<T> {
    /// The node's value.
    pub value: T,
    /// Where the node's label is anchored. The root sits at the origin and `y` grows downward.
    pub position: Point,
    /// Edges from the root; `0` for the root.
    pub depth: usize,
    /// The record produced for this node's parent, or `None` for the root.
    pub parent: Option<RecordIndex>,
}

impl<T> LayoutRecord<T> {
    /// Resolve the parent reference within `records`.
    ///
    /// Uses strict indexing: a reference from some other pass that is out of range yields `None`.
    pub fn parent_record<'a>(&self, records: &'a Sequence<Self>) -> Option<&'a Self> {
        records.get(self.parent?.0)
    }
}

/// Smallest rectangle containing every record position, or `None` for an empty layout.
pub fn bounds<T>(records: &Sequence<LayoutRecord<T>>) -> Option<Rect> {
    records
        .iter()
        .map(|r| Rect::from_points(r.position, r.position))
        .reduce(|a, b| a.union(b))
}
