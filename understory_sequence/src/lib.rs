// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sequence --heading-base-level=0

//! Understory Sequence: a growable contiguous container with observable growth.
//!
//! Understory Sequence is the container layer under the tree view crates.
//!
//! - [`Sequence`] owns a single contiguous buffer whose logical capacity is always `0` or a power of two.
//! - Growth is explicit: the first push allocates room for one element and every overflow doubles the
//!   capacity, moving the existing elements into a fresh buffer.
//! - [`Sequence::reset`] empties the sequence but keeps the buffer, so a per-frame producer can refill it
//!   without reallocating. It is only offered for `Copy` element types, which own nothing that could leak.
//! - [`Sequence::clear`] drops every element and releases the buffer.
//! - [`OrderedPair`] is a key/value entry whose equality and ordering look only at the value.
//!
//! # Example
//!
//! ```rust
//! use understory_sequence::{Sequence, sequence};
//!
//! let mut seq: Sequence<u32> = Sequence::new();
//! let mut sizes = Vec::new();
//! for i in 0..5 {
//!     seq.push(i);
//!     sizes.push(seq.size());
//! }
//! assert_eq!(sizes, [1, 2, 4, 4, 8]);
//!
//! // Out-of-range reads clamp to the last element.
//! assert_eq!(seq.at(100), Some(&4));
//! // Strict reads are available too.
//! assert_eq!(seq.get(100), None);
//!
//! // Reuse the buffer for the next frame.
//! seq.reset();
//! assert_eq!((seq.len(), seq.size()), (0, 8));
//!
//! let digits = sequence![3, 1, 4];
//! assert_eq!(digits.as_slice(), &[3, 1, 4]);
//! ```
//!
//! ## Indexing contract
//!
//! [`Sequence::at`] and the [`Index`](core::ops::Index) impl never fail for a non-empty sequence:
//! an index at or past the end yields the last element.
//! Callers must not rely on out-of-range access to signal an error; use [`Sequence::get`] for that.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod pair;
mod sequence;

pub use pair::OrderedPair;
pub use sequence::Sequence;

/// Build a [`Sequence`] from a list of values, pushing them in order.
///
/// ```rust
/// use understory_sequence::sequence;
///
/// let seq = sequence![5, 3, 2];
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.size(), 4);
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Sequence::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut seq = $crate::Sequence::new();
        $(seq.push($value);)+
        seq
    }};
}
