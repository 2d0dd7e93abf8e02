// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The growable sequence container.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::{Index, IndexMut};

/// Contiguous growable buffer with power-of-two capacity.
///
/// `Sequence` tracks its logical capacity ([`size`](Self::size)) itself rather than deferring to
/// the allocator, so growth is deterministic:
///
/// - A fresh sequence has size `0` and holds no allocation.
/// - The first push allocates a buffer of size `1`.
/// - A push into a full buffer allocates a new buffer of twice the size, moves every element over,
///   and releases the old buffer.
///
/// The buffer is exclusively owned and released exactly once, either by [`clear`](Self::clear) or on drop.
pub struct Sequence<T> {
    buf: Vec<T>,
    size: usize,
    reallocations: usize,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Sequence<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sequence")
            .field("len", &self.len())
            .field("size", &self.size)
            .field("items", &self.as_slice())
            .finish()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.size);
        buf.extend_from_slice(&self.buf);
        Self {
            buf,
            size: self.size,
            reallocations: usize::from(self.size > 0),
        }
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> Sequence<T> {
    /// Create an empty sequence. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            size: 0,
            reallocations: 0,
        }
    }

    /// Create an empty sequence with room for at least `capacity` elements.
    ///
    /// The size is rounded up to the next power of two.
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::new();
        }
        let size = capacity.next_power_of_two();
        Self {
            buf: Vec::with_capacity(size),
            size,
            reallocations: 1,
        }
    }

    /// Number of elements currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Allocated capacity, in elements. Always `0` or a power of two.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether the sequence holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// How many buffers this sequence has allocated since it was created or last cleared.
    pub const fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Append `value`, growing the buffer if it is full.
    pub fn push(&mut self, value: T) {
        if self.buf.len() == self.size {
            self.grow();
        }
        self.buf.push(value);
    }

    /// Insert `value` after every element that compares less than or equal to it.
    ///
    /// Keeps an already sorted sequence sorted. Equal elements keep insertion order.
    pub fn insert_sorted(&mut self, value: T)
    where
        T: Ord,
    {
        let pos = self.buf.partition_point(|item| item <= &value);
        self.push(value);
        self.buf[pos..].rotate_right(1);
    }

    /// Element at `index`, clamped to the last element.
    ///
    /// Returns the element at `index` when `index < len`; otherwise returns the last element.
    /// Returns `None` only when the sequence is empty.
    pub fn at(&self, index: usize) -> Option<&T> {
        let last = self.len().checked_sub(1)?;
        self.buf.get(index.min(last))
    }

    /// Mutable element at `index`, clamped to the last element like [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        let last = self.len().checked_sub(1)?;
        self.buf.get_mut(index.min(last))
    }

    /// Element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Mutable element at `index`, or `None` when out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&T> {
        self.buf.first()
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.buf.last()
    }

    /// View the stored elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// View the stored elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Iterate the stored elements in order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Iterate the stored elements mutably in order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    /// Binary search a sequence sorted by `f`. See [`slice::binary_search_by_key`].
    pub fn binary_search_by_key<B: Ord>(
        &self,
        key: &B,
        f: impl FnMut(&T) -> B,
    ) -> Result<usize, usize> {
        self.buf.binary_search_by_key(key, f)
    }

    /// Drop every element and release the buffer.
    ///
    /// Afterwards the sequence is indistinguishable from [`Sequence::new`].
    pub fn clear(&mut self) {
        self.buf = Vec::new();
        self.size = 0;
        self.reallocations = 0;
    }

    fn grow(&mut self) {
        let size = if self.size == 0 { 1 } else { self.size * 2 };
        let mut fresh = Vec::with_capacity(size);
        fresh.append(&mut self.buf);
        // The emptied old buffer is released here.
        self.buf = fresh;
        self.size = size;
        self.reallocations += 1;
    }
}

impl<T: Copy> Sequence<T> {
    /// Set the length to zero while keeping the buffer.
    ///
    /// Subsequent pushes reuse the existing allocation until it is full again.
    /// Restricted to `Copy` elements: they have no destructor, so forgetting them cannot leak.
    /// Use [`clear`](Self::clear) for anything else.
    pub fn reset(&mut self) {
        self.buf.clear();
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    /// Clamped indexing; see [`Sequence::at`].
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    fn index(&self, index: usize) -> &T {
        self.at(index).expect("index into an empty Sequence")
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index).expect("index into an empty Sequence")
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter_mut()
    }
}
