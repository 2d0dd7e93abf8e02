// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key/value pairs ordered by value.

use core::cmp::Ordering;

/// A key/value association whose equality and ordering consider only `value`.
///
/// Sorting a table of pairs sorts it by value, and lookups by value can binary search it.
/// The key is a payload carried along.
///
/// Two pairs with equal keys but different values are not equal.
/// Two pairs with different keys but equal values compare equal; use [`same_entry`](Self::same_entry)
/// to compare both fields.
#[derive(Copy, Clone, Debug, Default)]
pub struct OrderedPair<K, V> {
    /// Payload.
    pub key: K,
    /// Ordering field.
    pub value: V,
}

impl<K, V> OrderedPair<K, V> {
    /// Create a pair.
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Split into `(key, value)`.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Whether both key and value match.
    pub fn same_entry(&self, other: &Self) -> bool
    where
        K: PartialEq,
        V: PartialEq,
    {
        self.key == other.key && self.value == other.value
    }
}

impl<K, V> From<(K, V)> for OrderedPair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

impl<K, V: PartialEq> PartialEq for OrderedPair<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K, V: Eq> Eq for OrderedPair<K, V> {}

impl<K, V: PartialOrd> PartialOrd for OrderedPair<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<K, V: Ord> Ord for OrderedPair<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}
