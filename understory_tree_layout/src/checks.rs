// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout property checks shared by the strategy tests.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use understory_bst::BinaryTree;
use understory_sequence::Sequence;

use crate::record::LayoutRecord;

/// Deterministic pseudo-random trees with up to `max_len` nodes and plenty of duplicates.
pub(crate) fn random_trees(count: usize, max_len: u64) -> Vec<BinaryTree<u32>> {
    let mut state = 0x2545_F491_4F6C_DD1D_u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    (0..count)
        .map(|_| {
            let len = next() % (max_len + 1);
            (0..len).map(|_| (next() % 32) as u32).collect()
        })
        .collect()
}

/// A right-leaning chain `0, 10, ..., 10 * (height - 1)` whose last node has two leaf children,
/// so the deepest node with two children sits at depth `height - 1`.
pub(crate) fn tall_tree(height: u32) -> BinaryTree<u32> {
    let last = 10 * (height - 1);
    let mut tree: BinaryTree<u32> = (0..height).map(|i| 10 * i).collect();
    tree.insert(last - 5);
    tree.insert(last + 5);
    tree
}

fn in_subtree<T>(records: &Sequence<LayoutRecord<T>>, mut index: usize, root: usize) -> bool {
    loop {
        if index == root {
            return true;
        }
        match records[index].parent {
            Some(p) => index = p.get(),
            None => return false,
        }
    }
}

/// For every record with two children, no x position occurs in both child subtrees.
pub(crate) fn assert_siblings_disjoint<T>(records: &Sequence<LayoutRecord<T>>) {
    for parent in 0..records.len() {
        let children: Vec<usize> = (0..records.len())
            .filter(|&i| records[i].parent.map(|p| p.get()) == Some(parent))
            .collect();
        let [a, b] = children[..] else {
            continue;
        };
        let xs = |root: usize| -> Vec<f64> {
            (0..records.len())
                .filter(|&i| in_subtree(records, i, root))
                .map(|i| records[i].position.x)
                .collect()
        };
        let (left, right) = (xs(a), xs(b));
        for x in &left {
            assert!(
                right.iter().all(|y| !(-1e-9..=1e-9).contains(&(x - y))),
                "x = {x} appears under both children of record {parent}"
            );
        }
    }
}

/// Records come out in pre-order and each parent reference names the real parent.
pub(crate) fn assert_parents_match_tree<T: Copy + PartialEq + Debug>(
    tree: &BinaryTree<T>,
    records: &Sequence<LayoutRecord<T>>,
) {
    let mut expected: Vec<(T, Option<T>)> = Vec::new();
    if let Some(root) = tree.root() {
        let mut stack = vec![(root, None)];
        while let Some((node, parent)) = stack.pop() {
            expected.push((*node.value(), parent));
            let here = Some(*node.value());
            stack.extend(node.right().map(|n| (n, here)));
            stack.extend(node.left().map(|n| (n, here)));
        }
    }

    assert_eq!(records.len(), expected.len());
    for (record, (value, parent)) in records.iter().zip(expected) {
        assert_eq!(record.value, value);
        assert_eq!(record.parent_record(records).map(|p| p.value), parent);
    }
    let roots = records.iter().filter(|r| r.parent.is_none()).count();
    assert_eq!(roots, usize::from(!tree.is_empty()));
}
