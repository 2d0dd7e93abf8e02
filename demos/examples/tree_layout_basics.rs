// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree layout basics.
//!
//! Build a small search tree, lay it out with each strategy, and print the records.
//!
//! Run:
//! - `cargo run -p understory_demos --example tree_layout_basics`

use understory_bst::BinaryTree;
use understory_sequence::Sequence;
use understory_tree_layout::{
    AngleLine, HalvingOffset, LayoutRecord, LayoutStrategy, SubtreeWidth, TreeLayout, bounds,
};

fn main() {
    let tree: BinaryTree<i32> = [5, 3, 2, 4, 7, 6, 8].into_iter().collect();
    let in_order: Vec<i32> = tree.traverse_inorder().copied().collect();
    println!("in-order: {in_order:?}, height {}", tree.height());

    let strategies: [(&str, LayoutStrategy); 3] = [
        ("halving offset", HalvingOffset::default().into()),
        ("angle line", AngleLine::default().into()),
        ("subtree width", SubtreeWidth::default().into()),
    ];

    // One buffer for every pass, as a frame loop would use it.
    let mut records: Sequence<LayoutRecord<i32>> = Sequence::new();
    for (name, strategy) in strategies {
        strategy.layout_into(&tree, &mut records);
        println!("{name}:");
        for record in &records {
            let parent = record.parent_record(&records).map(|p| p.value);
            println!(
                "  {:>2} at ({:>7.2}, {:>6.2}) depth {} parent {:?}",
                record.value, record.position.x, record.position.y, record.depth, parent
            );
        }
        if let Some(extent) = bounds(&records) {
            println!("  extent {:.2} x {:.2}", extent.width(), extent.height());
        }
    }
    println!(
        "buffer size {} after {} reallocations",
        records.size(),
        records.reallocations()
    );
}
