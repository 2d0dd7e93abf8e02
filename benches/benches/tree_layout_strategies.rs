// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_bst::BinaryTree;
use understory_sequence::Sequence;
use understory_tree_layout::{
    AngleLine, HalvingOffset, LayoutRecord, LayoutStrategy, SubtreeWidth, TreeLayout,
};
use understory_tree_view::{RecordingTarget, SceneConfig, TreeScene};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn gen_random_values(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = Rng::new(seed);
    (0..n).map(|_| (rng.next_u64() % 1_000_000) as u32).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("bst_insert");
    for &n in &[1_000usize, 50_000] {
        let values = gen_random_values(n, 0x9E37_79B9);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter(|| {
                let tree: BinaryTree<u32> = values.iter().copied().collect();
                black_box(tree.height());
            });
        });
    }
    // Sorted input degenerates into a list.
    let sorted: Vec<u32> = (0..5_000).collect();
    group.bench_function("sorted_n5000", |b| {
        b.iter_batched(
            BinaryTree::new,
            |mut tree| {
                tree.extend(sorted.iter().copied());
                black_box(tree.height());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let strategies: [(&str, LayoutStrategy); 3] = [
        ("halving", HalvingOffset::default().into()),
        ("angle", AngleLine::default().into()),
        ("width", SubtreeWidth::default().into()),
    ];
    let mut group = c.benchmark_group("layout_into");
    for &n in &[127usize, 4_095] {
        let tree: BinaryTree<u32> = gen_random_values(n, 0xDEAD_BEEF).into_iter().collect();
        group.throughput(Throughput::Elements(tree.len() as u64));
        for (name, strategy) in &strategies {
            group.bench_function(format!("{}_n{}", name, n), |b| {
                let mut out: Sequence<LayoutRecord<u32>> = Sequence::new();
                b.iter(|| {
                    strategy.layout_into(&tree, &mut out);
                    black_box(out.len());
                });
            });
        }
    }
    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let tree: BinaryTree<u32> = gen_random_values(1_000, 7).into_iter().collect();
    let Ok(mut scene) = TreeScene::new(tree, LayoutStrategy::default(), SceneConfig::default())
    else {
        return;
    };
    let mut target = RecordingTarget::new();
    c.bench_function("render_frame_n1000", |b| {
        b.iter(|| black_box(scene.render_frame(&mut target)));
    });
}

criterion_group!(benches, bench_insert, bench_layout, bench_frame);
criterion_main!(benches);
